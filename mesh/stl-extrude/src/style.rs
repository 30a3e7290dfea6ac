//! Extrusion styles.

use std::fmt;

/// How filled cells turn into material.
///
/// Only [`ExtrusionStyle::Extrude`] is implemented; the others are named so
/// callers can ask for them and get a clear
/// [`UnsupportedStyle`](crate::ExtrudeError::UnsupportedStyle) error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtrusionStyle {
    /// Raise filled cells into a solid.
    #[default]
    Extrude,
    /// Remove filled cells from a solid.
    Cut,
    /// Sink filled cells below the surface.
    Sunken,
    /// Raise filled cells in relief on a plate.
    Relief,
}

impl ExtrusionStyle {
    /// Every style, in declaration order.
    pub const ALL: [Self; 4] = [Self::Extrude, Self::Cut, Self::Sunken, Self::Relief];

    /// Lower-case name as used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Extrude => "extrude",
            Self::Cut => "cut",
            Self::Sunken => "sunken",
            Self::Relief => "relief",
        }
    }

    /// Whether [`extrude`](crate::extrude) can produce this style.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Extrude)
    }
}

impl fmt::Display for ExtrusionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
