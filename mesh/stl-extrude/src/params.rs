//! Extrusion parameters.

use crate::error::{ExtrudeError, ExtrudeResult};
use crate::style::ExtrusionStyle;

/// Configuration for one extrusion.
///
/// Cell `(row, col)` covers `[col * x_scale, (col + 1) * x_scale]` in X and
/// `[row * y_scale, (row + 1) * y_scale]` in Y. The solid spans
/// `[base, base + depth]` in Z.
///
/// # Examples
///
/// ```
/// use stl_extrude::ExtrudeParams;
///
/// // A 200x100 pixel image printed 50mm wide, 25mm tall and 2mm thick.
/// let params = ExtrudeParams::for_output(200, 100, 50.0, 25.0, 2.0, 0.0);
/// assert_eq!(params.x_scale, 0.25);
///
/// let params = ExtrudeParams::default().with_depth(1.5).with_base(0.5);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrudeParams {
    /// Output units per grid column.
    pub x_scale: f32,

    /// Output units per grid row.
    pub y_scale: f32,

    /// Height of the extruded walls.
    pub depth: f32,

    /// Z offset of the bottom cap. When positive it is also the thickness of
    /// the optional base slab; zero or negative means no slab.
    pub base: f32,

    /// Extrusion style. Only [`ExtrusionStyle::Extrude`] is implemented.
    pub style: ExtrusionStyle,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            x_scale: 1.0,
            y_scale: 1.0,
            depth: 10.0,
            base: 0.0,
            style: ExtrusionStyle::Extrude,
        }
    }
}

impl ExtrudeParams {
    /// Parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale a `grid_width` by `grid_height` grid to fit `width` by `height`
    /// output units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_output(
        grid_width: usize,
        grid_height: usize,
        width: f32,
        height: f32,
        depth: f32,
        base: f32,
    ) -> Self {
        Self {
            x_scale: width / grid_width as f32,
            y_scale: height / grid_height as f32,
            depth,
            base,
            style: ExtrusionStyle::Extrude,
        }
    }

    /// Set both cell scales.
    #[must_use]
    pub const fn with_scale(mut self, x_scale: f32, y_scale: f32) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    /// Set the wall height.
    #[must_use]
    pub const fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the base offset.
    #[must_use]
    pub const fn with_base(mut self, base: f32) -> Self {
        self.base = base;
        self
    }

    /// Set the extrusion style.
    #[must_use]
    pub const fn with_style(mut self, style: ExtrusionStyle) -> Self {
        self.style = style;
        self
    }

    /// Z of the bottom cap.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.base
    }

    /// Z of the top cap.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.base + self.depth
    }

    /// Check that scales and depth are finite and positive and that the
    /// base is finite. A negative base just moves the solid below `z = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrudeError::InvalidParams`] naming the first bad value.
    pub fn validate(&self) -> ExtrudeResult<()> {
        const POSITIVE: &str = "finite and positive";

        for (name, value) in [
            ("x_scale", self.x_scale),
            ("y_scale", self.y_scale),
            ("depth", self.depth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ExtrudeError::invalid(name, POSITIVE, value));
            }
        }

        if !self.base.is_finite() {
            return Err(ExtrudeError::invalid("base", "finite", self.base));
        }

        Ok(())
    }
}
