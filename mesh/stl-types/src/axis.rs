//! Axis-aligned plane and facing vocabulary.
//!
//! Every face this workspace synthesizes lies in one of the three coordinate
//! planes and faces one of the two directions along that plane's normal axis.
//! Together the two enums name exactly the six axis-aligned unit normals.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three coordinate planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisPlane {
    /// The XY plane (normal along Z). Caps of an extrusion.
    Xy,
    /// The XZ plane (normal along Y). Walls at row boundaries.
    Xz,
    /// The YZ plane (normal along X). Walls at column boundaries.
    Yz,
}

impl AxisPlane {
    /// Index (0 = X, 1 = Y, 2 = Z) of the axis orthogonal to the plane.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_types::AxisPlane;
    ///
    /// assert_eq!(AxisPlane::Xy.normal_axis(), 2);
    /// assert_eq!(AxisPlane::Yz.normal_axis(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn normal_axis(self) -> usize {
        match self {
            Self::Xy => 2,
            Self::Xz => 1,
            Self::Yz => 0,
        }
    }

    /// The two in-plane axis indices `(u, v)`, ordered so that `u × v`
    /// points along the positive normal axis.
    ///
    /// Counter-clockwise in `(u, v)` is therefore counter-clockwise when
    /// viewed from the positive side of the plane.
    #[inline]
    #[must_use]
    pub const fn in_plane_axes(self) -> (usize, usize) {
        match self {
            Self::Xy => (0, 1),
            Self::Xz => (2, 0),
            Self::Yz => (1, 2),
        }
    }

    /// The unit normal of this plane facing the given direction.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_types::{AxisPlane, Facing, Vector3};
    ///
    /// assert_eq!(AxisPlane::Xz.normal(Facing::Negative), Vector3::new(0.0, -1.0, 0.0));
    /// ```
    #[must_use]
    pub fn normal(self, facing: Facing) -> Vector3<f32> {
        let mut n = Vector3::zeros();
        n[self.normal_axis()] = facing.signum();
        n
    }
}

/// Which way a face looks along its plane's normal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Facing {
    /// Toward increasing coordinate.
    Positive,
    /// Toward decreasing coordinate.
    Negative,
}

impl Facing {
    /// `1.0` or `-1.0`.
    #[inline]
    #[must_use]
    pub const fn signum(self) -> f32 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    /// The opposite direction.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}
