//! Base slab under an extrusion.

// Grid sizes become coordinates.
#![allow(clippy::cast_precision_loss)]

use nalgebra::Point3;
use stl_geometry::build_rect_prism;
use stl_types::Mesh;

use crate::params::ExtrudeParams;

/// A slab under the whole grid footprint, `params.base` thick.
///
/// Spans `[0, grid_width * x_scale] x [0, grid_height * y_scale] x [0, base]`,
/// so it meets the bottom caps of [`extrude`](crate::extrude) exactly.
/// Returns `None` when `base` is zero or negative.
///
/// # Example
///
/// ```
/// use stl_extrude::{base_slab, ExtrudeParams};
///
/// let params = ExtrudeParams::default().with_base(0.5);
/// let slab = base_slab(4, 2, &params).unwrap();
/// assert_eq!(slab.len(), 12);
/// assert!((slab.signed_volume() - 4.0).abs() < 1e-6);
///
/// assert!(base_slab(4, 2, &ExtrudeParams::default()).is_none());
/// ```
#[must_use]
pub fn base_slab(grid_width: usize, grid_height: usize, params: &ExtrudeParams) -> Option<Mesh> {
    if params.base <= 0.0 {
        return None;
    }
    Some(build_rect_prism(
        Point3::origin(),
        grid_width as f32 * params.x_scale,
        grid_height as f32 * params.y_scale,
        params.base,
    ))
}
