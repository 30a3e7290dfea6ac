//! Closed rectangular boxes.

use nalgebra::Point3;
use stl_types::{AxisPlane, Facing, Mesh};

use crate::face::build_axis_face;

/// Build a closed box anchored at `root` with the given extents.
///
/// Emits 12 triangles, two per face, in the order bottom, top, left, right,
/// front, back. Every face points outward when the extents are positive.
///
/// # Example
///
/// ```
/// use stl_geometry::build_rect_prism;
/// use stl_types::Point3;
///
/// let slab = build_rect_prism(Point3::origin(), 2.0, 3.0, 4.0);
/// assert!((slab.signed_volume() - 24.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn build_rect_prism(root: Point3<f32>, extent_x: f32, extent_y: f32, extent_z: f32) -> Mesh {
    let far = Point3::new(root.x + extent_x, root.y + extent_y, root.z + extent_z);

    let faces = [
        // bottom / top
        (AxisPlane::Xy, root, far, Facing::Negative),
        (AxisPlane::Xy, Point3::new(root.x, root.y, far.z), far, Facing::Positive),
        // left / right
        (AxisPlane::Yz, root, far, Facing::Negative),
        (AxisPlane::Yz, Point3::new(far.x, root.y, root.z), far, Facing::Positive),
        // front / back
        (AxisPlane::Xz, root, far, Facing::Negative),
        (AxisPlane::Xz, Point3::new(root.x, far.y, root.z), far, Facing::Positive),
    ];

    let mut mesh = Mesh::with_capacity(12);
    for (plane, a, b, facing) in faces {
        mesh.push_face(build_axis_face(plane, a, b, facing));
    }
    mesh
}
