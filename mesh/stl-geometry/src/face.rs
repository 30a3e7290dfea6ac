//! Rectangular faces in the coordinate planes.

use nalgebra::Point3;
use stl_types::{AxisPlane, Facing, Triangle};

/// Build a rectangle lying in `plane` as two triangles facing `facing`.
///
/// `corner_a` and `corner_b` are opposite corners of the rectangle. Only
/// their in-plane coordinates are used to span it, and the order they are
/// given in does not matter. The coordinate along the plane's normal axis
/// is taken from `corner_a`.
///
/// Both triangles wind counter-clockwise when viewed from the side the
/// normal points to, so [`Triangle::is_consistent`] holds for any
/// non-degenerate rectangle.
///
/// # Example
///
/// ```
/// use stl_geometry::build_axis_face;
/// use stl_types::{AxisPlane, Facing, Point3, Vector3};
///
/// // Bottom of a unit cube, looking down.
/// let [t0, t1] = build_axis_face(
///     AxisPlane::Xy,
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Facing::Negative,
/// );
///
/// assert_eq!(t0.normal, Vector3::new(0.0, 0.0, -1.0));
/// assert!(t0.is_consistent() && t1.is_consistent());
/// ```
#[must_use]
pub fn build_axis_face(
    plane: AxisPlane,
    corner_a: Point3<f32>,
    corner_b: Point3<f32>,
    facing: Facing,
) -> [Triangle; 2] {
    let (u, v) = plane.in_plane_axes();
    let level = corner_a[plane.normal_axis()];

    let (u0, u1) = ordered(corner_a[u], corner_b[u]);
    let (v0, v1) = ordered(corner_a[v], corner_b[v]);

    let at = |pu: f32, pv: f32| {
        let mut p = Point3::origin();
        p[u] = pu;
        p[v] = pv;
        p[plane.normal_axis()] = level;
        p
    };

    // Counter-clockwise in (u, v) is counter-clockwise seen from +normal.
    let p00 = at(u0, v0);
    let p10 = at(u1, v0);
    let p11 = at(u1, v1);
    let p01 = at(u0, v1);

    let normal = plane.normal(facing);
    match facing {
        Facing::Positive => [
            Triangle::new(normal, p00, p10, p11),
            Triangle::new(normal, p00, p11, p01),
        ],
        Facing::Negative => [
            Triangle::new(normal, p00, p11, p10),
            Triangle::new(normal, p00, p01, p11),
        ],
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
