//! STL facet type.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One STL facet: three vertices and the stored normal.
///
/// The normal is carried verbatim from the file (or from the builder that
/// produced the facet); it is never recomputed. Winding is expected to be
/// **counter-clockwise when viewed from the side the normal points to**.
///
/// # Example
///
/// ```
/// use stl_types::{Triangle, Point3, Vector3};
///
/// let tri = Triangle::new(
///     Vector3::new(0.0, 0.0, 1.0),
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-6);
/// assert!(tri.is_consistent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// Stored facet normal.
    pub normal: Vector3<f32>,
    /// First vertex.
    pub a: Point3<f32>,
    /// Second vertex.
    pub b: Point3<f32>,
    /// Third vertex.
    pub c: Point3<f32>,
}

impl Triangle {
    /// Create a triangle from a normal and three vertices.
    #[inline]
    #[must_use]
    pub const fn new(normal: Vector3<f32>, a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self { normal, a, b, c }
    }

    /// Create a triangle from coordinate arrays, normal first.
    ///
    /// This mirrors the on-disk field order of a binary STL record.
    #[inline]
    #[must_use]
    pub fn from_arrays(normal: [f32; 3], a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Self {
        Self {
            normal: Vector3::from(normal),
            a: Point3::from(a),
            b: Point3::from(b),
            c: Point3::from(c),
        }
    }

    /// The three vertices in winding order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f32>; 3] {
        [self.a, self.b, self.c]
    }

    /// Normal implied by the winding, `(b - a) × (c - a)`.
    ///
    /// Not normalized; its length is twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn winding_normal(&self) -> Vector3<f32> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Area of the triangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f32 {
        self.winding_normal().norm() * 0.5
    }

    /// Whether the winding agrees with the stored normal.
    ///
    /// Degenerate triangles and triangles with a zero normal are never
    /// consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.winding_normal().dot(&self.normal) > 0.0
    }

    /// Move every vertex by `offset`. The normal is unchanged.
    #[inline]
    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.a += offset;
        self.b += offset;
        self.c += offset;
    }

    /// Signed volume of the tetrahedron spanned by the origin and this
    /// triangle, `a · (b × c) / 6`, accumulated in `f64`.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let a = self.a.coords.cast::<f64>();
        let b = self.b.coords.cast::<f64>();
        let c = self.c.coords.cast::<f64>();
        a.dot(&b.cross(&c)) / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_xy() -> Triangle {
        Triangle::from_arrays(
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        )
    }

    #[test]
    fn winding_normal_follows_right_hand_rule() {
        let n = unit_xy().winding_normal();
        assert_relative_eq!(n.z, 1.0);
        assert_relative_eq!(n.x, 0.0);
    }

    #[test]
    fn reversed_winding_is_inconsistent() {
        let mut tri = unit_xy();
        std::mem::swap(&mut tri.b, &mut tri.c);
        assert!(!tri.is_consistent());
    }

    #[test]
    fn degenerate_is_inconsistent() {
        let tri = Triangle::from_arrays(
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
        );
        assert!(!tri.is_consistent());
        assert_relative_eq!(tri.area(), 0.0);
    }

    #[test]
    fn translate_keeps_normal() {
        let mut tri = unit_xy();
        tri.translate(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(tri.a, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(tri.c, Point3::new(1.0, 3.0, 3.0));
        assert_eq!(tri.normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn signed_volume_with_origin() {
        let tri = Triangle::from_arrays(
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        );
        assert_relative_eq!(tri.signed_volume(), 1.0 / 6.0);
    }
}
