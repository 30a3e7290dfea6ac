//! Triangle soup mesh.

use crate::Triangle;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered list of triangles.
///
/// This is exactly what an STL file holds: no shared vertices, no topology.
/// Order has no geometric meaning but it is the serialization order, and
/// every operation in this workspace preserves it.
///
/// # Example
///
/// ```
/// use stl_types::{Mesh, Triangle};
///
/// let tri = Triangle::from_arrays(
///     [0.0, 0.0, 1.0],
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
/// );
/// let mesh: Mesh = std::iter::repeat(tri).take(4).collect();
///
/// assert_eq!(mesh.len(), 4);
/// assert!((mesh.surface_area() - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    /// Triangles in serialization order.
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Create an empty mesh with room for `capacity` triangles.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Wrap an existing triangle list.
    #[inline]
    #[must_use]
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Append one triangle.
    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Append both halves of a rectangular face.
    #[inline]
    pub fn push_face(&mut self, face: [Triangle; 2]) {
        self.triangles.extend(face);
    }

    /// Move all triangles of `other` to the end of this mesh.
    pub fn append(&mut self, other: &mut Self) {
        self.triangles.append(&mut other.triangles);
    }

    /// Copy all triangles of `other` to the end of this mesh.
    ///
    /// No welding or coordinate reconciliation is done; the two meshes
    /// must already share a coordinate system.
    pub fn merge(&mut self, other: &Self) {
        self.triangles.extend_from_slice(&other.triangles);
    }

    /// Iterate over the triangles in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Translate every vertex by `offset`, in place. Normals are unchanged.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        for triangle in &mut self.triangles {
            triangle.translate(offset);
        }
    }

    /// Signed enclosed volume by the divergence theorem.
    ///
    /// Positive for a closed mesh whose faces wind outward, negative when
    /// inside-out, meaningless for an open mesh.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles.iter().map(Triangle::signed_volume).sum()
    }

    /// Total area of all triangles.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles.iter().map(|t| f64::from(t.area())).sum()
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triangle> for Mesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl IntoIterator for Mesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tri(z: f32) -> Triangle {
        Triangle::from_arrays(
            [0.0, 0.0, 1.0],
            [0.0, 0.0, z],
            [1.0, 0.0, z],
            [0.0, 1.0, z],
        )
    }

    #[test]
    fn empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.len(), 0);
        assert_relative_eq!(mesh.signed_volume(), 0.0);
    }

    #[test]
    fn merge_preserves_order() {
        let mut first = Mesh::from_triangles(vec![tri(0.0)]);
        let second = Mesh::from_triangles(vec![tri(1.0), tri(2.0)]);
        first.merge(&second);

        let zs: Vec<f32> = first.iter().map(|t| t.a.z).collect();
        assert_eq!(zs, vec![0.0, 1.0, 2.0]);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn append_drains_other() {
        let mut first = Mesh::from_triangles(vec![tri(0.0)]);
        let mut second = Mesh::from_triangles(vec![tri(1.0)]);
        first.append(&mut second);
        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
    }

    #[test]
    fn translate_moves_every_vertex() {
        let mut mesh: Mesh = [tri(0.0), tri(5.0)].into_iter().collect();
        mesh.translate(Vector3::new(0.0, 0.0, 1.5));
        assert_relative_eq!(mesh.triangles[0].c.z, 1.5);
        assert_relative_eq!(mesh.triangles[1].b.z, 6.5);
        assert_relative_eq!(mesh.triangles[1].normal.z, 1.0);
    }

    #[test]
    fn extend_and_iterate() {
        let mut mesh = Mesh::with_capacity(3);
        mesh.extend([tri(0.0), tri(1.0)]);
        mesh.push(tri(2.0));
        assert_eq!((&mesh).into_iter().count(), 3);
        assert_eq!(mesh.into_iter().last().map(|t| t.a.z), Some(2.0));
    }
}
