//! Rigid translation.

use nalgebra::Vector3;
use stl_types::Mesh;

/// Shift every vertex of `mesh` by `(dx, dy, dz)` in place.
///
/// Normals are untouched; a translation neither rotates nor scales.
pub fn translate(mesh: &mut Mesh, dx: f32, dy: f32, dz: f32) {
    mesh.translate(Vector3::new(dx, dy, dz));
}

/// A translated copy of `mesh`.
#[must_use]
pub fn translated(mesh: &Mesh, dx: f32, dy: f32, dz: f32) -> Mesh {
    let mut out = mesh.clone();
    translate(&mut out, dx, dy, dz);
    out
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use stl_types::Triangle;

    fn sample() -> Mesh {
        Mesh::from_triangles(vec![Triangle::from_arrays(
            [0.0, 1.0, 0.0],
            [0.5, 0.25, -1.0],
            [2.0, 0.25, -1.0],
            [0.5, 0.25, 3.0],
        )])
    }

    #[test]
    fn moves_vertices_not_normals() {
        let moved = translated(&sample(), 1.0, -2.0, 0.5);
        let tri = &moved.triangles[0];
        assert_eq!(tri.a, nalgebra::Point3::new(1.5, -1.75, -0.5));
        assert_eq!(tri.c.z, 3.5);
        assert_eq!(tri.normal, sample().triangles[0].normal);
    }

    #[test]
    fn zero_offset_is_identity() {
        assert_eq!(translated(&sample(), 0.0, 0.0, 0.0), sample());
    }

    #[test]
    fn inverse_offset_restores() {
        let mut mesh = sample();
        translate(&mut mesh, 4.0, -8.0, 16.0);
        translate(&mut mesh, -4.0, 8.0, -16.0);
        assert_eq!(mesh, sample());
    }
}
