//! Core value types for STL solids.
//!
//! This crate provides the foundational types shared by the codec, the face
//! builders and the extrusion engine:
//!
//! - [`Triangle`] - Three vertices plus the stored facet normal
//! - [`Mesh`] - An ordered list of triangles (the STL "solid")
//! - [`AxisPlane`] / [`Facing`] - Vocabulary for axis-aligned faces
//!
//! # Precision
//!
//! STL stores IEEE-754 single precision, so every coordinate here is `f32`.
//! Keeping the in-memory type identical to the wire type means a binary
//! round trip is bit-exact.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Face winding is
//! **counter-clockwise (CCW) when viewed from the side the normal points to**.
//! Nothing enforces this at runtime; [`Triangle::is_consistent`] lets callers
//! check it.
//!
//! # Example
//!
//! ```
//! use stl_types::{Mesh, Triangle};
//!
//! let mut mesh = Mesh::new();
//! mesh.push(Triangle::from_arrays(
//!     [0.0, 0.0, 1.0],
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//! ));
//!
//! assert_eq!(mesh.len(), 1);
//! assert!(mesh.triangles[0].is_consistent());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod axis;
mod mesh;
mod triangle;

pub use axis::{AxisPlane, Facing};
pub use mesh::Mesh;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

/// A vertex position in single precision.
pub type Vertex = Point3<f32>;

/// A facet normal in single precision.
pub type Normal = Vector3<f32>;
