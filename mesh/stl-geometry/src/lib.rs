//! Geometry builders for STL solids.
//!
//! - [`build_axis_face`] - a two-triangle rectangle in a coordinate plane
//! - [`build_rect_prism`] - a closed 12-triangle box
//! - [`translate`] / [`translated`] - rigid translation of a whole mesh
//!
//! Every builder here takes a [`Facing`](stl_types::Facing) rather than a
//! free normal vector, so a face can only point along one of the six axis
//! directions, and its winding is derived from that direction.
//!
//! # Example
//!
//! ```
//! use stl_geometry::{build_rect_prism, translate};
//! use stl_types::Point3;
//!
//! let mut cube = build_rect_prism(Point3::origin(), 1.0, 1.0, 1.0);
//! translate(&mut cube, 5.0, 0.0, 0.0);
//!
//! assert_eq!(cube.len(), 12);
//! assert!((cube.signed_volume() - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod face;
mod prism;
mod transform;

pub use face::build_axis_face;
pub use prism::build_rect_prism;
pub use transform::{translate, translated};
