//! Heightmap extrusion for STL solids.
//!
//! Turns a 2D occupancy grid (filled/empty cells) into a triangle mesh:
//! vertical walls wherever a filled cell meets an empty one, plus flat top
//! and bottom caps built from a greedy rectangle decomposition.
//!
//! - [`OccupancyGrid`] - the input, loadable from a monochrome bitmap
//! - [`ExtrudeParams`] - cell scale, depth, base and style
//! - [`extrude`] - the engine, returning an [`Extrusion`]
//! - [`base_slab`] - an optional plate under the footprint
//!
//! # Closed Solids
//!
//! Walls are only generated between cells, never along the outer edge of
//! the grid. A shape touching the edge is left open there. Call
//! [`OccupancyGrid::padded`] first to get a closed solid.
//!
//! # Example
//!
//! ```
//! use stl_extrude::{base_slab, extrude, ExtrudeParams, OccupancyGrid};
//!
//! let grid = OccupancyGrid::from_bitmap(b"01101111", 4, 2)
//!     .unwrap()
//!     .padded()
//!     .unwrap();
//!
//! let params = ExtrudeParams::for_output(grid.width(), grid.height(), 12.0, 8.0, 2.0, 1.0);
//! let (width, height) = (grid.width(), grid.height());
//!
//! let mut mesh = extrude(grid, &params).unwrap().mesh;
//! if let Some(slab) = base_slab(width, height, &params) {
//!     mesh.merge(&slab);
//! }
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod base;
mod bitmap;
mod error;
mod extrude;
mod grid;
mod params;
mod style;

pub use base::base_slab;
pub use bitmap::RasterFormat;
pub use error::{ExtrudeError, ExtrudeResult};
pub use extrude::{CapRect, Extrusion, extrude};
pub use grid::OccupancyGrid;
pub use params::ExtrudeParams;
pub use style::ExtrusionStyle;
