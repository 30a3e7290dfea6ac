//! STL toolkit: codec, solid builders and heightmap extrusion.
//!
//! This umbrella crate re-exports the `stl-*` crates under short module
//! names.
//!
//! # Quick Start
//!
//! ```no_run
//! use stlkit::prelude::*;
//!
//! // Convert a file to the other encoding
//! let (encoding, mut mesh) = load_stl("part.stl").unwrap();
//! translate(&mut mesh, 0.0, 0.0, 5.0);
//! save_stl(&mesh, "part-moved.stl", encoding.other()).unwrap();
//!
//! // Extrude a bitmap into a closed solid
//! let grid = OccupancyGrid::load_bitmap("logo.hmp", 64, 32).unwrap().padded().unwrap();
//! let params = ExtrudeParams::default().with_depth(2.0);
//! let solid = extrude(grid, &params).unwrap();
//! save_stl(&solid.mesh, "logo.stl", Encoding::Binary).unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - `Triangle`, `Mesh`, `AxisPlane`, `Facing`
//! - [`io`] - Binary and ASCII codec, streaming reader and writer
//! - [`geometry`] - Axis-aligned faces, boxes, translation
//! - [`extrude`] - Occupancy grids and the extrusion engine
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` on the model types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core value types: `Triangle`, `Mesh`, `AxisPlane`, `Facing`.
pub use stl_types as types;

/// Binary and ASCII STL encoding.
pub use stl_io as io;

/// Face and box builders, translation.
pub use stl_geometry as geometry;

/// Occupancy grids and heightmap extrusion.
pub use stl_extrude as extrude;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports.
///
/// # Usage
///
/// ```
/// use stlkit::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use stl_types::{AxisPlane, Facing, Mesh, Point3, Triangle, Vector3};

    // I/O
    pub use stl_io::{Encoding, StlReader, StlWriter, copy_triangles, load_stl, save_stl};

    // Geometry
    pub use stl_geometry::{build_axis_face, build_rect_prism, translate};

    // Extrusion
    pub use stl_extrude::{ExtrudeParams, ExtrusionStyle, OccupancyGrid, base_slab, extrude};
}

// =============================================================================
// Tests
// =============================================================================
