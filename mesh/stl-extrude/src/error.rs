//! Error types for extrusion.

use std::path::PathBuf;

use thiserror::Error;

use crate::bitmap::RasterFormat;
use crate::style::ExtrusionStyle;

/// Result type for extrusion operations.
pub type ExtrudeResult<T> = Result<T, ExtrudeError>;

/// Errors that can occur while loading a grid or extruding it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtrudeError {
    /// A scale, depth or base value is out of range.
    #[error("{name} must be {requirement}, got {value}")]
    InvalidParams {
        /// Parameter name.
        name: &'static str,
        /// What the value must satisfy.
        requirement: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// `width * height` does not fit in memory.
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge {
        /// Columns requested.
        width: usize,
        /// Rows requested.
        height: usize,
    },

    /// Cell buffer length does not match the grid dimensions.
    #[error("grid of {width}x{height} needs {expected} cells, got {got}")]
    CellCountMismatch {
        /// Columns.
        width: usize,
        /// Rows.
        height: usize,
        /// `width * height`.
        expected: usize,
        /// Cells supplied.
        got: usize,
    },

    /// Bitmap holds fewer bytes than the grid has cells.
    #[error("bitmap too short: expected {expected} bytes, got {got}")]
    BitmapTooShort {
        /// `width * height`.
        expected: usize,
        /// Bytes available.
        got: usize,
    },

    /// The style is declared but has no implementation.
    #[error("extrusion style `{0}` is not supported")]
    UnsupportedStyle(ExtrusionStyle),

    /// The raster format cannot be decoded.
    #[error("cannot decode {format} raster: {path}")]
    UnsupportedRaster {
        /// Offending file.
        path: PathBuf,
        /// Format inferred from the file name.
        format: RasterFormat,
    },

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtrudeError {
    pub(crate) const fn invalid(name: &'static str, requirement: &'static str, value: f32) -> Self {
        Self::InvalidParams {
            name,
            requirement,
            value,
        }
    }
}
