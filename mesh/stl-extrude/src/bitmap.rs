//! Monochrome bitmap loading.
//!
//! The bitmap format is one byte per cell, row-major, with no header:
//! `'0'` is empty and any other byte is filled. Bytes beyond
//! `width * height` are ignored, which tolerates a trailing newline.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ExtrudeError, ExtrudeResult};
use crate::grid::OccupancyGrid;

/// Raster formats recognized by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    /// One byte per cell (`.hmp` and anything unrecognized).
    Bitmap,
    /// PNG image. Recognized, not decoded.
    Png,
}

impl RasterFormat {
    /// Infer the format from the file extension (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use stl_extrude::RasterFormat;
    ///
    /// assert_eq!(RasterFormat::from_path("logo.PNG"), RasterFormat::Png);
    /// assert_eq!(RasterFormat::from_path("logo.hmp"), RasterFormat::Bitmap);
    /// ```
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Bitmap,
        }
    }

    /// Whether [`OccupancyGrid::load_bitmap`] can decode this format.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Bitmap)
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bitmap => "bitmap",
            Self::Png => "PNG",
        })
    }
}

impl OccupancyGrid {
    /// Decode a monochrome bitmap of `width` by `height` cells.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrudeError::BitmapTooShort`] if `bytes` has fewer than
    /// `width * height` bytes.
    pub fn from_bitmap(bytes: &[u8], width: usize, height: usize) -> ExtrudeResult<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(ExtrudeError::GridTooLarge { width, height })?;
        let Some(data) = bytes.get(..expected) else {
            return Err(ExtrudeError::BitmapTooShort {
                expected,
                got: bytes.len(),
            });
        };
        Self::from_cells(width, height, data.iter().map(|&b| b != b'0').collect())
    }

    /// Load a raster file as a grid.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrudeError::UnsupportedRaster`] for PNG files,
    /// [`ExtrudeError::FileNotFound`] if the file is missing, or any error
    /// from [`OccupancyGrid::from_bitmap`].
    pub fn load_bitmap<P: AsRef<Path>>(path: P, width: usize, height: usize) -> ExtrudeResult<Self> {
        let path = path.as_ref();
        let format = RasterFormat::from_path(path);
        if !format.is_supported() {
            return Err(ExtrudeError::UnsupportedRaster {
                path: path.to_path_buf(),
                format,
            });
        }

        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExtrudeError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ExtrudeError::Io(e)
            }
        })?;

        let grid = Self::from_bitmap(&bytes, width, height)?;
        debug!(
            path = %path.display(),
            width,
            height,
            filled = grid.filled_count(),
            "Loaded bitmap"
        );
        Ok(grid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn zero_byte_is_empty_anything_else_filled() {
        let grid = OccupancyGrid::from_bitmap(b"0 1x", 4, 1).unwrap();
        assert_eq!(grid.cells(), &[false, true, true, true]);
    }

    #[test]
    fn extra_bytes_are_ignored() {
        let grid = OccupancyGrid::from_bitmap(b"1001\n", 2, 2).unwrap();
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn short_bitmap_is_an_error() {
        let err = OccupancyGrid::from_bitmap(b"101", 2, 2).unwrap_err();
        assert!(matches!(
            err,
            ExtrudeError::BitmapTooShort {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shape.hmp");
        fs::write(&path, b"010111010").unwrap();

        let grid = OccupancyGrid::load_bitmap(&path, 3, 3).unwrap();
        assert_eq!(grid.filled_count(), 5);
        assert_eq!(grid.get(1, 0), Some(true));
    }

    #[test]
    fn png_is_rejected() {
        let err = OccupancyGrid::load_bitmap("logo.png", 3, 3).unwrap_err();
        assert!(matches!(
            err,
            ExtrudeError::UnsupportedRaster {
                format: RasterFormat::Png,
                ..
            }
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let err = OccupancyGrid::load_bitmap(dir.path().join("gone.hmp"), 1, 1).unwrap_err();
        assert!(matches!(err, ExtrudeError::FileNotFound { .. }));
    }
}
