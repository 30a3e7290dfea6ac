//! Error types for STL I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing STL data.
///
/// A clean end of data is not an error: readers report it as `Ok(None)`.
/// Everything here means the input was unreadable or corrupt.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The stream held no bytes at all, so no encoding could be detected.
    #[error("input is empty")]
    EmptyInput,

    /// Binary header shorter than 84 bytes.
    #[error("invalid STL header: expected {expected} bytes, got {got}")]
    InvalidHeader {
        /// Expected header size.
        expected: usize,
        /// Actual number of bytes available.
        got: usize,
    },

    /// A binary triangle record was cut short.
    #[error("truncated triangle record {index}: expected 50 bytes, got {got}")]
    TruncatedRecord {
        /// Zero-based index of the record.
        index: u64,
        /// Bytes available for that record.
        got: usize,
    },

    /// ASCII content did not follow the facet grammar.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// One-based line number where parsing failed.
        line: usize,
        /// Description of what was expected.
        message: String,
    },

    /// More triangles than a binary count field can hold.
    #[error("too many triangles for a binary STL count: {count}")]
    TooManyTriangles {
        /// Number of triangles written.
        count: u64,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create a `Parse` error at the given line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Map an open failure to `FileNotFound` when that is what happened.
    pub(crate) fn from_open(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }
}
