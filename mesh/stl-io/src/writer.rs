//! Streaming STL writer with deferred count patch-up.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use stl_types::{Mesh, Triangle};
use tracing::debug;

use crate::binary::patch_triangle_count;
use crate::codec::StlCodec;
use crate::encoding::Encoding;
use crate::error::{IoError, IoResult};

/// Writes triangles one at a time in either encoding.
///
/// The header is written on construction with a count hint (use 0 when the
/// final count is unknown). [`finish`](Self::finish) writes the ASCII footer,
/// or, for binary output whose triangle count differs from the hint, seeks
/// back and patches the count in the header.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use stl_io::{Encoding, StlWriter};
/// use stl_types::Triangle;
///
/// let tri = Triangle::from_arrays([0.0, 0.0, 1.0], [0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
///
/// let mut writer = StlWriter::new(Cursor::new(Vec::new()), Encoding::Binary, 0).unwrap();
/// writer.write_triangle(&tri).unwrap();
/// writer.write_triangle(&tri).unwrap();
/// let bytes = writer.finish().unwrap().into_inner();
///
/// assert_eq!(bytes.len(), 84 + 2 * 50);
/// assert_eq!(&bytes[80..84], &2u32.to_le_bytes());
/// ```
pub struct StlWriter<W: Write> {
    writer: W,
    codec: Box<dyn StlCodec>,
    hint: u32,
    written: u64,
}

impl StlWriter<BufWriter<File>> {
    /// Create (or truncate) a file and write a header with a zero count hint.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn create<P: AsRef<Path>>(path: P, encoding: Encoding) -> IoResult<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!(path = %path.display(), %encoding, "Created STL for writing");
        Self::new(BufWriter::new(file), encoding, 0)
    }
}

impl<W: Write> StlWriter<W> {
    /// Write the header for `encoding` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(mut writer: W, encoding: Encoding, count_hint: u32) -> IoResult<Self> {
        let codec = encoding.codec();
        codec.write_header(&mut writer, count_hint)?;
        Ok(Self {
            writer,
            codec,
            hint: count_hint,
            written: 0,
        })
    }

    /// Encoding being written.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.codec.encoding()
    }

    /// Number of triangles written so far.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.written
    }

    /// Write one triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_triangle(&mut self, triangle: &Triangle) -> IoResult<()> {
        self.codec.write_triangle(&mut self.writer, triangle)?;
        self.written += 1;
        Ok(())
    }

    /// Write every triangle of `mesh`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_mesh(&mut self, mesh: &Mesh) -> IoResult<()> {
        for triangle in mesh {
            self.write_triangle(triangle)?;
        }
        Ok(())
    }
}

impl<W: Write + Seek> StlWriter<W> {
    /// Close out the stream and return the sink.
    ///
    /// Writes the footer (ASCII) or patches the header count (binary, only
    /// when it differs from the hint), then flushes.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::TooManyTriangles`] if a binary stream holds more
    /// than `u32::MAX` triangles, or any I/O error.
    pub fn finish(mut self) -> IoResult<W> {
        self.codec.write_footer(&mut self.writer)?;

        if self.encoding() == Encoding::Binary && u64::from(self.hint) != self.written {
            let count = u32::try_from(self.written).map_err(|_| IoError::TooManyTriangles {
                count: self.written,
            })?;
            patch_triangle_count(&mut self.writer, count)?;
        }

        self.writer.flush()?;
        debug!(triangles = self.written, encoding = %self.encoding(), "Finished STL output");
        Ok(self.writer)
    }
}
