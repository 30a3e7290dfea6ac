//! Streaming STL reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use stl_types::{Mesh, Triangle};
use tracing::{debug, warn};

use crate::codec::StlCodec;
use crate::encoding::Encoding;
use crate::error::{IoError, IoResult};

/// Upper bound on triangles reserved from a header count.
const MAX_PREALLOCATED: usize = 1 << 20;

/// Reads triangles one at a time from an STL stream of either encoding.
///
/// The encoding is detected and the header consumed on construction.
/// Triangles are then pulled with [`read_triangle`](Self::read_triangle) or
/// by iterating, so arbitrarily large files never need to be held in memory.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use stl_io::{Encoding, StlReader};
///
/// let text = "solid\n facet normal 0 0 1\n outer loop\n vertex 0 0 0\n \
///             vertex 1 0 0\n vertex 0 1 0\n endloop\n endfacet\nendsolid\n";
/// let reader = StlReader::new(Cursor::new(text)).unwrap();
/// assert_eq!(reader.encoding(), Encoding::Ascii);
///
/// let triangles: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
/// assert_eq!(triangles.len(), 1);
/// ```
pub struct StlReader<R: BufRead> {
    reader: R,
    codec: Box<dyn StlCodec>,
    declared: Option<u32>,
    read: u64,
    done: bool,
}

impl StlReader<BufReader<File>> {
    /// Open a file and read its header.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if the path does not exist, or any
    /// error from [`StlReader::new`].
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
        debug!(path = %path.display(), "Opened STL for reading");
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> StlReader<R> {
    /// Detect the encoding of `reader` and consume the header.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is empty or the header is malformed.
    pub fn new(mut reader: R) -> IoResult<Self> {
        let encoding = Encoding::detect(&mut reader)?;
        Self::with_encoding(reader, encoding)
    }

    /// Consume the header assuming a known encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is malformed.
    pub fn with_encoding(mut reader: R, encoding: Encoding) -> IoResult<Self> {
        let mut codec = encoding.codec();
        let declared = codec.read_header(&mut reader)?;
        Ok(Self {
            reader,
            codec,
            declared,
            read: 0,
            done: false,
        })
    }

    /// Encoding of the stream.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.codec.encoding()
    }

    /// Triangle count declared in a binary header. A hint, not a promise.
    #[must_use]
    pub const fn declared_count(&self) -> Option<u32> {
        self.declared
    }

    /// Number of triangles read so far.
    #[must_use]
    pub const fn triangles_read(&self) -> u64 {
        self.read
    }

    /// Read the next triangle; `Ok(None)` marks a clean end of data.
    ///
    /// # Errors
    ///
    /// Returns an error for truncated or malformed data.
    pub fn read_triangle(&mut self) -> IoResult<Option<Triangle>> {
        if self.done {
            return Ok(None);
        }

        let next = self.codec.read_triangle(&mut self.reader);
        match &next {
            Ok(Some(_)) => self.read += 1,
            Ok(None) => {
                self.done = true;
                if let Some(declared) = self.declared {
                    if u64::from(declared) != self.read {
                        warn!(
                            declared,
                            read = self.read,
                            "Binary STL header count does not match records"
                        );
                    }
                }
            }
            Err(_) => self.done = true,
        }
        next
    }

    /// Read every remaining triangle into a [`Mesh`].
    ///
    /// # Errors
    ///
    /// Returns the first read error encountered.
    pub fn read_mesh(mut self) -> IoResult<Mesh> {
        // The declared count is untrusted; cap the up-front allocation.
        let capacity = self
            .declared
            .and_then(|n| usize::try_from(n).ok())
            .map_or(0, |n| n.min(MAX_PREALLOCATED));
        let mut mesh = Mesh::with_capacity(capacity);
        while let Some(triangle) = self.read_triangle()? {
            mesh.push(triangle);
        }
        debug!(triangles = mesh.len(), encoding = %self.encoding(), "Read STL mesh");
        Ok(mesh)
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for StlReader<R> {
    type Item = IoResult<Triangle>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_triangle().transpose()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::binary::encode_record;
    use std::io::Cursor;

    fn binary_stream(declared: u32, records: usize) -> Vec<u8> {
        let mut bytes = vec![b'z'; 80];
        bytes.extend_from_slice(&declared.to_le_bytes());
        let tri = Triangle::from_arrays([0.0, 0.0, 1.0], [0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        for _ in 0..records {
            bytes.extend_from_slice(&encode_record(&tri));
        }
        bytes
    }

    #[test]
    fn declared_count_is_only_a_hint() {
        let reader = StlReader::new(Cursor::new(binary_stream(5, 2))).unwrap();
        assert_eq!(reader.declared_count(), Some(5));
        assert_eq!(reader.read_mesh().unwrap().len(), 2);

        let reader = StlReader::new(Cursor::new(binary_stream(1, 3))).unwrap();
        assert_eq!(reader.read_mesh().unwrap().len(), 3);
    }

    #[test]
    fn iteration_stops_after_error() {
        let mut bytes = binary_stream(2, 1);
        bytes.extend_from_slice(&[0u8; 10]);
        let mut reader = StlReader::new(Cursor::new(bytes)).unwrap();

        assert!(matches!(reader.next(), Some(Ok(_))));
        assert!(matches!(reader.next(), Some(Err(IoError::TruncatedRecord { .. }))));
        assert!(reader.next().is_none());
        assert_eq!(reader.triangles_read(), 1);
    }

    #[test]
    fn ascii_has_no_declared_count() {
        let reader = StlReader::new(Cursor::new("solid\nendsolid\n")).unwrap();
        assert_eq!(reader.encoding(), Encoding::Ascii);
        assert_eq!(reader.declared_count(), None);
        assert!(reader.read_mesh().unwrap().is_empty());
    }

    #[test]
    fn open_missing_file() {
        let result = StlReader::open("definitely_missing_12345.stl");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }
}
