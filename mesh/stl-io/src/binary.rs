//! Binary STL encoding.
//!
//! # Layout
//!
//! ```text
//! UINT8[80]    - Header (ignored by readers)
//! UINT32       - Number of triangles, little-endian
//! foreach triangle
//!     REAL32[3] - Normal vector
//!     REAL32[3] - Vertex A
//!     REAL32[3] - Vertex B
//!     REAL32[3] - Vertex C
//!     UINT16    - Attribute byte count (ignored, written as 0)
//! end
//! ```
//!
//! Every field is (de)serialized explicitly in little-endian order; nothing
//! depends on the in-memory layout of [`Triangle`].

use std::io::{BufRead, ErrorKind, Read, Seek, SeekFrom, Write};

use stl_types::Triangle;
use tracing::debug;

use crate::codec::StlCodec;
use crate::encoding::Encoding;
use crate::error::{IoError, IoResult};

/// Size of the reserved header in bytes.
pub const HEADER_SIZE: usize = 80;

/// Byte offset of the little-endian triangle count.
pub const COUNT_OFFSET: u64 = 80;

/// Header plus count.
pub const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one triangle record (normal + 3 vertices + attribute).
pub const RECORD_SIZE: usize = 50;

/// Header banner. Must never start with `s`, or readers would take the
/// file for ASCII.
const BANNER: &[u8] = b"Binary STL written by stlkit";

/// Exact size of a binary STL file holding `count` triangles.
///
/// # Example
///
/// ```
/// assert_eq!(stl_io::binary_size(0), 84);
/// assert_eq!(stl_io::binary_size(12), 684);
/// ```
#[must_use]
pub const fn binary_size(count: u64) -> u64 {
    PREAMBLE_SIZE as u64 + RECORD_SIZE as u64 * count
}

/// Codec for the binary encoding.
#[derive(Debug, Default)]
pub struct BinaryCodec {
    records_read: u64,
}

impl BinaryCodec {
    /// Create a codec for a fresh stream.
    #[must_use]
    pub const fn new() -> Self {
        Self { records_read: 0 }
    }

    /// Number of records decoded so far.
    #[must_use]
    pub const fn records_read(&self) -> u64 {
        self.records_read
    }
}

impl StlCodec for BinaryCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Binary
    }

    fn read_header(&mut self, reader: &mut dyn BufRead) -> IoResult<Option<u32>> {
        let mut preamble = [0u8; PREAMBLE_SIZE];
        let got = read_full(reader, &mut preamble)?;
        if got < PREAMBLE_SIZE {
            return Err(IoError::InvalidHeader {
                expected: PREAMBLE_SIZE,
                got,
            });
        }

        let count = u32::from_le_bytes([
            preamble[HEADER_SIZE],
            preamble[HEADER_SIZE + 1],
            preamble[HEADER_SIZE + 2],
            preamble[HEADER_SIZE + 3],
        ]);
        debug!(declared = count, "Read binary STL header");
        Ok(Some(count))
    }

    fn read_triangle(&mut self, reader: &mut dyn BufRead) -> IoResult<Option<Triangle>> {
        let mut record = [0u8; RECORD_SIZE];
        match read_full(reader, &mut record)? {
            0 => Ok(None),
            RECORD_SIZE => {
                self.records_read += 1;
                Ok(Some(decode_record(&record)))
            }
            got => Err(IoError::TruncatedRecord {
                index: self.records_read,
                got,
            }),
        }
    }

    fn write_header(&self, writer: &mut dyn Write, count_hint: u32) -> IoResult<()> {
        let mut header = [b' '; HEADER_SIZE];
        header[..BANNER.len()].copy_from_slice(BANNER);
        writer.write_all(&header)?;
        writer.write_all(&count_hint.to_le_bytes())?;
        Ok(())
    }

    fn write_triangle(&self, writer: &mut dyn Write, triangle: &Triangle) -> IoResult<()> {
        writer.write_all(&encode_record(triangle))?;
        Ok(())
    }

    fn write_footer(&self, _writer: &mut dyn Write) -> IoResult<()> {
        Ok(())
    }
}

/// Overwrite the triangle count at offset 80 of a binary STL stream.
///
/// Lets a writer emit a placeholder count, stream an unknown number of
/// triangles, and fix the header afterwards. The stream position is
/// restored before returning.
///
/// # Errors
///
/// Returns an error if seeking or writing fails.
pub fn patch_triangle_count<W: Write + Seek + ?Sized>(writer: &mut W, count: u32) -> IoResult<()> {
    let resume_at = writer.stream_position()?;
    writer.seek(SeekFrom::Start(COUNT_OFFSET))?;
    writer.write_all(&count.to_le_bytes())?;
    writer.seek(SeekFrom::Start(resume_at))?;
    debug!(count, "Patched binary STL triangle count");
    Ok(())
}

/// Serialize one triangle into a 50-byte record.
#[must_use]
pub fn encode_record(triangle: &Triangle) -> [u8; RECORD_SIZE] {
    let mut record = [0u8; RECORD_SIZE];
    let fields = [
        triangle.normal.x,
        triangle.normal.y,
        triangle.normal.z,
        triangle.a.x,
        triangle.a.y,
        triangle.a.z,
        triangle.b.x,
        triangle.b.y,
        triangle.b.z,
        triangle.c.x,
        triangle.c.y,
        triangle.c.z,
    ];
    for (chunk, value) in record.chunks_exact_mut(4).zip(fields) {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    // Attribute byte count stays zero.
    record
}

/// Deserialize one 50-byte record. The trailing attribute bytes are ignored.
#[must_use]
pub fn decode_record(record: &[u8; RECORD_SIZE]) -> Triangle {
    Triangle::from_arrays(
        read_vec3(record, 0),
        read_vec3(record, 12),
        read_vec3(record, 24),
        read_vec3(record, 36),
    )
}

/// Read 3 little-endian f32s starting at `offset`.
fn read_vec3(buf: &[u8], offset: usize) -> [f32; 3] {
    let f = |o: usize| f32::from_le_bytes([buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]);
    [f(offset), f(offset + 4), f(offset + 8)]
}

/// Fill `buf` as far as the stream allows, returning the number of bytes read.
///
/// Unlike `read_exact`, this tells a clean end (0 bytes) apart from a
/// partial record.
fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
