//! STL file I/O.
//!
//! This crate reads and writes the two STL encodings:
//!
//! - **Binary** - 80-byte header, little-endian `u32` count, 50-byte records
//! - **ASCII** - the `solid ... facet ... endsolid` text grammar
//!
//! # Streaming
//!
//! [`StlReader`] and [`StlWriter`] move one triangle at a time, so
//! converting or concatenating files never needs the whole mesh in memory.
//! Binary output whose final count is unknown up front gets its header
//! patched on [`StlWriter::finish`].
//!
//! # Encoding Detection
//!
//! A stream whose first byte is `s` is ASCII; anything else is binary.
//! Binary headers written here never start with `s`.
//!
//! # Example
//!
//! ```no_run
//! use stl_io::{load_stl, save_stl};
//!
//! let (encoding, mesh) = load_stl("model.stl").unwrap();
//!
//! // Write it back in the other encoding
//! save_stl(&mesh, "converted.stl", encoding.other()).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod ascii;
mod binary;
mod codec;
mod encoding;
mod error;
mod reader;
mod writer;

pub use ascii::AsciiCodec;
pub use binary::{
    BinaryCodec, COUNT_OFFSET, HEADER_SIZE, PREAMBLE_SIZE, RECORD_SIZE, binary_size,
    decode_record, encode_record, patch_triangle_count,
};
pub use codec::StlCodec;
pub use encoding::Encoding;
pub use error::{IoError, IoResult};
pub use reader::StlReader;
pub use writer::StlWriter;

use std::fs::File;
use std::io::{BufRead, BufWriter, Seek, Write};
use std::path::Path;

use stl_types::Mesh;
use tracing::info;

/// Read a whole STL stream of either encoding into memory.
///
/// # Errors
///
/// Returns an error if the stream is empty, truncated or malformed.
pub fn read_stl<R: BufRead>(reader: R) -> IoResult<(Encoding, Mesh)> {
    let reader = StlReader::new(reader)?;
    let encoding = reader.encoding();
    Ok((encoding, reader.read_mesh()?))
}

/// Load an STL file, detecting its encoding.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or any
/// error from [`read_stl`].
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<(Encoding, Mesh)> {
    let path = path.as_ref();
    let reader = StlReader::open(path)?;
    let encoding = reader.encoding();
    let mesh = reader.read_mesh()?;
    info!(
        path = %path.display(),
        %encoding,
        triangles = mesh.len(),
        "Loaded STL"
    );
    Ok((encoding, mesh))
}

/// Write a whole mesh to a seekable sink and return the sink.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_stl<W: Write + Seek>(mesh: &Mesh, writer: W, encoding: Encoding) -> IoResult<W> {
    let hint = u32::try_from(mesh.len()).unwrap_or(u32::MAX);
    let mut writer = StlWriter::new(writer, encoding, hint)?;
    writer.write_mesh(mesh)?;
    writer.finish()
}

/// Save a mesh to an STL file, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P, encoding: Encoding) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_stl(mesh, BufWriter::new(file), encoding)?;
    info!(
        path = %path.display(),
        %encoding,
        triangles = mesh.len(),
        "Saved STL"
    );
    Ok(())
}

/// Stream every remaining triangle from `reader` into `writer`.
///
/// Returns the number of triangles copied. Encodings may differ; this is
/// how conversion and template concatenation work without buffering.
///
/// # Errors
///
/// Returns the first read or write error. Triangles copied before the error
/// stay written.
pub fn copy_triangles<R: BufRead, W: Write>(
    reader: &mut StlReader<R>,
    writer: &mut StlWriter<W>,
) -> IoResult<u64> {
    let mut copied = 0;
    while let Some(triangle) = reader.read_triangle()? {
        writer.write_triangle(&triangle)?;
        copied += 1;
    }
    Ok(copied)
}
