//! The per-encoding codec abstraction.

use std::io::{BufRead, Write};

use stl_types::Triangle;

use crate::encoding::Encoding;
use crate::error::IoResult;

/// Reads and writes the pieces of one STL encoding.
///
/// Implemented by [`BinaryCodec`](crate::BinaryCodec) and
/// [`AsciiCodec`](crate::AsciiCodec). A codec is selected once per stream
/// (see [`Encoding::codec`]) and then drives every header, triangle and
/// footer call for that stream, so call sites never branch on the encoding.
///
/// The trait is object safe; readers and writers are passed as trait
/// objects so a `Box<dyn StlCodec>` can serve any stream type.
pub trait StlCodec {
    /// The encoding this codec implements.
    fn encoding(&self) -> Encoding;

    /// Consume the header.
    ///
    /// Returns the declared triangle count for binary streams. ASCII has no
    /// count and returns `None`. The count is a hint only.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is missing or malformed.
    fn read_header(&mut self, reader: &mut dyn BufRead) -> IoResult<Option<u32>>;

    /// Read the next triangle.
    ///
    /// - `Ok(Some(triangle))` - a complete triangle was decoded
    /// - `Ok(None)` - the data ended cleanly
    /// - `Err(_)` - the data is truncated or malformed
    ///
    /// # Errors
    ///
    /// Returns an error for truncated records, grammar violations and I/O
    /// failures.
    fn read_triangle(&mut self, reader: &mut dyn BufRead) -> IoResult<Option<Triangle>>;

    /// Write the header. `count_hint` is stored by binary codecs and may be
    /// corrected later with [`patch_triangle_count`](crate::patch_triangle_count).
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn write_header(&self, writer: &mut dyn Write, count_hint: u32) -> IoResult<()>;

    /// Write one triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn write_triangle(&self, writer: &mut dyn Write, triangle: &Triangle) -> IoResult<()>;

    /// Write the footer. Binary has none and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn write_footer(&self, writer: &mut dyn Write) -> IoResult<()>;
}
