//! STL encoding selection and detection.

use std::fmt;
use std::io::BufRead;

use tracing::debug;

use crate::ascii::AsciiCodec;
use crate::binary::BinaryCodec;
use crate::codec::StlCodec;
use crate::error::{IoError, IoResult};

/// The two wire encodings of an STL file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Textual `solid ... endsolid` grammar.
    Ascii,
    /// 80-byte header, little-endian count, 50-byte records.
    #[default]
    Binary,
}

impl Encoding {
    /// Detect the encoding from the first byte of the stream.
    ///
    /// ASCII files always begin with the keyword `solid`, so a leading `s`
    /// means ASCII and anything else means binary. The byte is only peeked;
    /// the stream position is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::EmptyInput`] if the stream has no bytes, or an I/O
    /// error from the underlying reader.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use stl_io::Encoding;
    ///
    /// let mut input = Cursor::new(b"solid cube\nendsolid\n".to_vec());
    /// assert_eq!(Encoding::detect(&mut input).unwrap(), Encoding::Ascii);
    /// assert_eq!(input.position(), 0);
    /// ```
    pub fn detect<R: BufRead + ?Sized>(reader: &mut R) -> IoResult<Self> {
        let first = reader.fill_buf()?.first().copied();
        let encoding = match first {
            None => return Err(IoError::EmptyInput),
            Some(b's') => Self::Ascii,
            Some(_) => Self::Binary,
        };
        debug!(?encoding, "Detected STL encoding");
        Ok(encoding)
    }

    /// The opposite encoding, used as the default conversion target.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Ascii => Self::Binary,
            Self::Binary => Self::Ascii,
        }
    }

    /// A fresh codec for this encoding.
    ///
    /// Codecs may keep per-stream state (line numbers, record indices), so
    /// use one codec per stream.
    #[must_use]
    pub fn codec(self) -> Box<dyn StlCodec> {
        match self {
            Self::Ascii => Box::new(AsciiCodec::new()),
            Self::Binary => Box::new(BinaryCodec::new()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascii => "ASCII",
            Self::Binary => "binary",
        })
    }
}
