//! ASCII STL encoding.
//!
//! # Grammar
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Keywords are case-sensitive. Facets are parsed as a stream of
//! whitespace-separated tokens, so line breaks and indentation inside a
//! facet do not matter. The solid name after `solid` and `endsolid` is
//! ignored and need not be UTF-8; a non-UTF-8 byte anywhere else ends up
//! in a token that fails to parse.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use stl_types::Triangle;
use tracing::debug;

use crate::codec::StlCodec;
use crate::encoding::Encoding;
use crate::error::{IoError, IoResult};

/// Codec for the ASCII encoding.
///
/// Tracks the current line so parse errors can say where they happened.
#[derive(Debug, Default)]
pub struct AsciiCodec {
    line: usize,
    pending: VecDeque<String>,
    finished: bool,
}

impl AsciiCodec {
    /// Create a codec for a fresh stream.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line: 0,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// One-based number of the last line read.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    fn next_token(&mut self, reader: &mut dyn BufRead) -> IoResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut buf = Vec::new();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending.extend(
                buf.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }

    fn expect(&mut self, reader: &mut dyn BufRead, keyword: &str) -> IoResult<()> {
        match self.next_token(reader)? {
            Some(token) if token == keyword => Ok(()),
            Some(token) => Err(IoError::parse(
                self.line,
                format!("expected `{keyword}`, found `{token}`"),
            )),
            None => Err(IoError::parse(
                self.line,
                format!("unexpected end of input, expected `{keyword}`"),
            )),
        }
    }

    fn read_vec3(&mut self, reader: &mut dyn BufRead) -> IoResult<[f32; 3]> {
        let mut out = [0.0; 3];
        for value in &mut out {
            let token = self.next_token(reader)?.ok_or_else(|| {
                IoError::parse(self.line, "unexpected end of input, expected a number")
            })?;
            *value = token
                .parse()
                .map_err(|_| IoError::parse(self.line, format!("invalid number `{token}`")))?;
        }
        Ok(out)
    }
}

impl StlCodec for AsciiCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Ascii
    }

    fn read_header(&mut self, reader: &mut dyn BufRead) -> IoResult<Option<u32>> {
        let mut first = Vec::new();
        reader.read_until(b'\n', &mut first)?;
        self.line += 1;

        let Some(name) = first.trim_ascii_start().strip_prefix(b"solid") else {
            return Err(IoError::parse(self.line, "expected `solid` header"));
        };
        debug!(name = %String::from_utf8_lossy(name.trim_ascii()), "Read ASCII STL header");
        Ok(None)
    }

    fn read_triangle(&mut self, reader: &mut dyn BufRead) -> IoResult<Option<Triangle>> {
        if self.finished {
            return Ok(None);
        }

        match self.next_token(reader)?.as_deref() {
            None => return Ok(None),
            Some("endsolid") => {
                self.finished = true;
                self.pending.clear();
                return Ok(None);
            }
            Some("facet") => {}
            Some(other) => {
                return Err(IoError::parse(
                    self.line,
                    format!("expected `facet` or `endsolid`, found `{other}`"),
                ));
            }
        }

        self.expect(reader, "normal")?;
        let normal = self.read_vec3(reader)?;
        self.expect(reader, "outer")?;
        self.expect(reader, "loop")?;

        let mut vertices = [[0.0; 3]; 3];
        for vertex in &mut vertices {
            self.expect(reader, "vertex")?;
            *vertex = self.read_vec3(reader)?;
        }

        self.expect(reader, "endloop")?;
        self.expect(reader, "endfacet")?;

        let [a, b, c] = vertices;
        Ok(Some(Triangle::from_arrays(normal, a, b, c)))
    }

    fn write_header(&self, writer: &mut dyn Write, _count_hint: u32) -> IoResult<()> {
        writeln!(writer, "solid")?;
        Ok(())
    }

    fn write_triangle(&self, writer: &mut dyn Write, triangle: &Triangle) -> IoResult<()> {
        let n = &triangle.normal;
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in triangle.vertices() {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
        Ok(())
    }

    fn write_footer(&self, writer: &mut dyn Write) -> IoResult<()> {
        writeln!(writer, "endsolid")?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::unnecessary_raw_string_hashes
)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(text: &[u8]) -> IoResult<Vec<Triangle>> {
        let mut input = Cursor::new(text.to_vec());
        let mut codec = AsciiCodec::new();
        codec.read_header(&mut input)?;
        let mut out = Vec::new();
        while let Some(tri) = codec.read_triangle(&mut input)? {
            out.push(tri);
        }
        Ok(out)
    }

    #[test]
    fn parses_a_facet() {
        let text = br#"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1.0E+00 0 0
      vertex 0 1e0 0
    endloop
  endfacet
endsolid test"#;

        let tris = read_all(text).unwrap();
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].normal.z, 1.0);
        assert_eq!(tris[0].b.x, 1.0);
        assert_eq!(tris[0].c.y, 1.0);
    }

    #[test]
    fn layout_is_whitespace_tolerant() {
        let text = b"solid\nfacet normal 0 0 1 outer loop vertex 0 0 0\n\n vertex 1 0 0 vertex 0 1 0 endloop endfacet\nendsolid\n";
        assert_eq!(read_all(text).unwrap().len(), 1);
    }

    #[test]
    fn missing_endsolid_is_a_clean_end() {
        let text = b"solid\n  facet normal 0 0 1\n outer loop\n vertex 0 0 0\n vertex 1 0 0\n vertex 0 1 0\n endloop\n endfacet\n";
        assert_eq!(read_all(text).unwrap().len(), 1);
    }

    #[test]
    fn truncated_facet_is_a_parse_error() {
        let text = b"solid\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n";
        let err = read_all(text).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn bad_number_is_a_parse_error() {
        let text = b"solid\n  facet normal 0 zero 1\n";
        let err = read_all(text).unwrap_err();
        match err {
            IoError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("zero"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn latin1_solid_names_are_ignored() {
        let text = b"solid caf\xe9\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n      vertex 1 0 0\n      vertex 0 1 0\n    endloop\n  endfacet\nendsolid caf\xe9\n";
        let tris = read_all(text).unwrap();
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].b.x, 1.0);
    }

    #[test]
    fn non_utf8_in_a_facet_is_a_parse_error() {
        let text = b"solid\n  facet normal 0 0 1\n    outer loop\n      vertex 0 \xff 0\n";
        let err = read_all(text).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let text = b"solid\n  FACET normal 0 0 1\n";
        assert!(matches!(read_all(text), Err(IoError::Parse { .. })));
    }

    #[test]
    fn header_must_be_solid() {
        let mut input = Cursor::new(b"something else\n".to_vec());
        assert!(AsciiCodec::new().read_header(&mut input).is_err());
    }

    #[test]
    fn nothing_after_endsolid_is_read() {
        let text = b"solid\nendsolid\nfacet normal 0 0 1\n";
        assert!(read_all(text).unwrap().is_empty());
    }

    #[test]
    fn writes_scientific_notation() {
        let tri = Triangle::from_arrays(
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        );
        let codec = AsciiCodec::new();
        let mut out = Vec::new();
        codec.write_header(&mut out, 0).unwrap();
        codec.write_triangle(&mut out, &tri).unwrap();
        codec.write_footer(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("solid\n"));
        assert!(text.contains("  facet normal 0.000000e0 0.000000e0 1.000000e0\n"));
        assert!(text.ends_with("  endfacet\nendsolid\n"));
    }
}
