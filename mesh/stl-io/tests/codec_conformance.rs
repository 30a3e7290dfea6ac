//! Conformance tests for the STL codec.
//!
//! Covers round trips in both encodings, the binary size law, header
//! patch-up on real files and cross-encoding conversion.
//!
//! To run: cargo test -p stl-io --test codec_conformance

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]

use std::fs;
use std::io::Cursor;

use approx::assert_relative_eq;
use stl_io::{
    Encoding, IoError, StlReader, StlWriter, binary_size, copy_triangles, load_stl, read_stl,
    save_stl, write_stl,
};
use stl_types::{Mesh, Triangle};
use tempfile::tempdir;

/// A strip of `n` triangles with distinct, non-trivial coordinates.
fn strip(n: usize) -> Mesh {
    (0..n)
        .map(|i| {
            let x = i as f32 * 0.37;
            Triangle::from_arrays(
                [0.0, 0.0, 1.0],
                [x, -1.25, 3.5e-3],
                [x + 1.0, 2.0e4, -7.75],
                [x, 1.0, 0.1],
            )
        })
        .collect()
}

fn encode(mesh: &Mesh, encoding: Encoding) -> Vec<u8> {
    write_stl(mesh, Cursor::new(Vec::new()), encoding)
        .unwrap()
        .into_inner()
}

fn assert_close(a: &Mesh, b: &Mesh) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        let xs = [x.normal, x.a.coords, x.b.coords, x.c.coords];
        let ys = [y.normal, y.a.coords, y.b.coords, y.c.coords];
        for (u, v) in xs.iter().zip(&ys) {
            for k in 0..3 {
                assert_relative_eq!(u[k], v[k], max_relative = 1e-6);
            }
        }
    }
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn binary_round_trip_is_exact() {
    for n in [0, 1, 1000] {
        let mesh = strip(n);
        let bytes = encode(&mesh, Encoding::Binary);
        assert_eq!(bytes.len() as u64, binary_size(n as u64));

        let (encoding, back) = read_stl(Cursor::new(bytes)).unwrap();
        assert_eq!(encoding, Encoding::Binary);
        assert_eq!(back, mesh, "n = {n}");
    }
}

#[test]
fn ascii_round_trip_within_print_precision() {
    for n in [0, 1, 1000] {
        let mesh = strip(n);
        let (encoding, back) = read_stl(Cursor::new(encode(&mesh, Encoding::Ascii))).unwrap();
        assert_eq!(encoding, Encoding::Ascii);
        assert_close(&back, &mesh);
    }
}

#[test]
fn binary_to_ascii_to_binary() {
    let mesh = strip(64);
    let (_, via_ascii) = read_stl(Cursor::new(encode(&mesh, Encoding::Ascii))).unwrap();
    let (_, back) = read_stl(Cursor::new(encode(&via_ascii, Encoding::Binary))).unwrap();
    assert_close(&back, &mesh);
}

#[test]
fn empty_solid_in_both_encodings() {
    let ascii = encode(&Mesh::new(), Encoding::Ascii);
    assert_eq!(ascii, b"solid\nendsolid\n");

    let binary = encode(&Mesh::new(), Encoding::Binary);
    assert_eq!(binary.len(), 84);
    assert_eq!(&binary[80..84], &[0, 0, 0, 0]);
}

#[test]
fn ascii_with_latin1_solid_names() {
    let mesh = strip(3);
    let text = encode(&mesh, Encoding::Ascii);
    let body = &text["solid".len()..text.len() - "endsolid\n".len()];

    let mut named = b"solid caf\xe9".to_vec();
    named.extend_from_slice(body);
    named.extend_from_slice(b"endsolid caf\xe9\n");

    let (encoding, back) = read_stl(Cursor::new(named)).unwrap();
    assert_eq!(encoding, Encoding::Ascii);
    assert_close(&back, &mesh);
}

// =============================================================================
// Files and patch-up
// =============================================================================

#[test]
fn streamed_file_matches_upfront_file() {
    let dir = tempdir().unwrap();
    let mesh = strip(37);

    let upfront = dir.path().join("upfront.stl");
    save_stl(&mesh, &upfront, Encoding::Binary).unwrap();

    let streamed = dir.path().join("streamed.stl");
    let mut writer = StlWriter::create(&streamed, Encoding::Binary).unwrap();
    for triangle in &mesh {
        writer.write_triangle(triangle).unwrap();
    }
    writer.finish().unwrap();

    assert_eq!(fs::read(&upfront).unwrap(), fs::read(&streamed).unwrap());
    assert_eq!(fs::metadata(&streamed).unwrap().len(), binary_size(37));
}

#[test]
fn load_reports_encoding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("part.stl");
    save_stl(&strip(3), &path, Encoding::Ascii).unwrap();

    let (encoding, mesh) = load_stl(&path).unwrap();
    assert_eq!(encoding, Encoding::Ascii);
    assert_eq!(mesh.len(), 3);
}

#[test]
fn load_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_stl(dir.path().join("nope.stl")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}

#[test]
fn concatenate_two_files_into_one() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.stl");
    let second = dir.path().join("second.stl");
    save_stl(&strip(4), &first, Encoding::Ascii).unwrap();
    save_stl(&strip(6), &second, Encoding::Binary).unwrap();

    let out = dir.path().join("joined.stl");
    let mut writer = StlWriter::create(&out, Encoding::Binary).unwrap();
    for path in [&first, &second] {
        let mut reader = StlReader::open(path).unwrap();
        copy_triangles(&mut reader, &mut writer).unwrap();
    }
    assert_eq!(writer.count(), 10);
    writer.finish().unwrap();

    let (_, joined) = load_stl(&out).unwrap();
    assert_eq!(joined.len(), 10);
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn truncated_binary_fails_mid_stream() {
    let mut bytes = encode(&strip(3), Encoding::Binary);
    bytes.truncate(bytes.len() - 20);

    let err = read_stl(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, IoError::TruncatedRecord { index: 2, got: 30 }));
}

#[test]
fn ascii_garbage_reports_line() {
    let text = "solid\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n      vertex oops\n";
    match read_stl(Cursor::new(text)).unwrap_err() {
        IoError::Parse { line, .. } => assert_eq!(line, 5),
        other => panic!("unexpected error: {other}"),
    }
}
