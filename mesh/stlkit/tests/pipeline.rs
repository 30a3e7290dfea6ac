//! End-to-end tests across the `stl-*` crates.
//!
//! Each test drives a full conversion the way the command line does:
//! load or build geometry, transform it, stream it out, read it back.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use approx::assert_relative_eq;
use stlkit::io::binary_size;
use stlkit::prelude::*;
use tempfile::tempdir;

#[test]
fn extrude_with_base_and_template_streams_one_file() {
    let dir = tempdir().unwrap();

    // Template: a small box off to the side.
    let template = dir.path().join("template.stl");
    let block = build_rect_prism(Point3::new(-10.0, 0.0, 0.0), 2.0, 2.0, 2.0);
    save_stl(&block, &template, Encoding::Ascii).unwrap();

    // Plus sign, padded so the solid is closed.
    let grid = OccupancyGrid::from_bitmap(b"010111010", 3, 3)
        .unwrap()
        .padded()
        .unwrap();
    let (gw, gh) = (grid.width(), grid.height());
    let params = ExtrudeParams::for_output(gw, gh, 5.0, 5.0, 3.0, 1.0);

    let out = dir.path().join("out.stl");
    let mut writer = StlWriter::create(&out, Encoding::Binary).unwrap();
    let mut reader = StlReader::open(&template).unwrap();
    let copied = copy_triangles(&mut reader, &mut writer).unwrap();
    assert_eq!(copied, 12);

    let extrusion = extrude(grid, &params).unwrap();
    writer.write_mesh(&extrusion.mesh).unwrap();
    let slab = base_slab(gw, gh, &params).unwrap();
    writer.write_mesh(&slab).unwrap();

    let total = writer.count();
    writer.finish().unwrap();
    assert_eq!(total, 12 + extrusion.mesh.len() as u64 + 12);
    assert_eq!(fs::metadata(&out).unwrap().len(), binary_size(total));

    let (encoding, mesh) = load_stl(&out).unwrap();
    assert_eq!(encoding, Encoding::Binary);
    assert_eq!(mesh.len() as u64, total);

    // Template box + 5 plus-sign cells + slab, all closed.
    let cell = 1.0;
    let expected = 8.0 + 5.0 * cell * cell * 3.0 + 5.0 * 5.0 * 1.0;
    assert_relative_eq!(mesh.signed_volume(), expected, epsilon = 1e-4);
}

#[test]
fn move_then_convert_preserves_shape() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src.stl");
    let prism = build_rect_prism(Point3::origin(), 1.0, 2.0, 3.0);
    save_stl(&prism, &src, Encoding::Binary).unwrap();

    let (encoding, mut mesh) = load_stl(&src).unwrap();
    translate(&mut mesh, 4.0, 5.0, 6.0);
    let dst = dir.path().join("dst.stl");
    save_stl(&mesh, &dst, encoding.other()).unwrap();

    let (encoding, moved) = load_stl(&dst).unwrap();
    assert_eq!(encoding, Encoding::Ascii);
    assert_relative_eq!(moved.signed_volume(), 6.0, epsilon = 1e-4);
    assert_relative_eq!(moved.triangles[0].a.x, 4.0);
    assert_eq!(moved.triangles[0].normal, prism.triangles[0].normal);
}
