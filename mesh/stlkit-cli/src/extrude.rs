//! `stlkit extrude`.

// Pixel counts become output dimensions.
#![allow(clippy::cast_precision_loss)]

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use stl_extrude::{
    ExtrudeError, ExtrudeParams, ExtrusionStyle, OccupancyGrid, base_slab, extrude,
};
use stl_io::{Encoding, IoError, StlReader, StlWriter, copy_triangles};
use tracing::{info, warn};

use crate::ExtrudeArgs;

/// Load the bitmap, extrude it and stream template, extrusion and base into
/// one output file.
pub fn run(args: &ExtrudeArgs) -> Result<()> {
    let encoding = args.encoding.resolve(Encoding::Binary);
    let width = args.width.unwrap_or(args.px_width as f32);
    let height = args.height.unwrap_or(args.px_height as f32);
    let params = ExtrudeParams::for_output(
        args.px_width,
        args.px_height,
        width,
        height,
        args.depth,
        args.base,
    )
    .with_style(args.style.into());

    print_state(args, encoding, &params, width, height);

    // Reject bad options before anything touches the output file.
    if !params.style.is_implemented() {
        return Err(ExtrudeError::UnsupportedStyle(params.style).into());
    }
    params.validate().context("invalid extrusion options")?;

    let mut grid = OccupancyGrid::load_bitmap(&args.source, args.px_width, args.px_height)
        .with_context(|| format!("failed to load {}", args.source.display()))?;
    if args.flip {
        grid.flip_horizontal();
    }
    if args.invert {
        grid.invert();
    }

    let mut writer = StlWriter::create(&args.output, encoding)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    if let Some(template) = &args.addto {
        copy_template(template, &mut writer)?;
    }

    let extrusion = extrude(grid, &params).context("extrusion failed")?;
    writer.write_mesh(&extrusion.mesh)?;

    if let Some(slab) = base_slab(args.px_width, args.px_height, &params) {
        writer.write_mesh(&slab)?;
    }

    let count = writer.count();
    writer.finish().context("failed to finish output")?;

    println!(
        "{} Wrote {count} triangles ({} walls, {} caps) to {}",
        "✓".green().bold(),
        extrusion.wall_faces,
        extrusion.caps.len(),
        args.output.display()
    );
    Ok(())
}

/// Stream a template STL into `writer`. A missing template is skipped.
fn copy_template<W: std::io::Write>(template: &Path, writer: &mut StlWriter<W>) -> Result<u64> {
    let mut reader = match StlReader::open(template) {
        Ok(reader) => reader,
        Err(IoError::FileNotFound { path }) => {
            warn!(path = %path.display(), "Template not found, skipping");
            return Ok(0);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to open {}", template.display()));
        }
    };

    let copied = copy_triangles(&mut reader, writer)
        .with_context(|| format!("failed to copy {}", template.display()))?;
    info!(
        path = %template.display(),
        encoding = %reader.encoding(),
        triangles = copied,
        "Copied template"
    );
    Ok(copied)
}

fn print_state(
    args: &ExtrudeArgs,
    encoding: Encoding,
    params: &ExtrudeParams,
    width: f32,
    height: f32,
) {
    let template = args
        .addto
        .as_ref()
        .map_or_else(|| "none".to_string(), |p| p.display().to_string());

    println!("{}", "Extruding".bold());
    println!("{}", "=========".bold());
    println!(
        "  source     : {} ({}x{})",
        args.source.display(),
        args.px_width,
        args.px_height
    );
    println!("  invert     : {}", args.invert);
    println!("  flip       : {}", args.flip);
    println!("  template   : {template}");
    println!("  dest       : {} ({encoding})", args.output.display());
    println!("  style      : {}", ExtrusionStyle::from(args.style));
    println!(
        "  dimensions : {width} x {height} x {} (+ {} base)",
        params.depth, params.base
    );
    println!(
        "  scaling    : x: {} y: {} z: {}",
        params.x_scale, params.y_scale, params.depth
    );
    println!();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{EncodingArgs, StyleArg};
    use approx::assert_relative_eq;
    use std::fs;
    use stl_io::{load_stl, save_stl};
    use tempfile::{TempDir, tempdir};

    fn args(dir: &TempDir, bitmap: &[u8], w: usize, h: usize) -> ExtrudeArgs {
        let source = dir.path().join("in.hmp");
        fs::write(&source, bitmap).unwrap();
        ExtrudeArgs {
            source,
            px_width: w,
            px_height: h,
            output: dir.path().join("out.stl"),
            encoding: EncodingArgs::default(),
            style: StyleArg::Extrude,
            width: None,
            height: None,
            depth: 2.0,
            base: 0.0,
            addto: None,
            invert: false,
            flip: false,
        }
    }

    #[test]
    fn writes_a_closed_padded_shape() {
        let dir = tempdir().unwrap();
        let args = args(&dir, b"000001100000", 4, 3);
        run(&args).unwrap();

        let (encoding, mesh) = load_stl(&args.output).unwrap();
        assert_eq!(encoding, Encoding::Binary);
        // Two filled cells, one cap, four walls.
        assert_eq!(mesh.len(), 12);
        assert_relative_eq!(mesh.signed_volume(), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn invert_and_base() {
        let dir = tempdir().unwrap();
        let mut args = args(&dir, b"1111", 2, 2);
        args.invert = true;
        args.base = 1.0;
        args.width = Some(4.0);
        args.height = Some(4.0);
        run(&args).unwrap();

        // Everything inverted to empty: only the base slab is left.
        let (_, mesh) = load_stl(&args.output).unwrap();
        assert_eq!(mesh.len(), 12);
        assert_relative_eq!(mesh.signed_volume(), 16.0, epsilon = 1e-5);
    }

    #[test]
    fn template_is_copied_first_and_missing_template_is_skipped() {
        let dir = tempdir().unwrap();
        let mut args = args(&dir, b"1", 1, 1);
        args.encoding = EncodingArgs {
            ascii: true,
            binary: false,
        };

        let template = dir.path().join("template.stl");
        let (_, one_cell) = {
            run(&args).unwrap();
            load_stl(&args.output).unwrap()
        };
        save_stl(&one_cell, &template, Encoding::Binary).unwrap();

        args.addto = Some(template);
        run(&args).unwrap();
        let (encoding, mesh) = load_stl(&args.output).unwrap();
        assert_eq!(encoding, Encoding::Ascii);
        assert_eq!(mesh.len(), 2 * one_cell.len());
        assert_eq!(mesh.triangles[..one_cell.len()], one_cell.triangles[..]);

        args.addto = Some(dir.path().join("missing.stl"));
        run(&args).unwrap();
        assert_eq!(load_stl(&args.output).unwrap().1.len(), one_cell.len());
    }

    #[test]
    fn unsupported_style_leaves_no_output() {
        let dir = tempdir().unwrap();
        let mut args = args(&dir, b"1", 1, 1);
        args.style = StyleArg::Cut;

        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("cut"));
        assert!(!args.output.exists());
    }

    #[test]
    fn short_bitmap_fails() {
        let dir = tempdir().unwrap();
        let args = args(&dir, b"11", 2, 2);
        assert!(run(&args).is_err());
    }
}
