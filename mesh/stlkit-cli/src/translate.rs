//! `stlkit move`.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use stl_io::{StlReader, StlWriter};
use stl_types::Vector3;

/// Stream `input` into `output` with every vertex shifted by `offset`.
///
/// The output keeps the input's encoding.
pub fn run(input: &Path, output: &Path, offset: [f32; 3]) -> Result<()> {
    let mut reader = StlReader::open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let mut writer = StlWriter::create(output, reader.encoding())
        .with_context(|| format!("failed to create {}", output.display()))?;

    let offset = Vector3::from(offset);
    while let Some(mut triangle) = reader
        .read_triangle()
        .with_context(|| format!("failed to read {}", input.display()))?
    {
        triangle.translate(offset);
        writer.write_triangle(&triangle)?;
    }
    let count = writer.count();
    writer.finish().context("failed to finish output")?;

    println!(
        "{} Moved {count} triangles by ({}, {}, {})",
        "✓".green(),
        offset.x,
        offset.y,
        offset.z
    );
    Ok(())
}
