//! `stlkit convert`.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use stl_io::{StlReader, StlWriter, copy_triangles};

use crate::EncodingArgs;

/// Stream `input` into `output`, switching to the other encoding unless one
/// is forced.
pub fn run(input: &Path, output: &Path, encoding: EncodingArgs) -> Result<()> {
    let mut reader = StlReader::open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let from = reader.encoding();
    let to = encoding.resolve(from.other());

    println!(
        "{}",
        format!("Detected {from} input, converting to {to}...").dimmed()
    );

    let mut writer = StlWriter::create(output, to)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let count = copy_triangles(&mut reader, &mut writer)
        .with_context(|| format!("failed to convert {}", input.display()))?;
    writer.finish().context("failed to finish output")?;

    println!(
        "{} Wrote {count} triangles to {}",
        "✓".green(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use stl_io::{Encoding, load_stl, save_stl};
    use stl_types::{Mesh, Triangle};
    use tempfile::tempdir;

    fn sample() -> Mesh {
        Mesh::from_triangles(vec![Triangle::from_arrays(
            [0.0, 0.0, 1.0],
            [0.0; 3],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        )])
    }

    #[test]
    fn defaults_to_the_other_encoding() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.stl");
        let output = dir.path().join("out.stl");
        save_stl(&sample(), &input, Encoding::Binary).unwrap();

        run(&input, &output, EncodingArgs::default()).unwrap();
        let (encoding, mesh) = load_stl(&output).unwrap();
        assert_eq!(encoding, Encoding::Ascii);
        assert_eq!(mesh, sample());
    }

    #[test]
    fn forced_encoding_wins() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.stl");
        let output = dir.path().join("out.stl");
        save_stl(&sample(), &input, Encoding::Binary).unwrap();

        let binary = EncodingArgs {
            ascii: false,
            binary: true,
        };
        run(&input, &output, binary).unwrap();
        assert_eq!(load_stl(&output).unwrap().0, Encoding::Binary);
    }

    #[test]
    fn missing_input_fails() {
        let dir = tempdir().unwrap();
        let err = run(
            &dir.path().join("nope.stl"),
            &dir.path().join("out.stl"),
            EncodingArgs::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("file not found"));
    }
}
