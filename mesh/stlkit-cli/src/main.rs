//! `stlkit` - convert, move and extrude STL solids.
//!
//! # Commands
//!
//! - `stlkit convert <in> <out>` - Switch encodings (default: the other one)
//! - `stlkit move <in> <out> <dx> <dy> <dz>` - Translate every vertex
//! - `stlkit extrude <bitmap> <px-width> <px-height> <out>` - Bitmap to solid
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.
//!
//! Exits with status 0 on success and 1 on a usage error or failure.

mod convert;
mod extrude;
mod translate;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use stl_extrude::ExtrusionStyle;
use stl_io::Encoding;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "stlkit=info,stl_io=info,stl_extrude=info";

/// STL conversion, translation and bitmap extrusion.
#[derive(Parser, Debug)]
#[command(name = "stlkit")]
#[command(about = "Convert, move and extrude STL solids", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert between ASCII and binary STL
    Convert {
        /// Input STL (either encoding)
        input: PathBuf,

        /// Output STL
        output: PathBuf,

        #[command(flatten)]
        encoding: EncodingArgs,
    },

    /// Translate a solid, keeping its encoding
    #[command(allow_negative_numbers = true)]
    Move {
        /// Input STL (either encoding)
        input: PathBuf,

        /// Output STL
        output: PathBuf,

        /// Offset along X
        dx: f32,

        /// Offset along Y
        dy: f32,

        /// Offset along Z
        dz: f32,
    },

    /// Extrude a monochrome bitmap into a solid
    Extrude(ExtrudeArgs),
}

/// Output encoding override.
#[derive(Args, Debug, Clone, Copy, Default)]
struct EncodingArgs {
    /// Write ASCII STL
    #[arg(long, conflicts_with = "binary")]
    ascii: bool,

    /// Write binary STL
    #[arg(long)]
    binary: bool,
}

impl EncodingArgs {
    fn resolve(self, default: Encoding) -> Encoding {
        if self.ascii {
            Encoding::Ascii
        } else if self.binary {
            Encoding::Binary
        } else {
            default
        }
    }
}

/// Options for `stlkit extrude`.
#[derive(Args, Debug)]
struct ExtrudeArgs {
    /// Monochrome bitmap, one byte per pixel ('0' = empty)
    source: PathBuf,

    /// Bitmap width in pixels
    px_width: usize,

    /// Bitmap height in pixels
    px_height: usize,

    /// Output STL
    output: PathBuf,

    #[command(flatten)]
    encoding: EncodingArgs,

    /// Extrusion style
    #[arg(long, value_enum, default_value_t = StyleArg::Extrude)]
    style: StyleArg,

    /// Output width (default: pixel width)
    #[arg(long)]
    width: Option<f32>,

    /// Output height (default: pixel height)
    #[arg(long)]
    height: Option<f32>,

    /// Extrusion depth
    #[arg(long, default_value_t = 10.0)]
    depth: f32,

    /// Z of the bottom face; a positive value also adds a base slab that thick
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    base: f32,

    /// Existing STL to include before the extrusion
    #[arg(long, value_name = "TEMPLATE")]
    addto: Option<PathBuf>,

    /// Swap filled and empty pixels
    #[arg(long)]
    invert: bool,

    /// Mirror the bitmap horizontally
    #[arg(long)]
    flip: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum StyleArg {
    Extrude,
    Cut,
    Sunken,
    Relief,
}

impl From<StyleArg> for ExtrusionStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Extrude => Self::Extrude,
            StyleArg::Cut => Self::Cut,
            StyleArg::Sunken => Self::Sunken,
            StyleArg::Relief => Self::Relief,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and are not failures.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Convert {
            input,
            output,
            encoding,
        } => convert::run(&input, &output, encoding),
        Commands::Move {
            input,
            output,
            dx,
            dy,
            dz,
        } => translate::run(&input, &output, [dx, dy, dz]),
        Commands::Extrude(args) => extrude::run(&args),
    }
}
