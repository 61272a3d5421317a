//! gray - command-line tool for grayscale PGM images
//!
//! Each subcommand loads one image, applies one operation and writes the
//! result.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gray")]
#[command(author, version, about = "Grayscale PGM image tool")]
#[command(long_about = "
Crop, zoom, shrink and remap 8-bit grayscale images (PGM).

Examples:
  gray info photo.pgm                              # Show header and stats
  gray crop photo.pgm -o part.pgm --row 10 --col 20 --height 64 --width 48
  gray zoom photo.pgm -o big.pgm --row 0 --col 0 --size 100
  gray contrast photo.pgm -o vivid.pgm --in1 50 --in2 200 --out1 0 --out2 255
  gray icon photo.pgm -o icon.pgm --factor 8
  gray shuffle photo.pgm -o noise.pgm
  gray --time -vv invert photo.pgm -o negative.pgm
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Report how long the operation took
    #[arg(long, global = true)]
    time: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Extract a block (out-of-range samples become 0)
    Crop(CropArgs),

    /// Enlarge a square block to 2n-1 samples per side
    #[command(visible_alias = "z")]
    Zoom(ZoomArgs),

    /// Piecewise-linear contrast stretch
    Contrast(ContrastArgs),

    /// Shrink by an integer factor using block means
    Icon(IconArgs),

    /// Reorder rows with a fixed multiplicative permutation
    Shuffle(ShuffleArgs),

    /// Photographic negative
    Invert(InvertArgs),

    /// Paste one image onto another
    Paste(PasteArgs),

    /// Rewrite an image, optionally as plain (P2) PGM
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Show sample statistics
    #[arg(short, long)]
    stats: bool,
}

#[derive(Args)]
struct CropArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Top row
    #[arg(short, long)]
    row: u32,

    /// Left column
    #[arg(short, long)]
    col: u32,

    /// Block height (becomes the output column count)
    #[arg(short = 'H', long)]
    height: u32,

    /// Block width (becomes the output row count)
    #[arg(short = 'W', long)]
    width: u32,
}

#[derive(Args)]
struct ZoomArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Top row of the block
    #[arg(short, long, default_value_t = 0)]
    row: u32,

    /// Left column of the block
    #[arg(short, long, default_value_t = 0)]
    col: u32,

    /// Side length of the block (default: the image's row count)
    #[arg(short, long)]
    size: Option<u32>,
}

#[derive(Args)]
struct ContrastArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Lower input threshold
    #[arg(long)]
    in1: u8,

    /// Upper input threshold
    #[arg(long)]
    in2: u8,

    /// Output value for the lower threshold
    #[arg(long)]
    out1: u8,

    /// Output value for the upper threshold
    #[arg(long)]
    out2: u8,
}

#[derive(Args)]
struct IconArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Reduction factor
    #[arg(short, long)]
    factor: u32,
}

#[derive(Args)]
struct ShuffleArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct InvertArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct PasteArgs {
    /// Background image
    background: PathBuf,

    /// Image to paste on top
    overlay: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Row of the overlay's top-left corner
    #[arg(short, long, default_value_t = 0)]
    row: u32,

    /// Column of the overlay's top-left corner
    #[arg(short, long, default_value_t = 0)]
    col: u32,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    output: PathBuf,

    /// Write plain (P2) PGM
    #[arg(short, long)]
    ascii: bool,

    /// Header comment
    #[arg(long)]
    comment: Option<String>,
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = commands::Options { verbose: cli.verbose, time: cli.time };
    match cli.command {
        Commands::Info(args) => commands::info::run(args, opts),
        Commands::Crop(args) => commands::crop::run(args, opts),
        Commands::Zoom(args) => commands::zoom::run(args, opts),
        Commands::Contrast(args) => commands::contrast::run(args, opts),
        Commands::Icon(args) => commands::icon::run(args, opts),
        Commands::Shuffle(args) => commands::shuffle::run(args, opts),
        Commands::Invert(args) => commands::invert::run(args, opts),
        Commands::Paste(args) => commands::paste::run(args, opts),
        Commands::Convert(args) => commands::convert::run(args, opts),
    }
}
