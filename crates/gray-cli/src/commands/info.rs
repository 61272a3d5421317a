//! Image info command.
//!
//! Prints the header fields of each file and, with `--stats`, the sample
//! range and mean.

use crate::InfoArgs;
use anyhow::{Context, Result};
use gray_io::{pgm, Format};
use std::fs;
use std::path::Path;

use super::Options;

/// Runs the info command.
pub fn run(args: InfoArgs, opts: Options) -> Result<()> {
    for path in &args.input {
        print_info(path, args.stats, opts)?;
        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}

fn print_info(path: &Path, stats: bool, opts: Options) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    let (format, header) =
        pgm::read_header(&bytes).with_context(|| format!("Failed to parse: {}", path.display()))?;

    println!("{}", path.display());
    println!("  Format:     {format}");
    println!("  Resolution: {}x{} (cols x rows)", header.cols, header.rows);
    println!("  Maxval:     {}", header.maxval);
    println!("  File size:  {} B", bytes.len());
    if opts.verbose > 0 {
        println!("  Detected:   {}", Format::from_extension(path));
    }

    if stats {
        let image = super::timed("decode", opts, || pgm::decode(&bytes))
            .with_context(|| format!("Failed to decode: {}", path.display()))?;
        let (min, max, mean) = sample_stats(image.data());
        println!("  Min:        {min}");
        println!("  Max:        {max}");
        println!("  Mean:       {mean:.3}");
    }
    Ok(())
}

fn sample_stats(data: &[u8]) -> (u8, u8, f64) {
    if data.is_empty() {
        return (0, 0, 0.0);
    }
    let min = data.iter().copied().min().unwrap_or(0);
    let max = data.iter().copied().max().unwrap_or(0);
    let sum: u64 = data.iter().map(|&v| u64::from(v)).sum();
    (min, max, sum as f64 / data.len() as f64)
}
