//! Contrast stretch command

use crate::ContrastArgs;
use anyhow::{Context, Result};
use gray_ops::intensity::{apply_stretch, ContrastStretch};
use tracing::debug;

use super::Options;

pub fn run(args: ContrastArgs, opts: Options) -> Result<()> {
    // Validate before reading the file
    let stretch = ContrastStretch::new(args.in1, args.in2, args.out1, args.out2)
        .context("Invalid contrast thresholds")?;
    debug!(?stretch, slopes = ?stretch.slopes(), "contrast stretch");

    let mut image = super::load_image(&args.input)?;

    if opts.verbose > 0 {
        println!(
            "Stretching [{}, {}] -> [{}, {}]",
            args.in1, args.in2, args.out1, args.out2
        );
    }

    super::timed("contrast", opts, || apply_stretch(&mut image, &stretch));

    super::save_image(&args.output, &image)?;
    Ok(())
}
