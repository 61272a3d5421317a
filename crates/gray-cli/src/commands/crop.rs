//! Crop command

use crate::CropArgs;
use anyhow::Result;
use gray_ops::transform::crop;
use tracing::debug;

use super::Options;

pub fn run(args: CropArgs, opts: Options) -> Result<()> {
    let image = super::load_image(&args.input)?;

    if opts.verbose > 0 {
        println!(
            "Cropping {}x{} @ ({},{}) from {}x{}",
            args.height,
            args.width,
            args.row,
            args.col,
            image.rows(),
            image.cols()
        );
    }

    let cropped = super::timed("crop", opts, || crop(&image, args.row, args.col, args.height, args.width));
    debug!(rows = cropped.rows(), cols = cropped.cols(), "crop result");

    super::save_image(&args.output, &cropped)?;

    if opts.verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
