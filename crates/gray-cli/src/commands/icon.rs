//! Icon command: shrink by block means

use crate::IconArgs;
use anyhow::{Context, Result};
use gray_ops::resize::subsample;
use tracing::info;

use super::Options;

pub fn run(args: IconArgs, opts: Options) -> Result<()> {
    let image = super::load_image(&args.input)?;

    let icon = super::timed("icon", opts, || subsample(&image, args.factor))
        .with_context(|| format!("Cannot shrink by factor {}", args.factor))?;
    info!(
        from = ?image.dimensions(),
        to = ?icon.dimensions(),
        factor = args.factor,
        "subsampled"
    );

    if opts.verbose > 0 {
        println!(
            "{}x{} -> {}x{}",
            image.rows(),
            image.cols(),
            icon.rows(),
            icon.cols()
        );
    }

    super::save_image(&args.output, &icon)?;
    Ok(())
}
