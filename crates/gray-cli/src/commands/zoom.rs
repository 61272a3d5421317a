//! Zoom command

use crate::ZoomArgs;
use anyhow::{Context, Result};
use gray_ops::resize::{zoom_2x, ZoomRegion};
use tracing::debug;

use super::Options;

pub fn run(args: ZoomArgs, opts: Options) -> Result<()> {
    let image = super::load_image(&args.input)?;

    let region = args.size.map(|side| ZoomRegion::new(args.row, args.col, side));
    debug!(?region, "zoom request");
    if opts.verbose > 0 {
        let side = args.size.unwrap_or(image.rows());
        println!("Zooming {side}x{side} block @ ({},{})", args.row, args.col);
    }

    let zoomed = super::timed("zoom", opts, || zoom_2x(&image, region)).context("Zoom failed")?;

    super::save_image(&args.output, &zoomed)?;

    if opts.verbose > 0 {
        println!("Saved {}x{}: {}", zoomed.rows(), zoomed.cols(), args.output.display());
    }

    Ok(())
}
