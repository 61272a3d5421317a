//! Paste command - overlay one image onto another

use crate::PasteArgs;
use anyhow::Result;
use gray_ops::transform::paste;
use tracing::{info, warn};

use super::{load_image, save_image, Options};

pub fn run(args: PasteArgs, opts: Options) -> Result<()> {
    if opts.verbose > 0 {
        println!("Loading background: {}", args.background.display());
        println!("Loading overlay: {}", args.overlay.display());
    }

    let mut background = load_image(&args.background)?;
    let overlay = load_image(&args.overlay)?;

    match super::timed("paste", opts, || paste(&mut background, &overlay, args.row, args.col)) {
        Some(region) => info!(%region, "pasted"),
        None => warn!(row = args.row, col = args.col, "overlay lies outside the background"),
    }

    save_image(&args.output, &background)?;

    if opts.verbose > 0 {
        println!("Saved: {}", args.output.display());
    }

    Ok(())
}
