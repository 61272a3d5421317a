//! Row shuffle command

use crate::ShuffleArgs;
use anyhow::{Context, Result};
use gray_ops::shuffle::{shuffle_rows, SHUFFLE_MODULUS};

use super::Options;

pub fn run(args: ShuffleArgs, opts: Options) -> Result<()> {
    let mut image = super::load_image(&args.input)?;

    if opts.verbose > 0 {
        println!("Shuffling {} rows (P = {SHUFFLE_MODULUS})", image.rows());
    }

    super::timed("shuffle", opts, || shuffle_rows(&mut image)).context("Shuffle failed")?;

    super::save_image(&args.output, &image)?;
    Ok(())
}
