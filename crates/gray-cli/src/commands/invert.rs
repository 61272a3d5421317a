//! Invert command

use crate::InvertArgs;
use anyhow::Result;
use gray_ops::intensity::invert;

use super::Options;

pub fn run(args: InvertArgs, opts: Options) -> Result<()> {
    let mut image = super::load_image(&args.input)?;
    super::timed("invert", opts, || invert(&mut image));
    super::save_image(&args.output, &image)
}
