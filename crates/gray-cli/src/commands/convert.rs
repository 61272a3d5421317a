//! Convert command: rewrite as binary or plain PGM

use crate::ConvertArgs;
use anyhow::{Context, Result};
use gray_io::{Encoding, ImageWriter, PgmWriter};
use tracing::debug;

use super::Options;

pub fn run(args: ConvertArgs, opts: Options) -> Result<()> {
    let image = super::load_image(&args.input)?;

    let encoding = if args.ascii { Encoding::Ascii } else { Encoding::Binary };
    let mut writer = PgmWriter::new().with_encoding(encoding);
    if let Some(comment) = args.comment {
        writer = writer.with_comment(comment);
    }
    debug!(?encoding, "converting");

    super::timed("encode", opts, || writer.write(&args.output, &image))
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;

    if opts.verbose > 0 {
        println!("{} -> {}", args.input.display(), args.output.display());
    }

    Ok(())
}
