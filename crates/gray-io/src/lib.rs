//! # gray-io
//!
//! Image I/O for grayscale rasters.
//!
//! Reads and writes Netpbm graymaps (PGM): binary `P5` always, plain `P2`
//! with the `ascii` feature. Samples are 8-bit (`maxval <= 255`).
//!
//! # Architecture
//!
//! - [`ImageReader`] / [`ImageWriter`] - Traits for format readers and writers
//! - [`PgmReader`] / [`PgmWriter`] - The PGM implementations
//! - [`read`] / [`write`] - High-level functions on file paths
//! - [`load_into`] / [`save`] - Helpers for reusing an existing image
//!
//! # Errors
//!
//! Decoding distinguishes a file of the wrong format
//! ([`IoError::NotThisFormat`], see [`IoError::is_format_error`]) from
//! I/O or parse failures on a file that claims to be a graymap.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gray_io::{read, write};
//!
//! let image = read("input.pgm")?;
//! write("output.pgm", &image)?;
//! ```
//!
//! # Feature Flags
//!
//! - `ascii` - Plain (P2) PGM support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
pub mod pgm;
mod traits;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use pgm::{Encoding, PgmHeader, PgmReader, PgmWriter, PGM_MAX_VALUE};
pub use traits::{ImageReader, ImageWriter};

use gray_core::GrayImage;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a graymap from a file.
///
/// The format is detected from the file's magic bytes, not its extension.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be read
/// - [`IoError::NotThisFormat`] if it is not a graymap
/// - [`IoError::InvalidFile`] / [`IoError::UnsupportedBitDepth`] for
///   malformed or unsupported content
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading image");
    pgm::read(path)
}

/// Writes an image to a file as binary PGM.
///
/// The extension is not required to be `.pgm`, but `.ppm` and `.pbm` are
/// refused since the output would not match its name.
pub fn write<P: AsRef<Path>>(path: P, image: &GrayImage) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Ppm | Format::Pbm => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot write a graymap to {}",
                path.display()
            )));
        }
        _ => {}
    }
    debug!(path = %path.display(), rows = image.rows(), cols = image.cols(), "writing image");
    pgm::write(path, image)
}

/// Loads a file into an existing image.
///
/// The previous content is released first, so on failure `target` is left
/// empty rather than holding stale or partial data.
///
/// ```rust
/// use gray_core::GrayImage;
///
/// let mut img = GrayImage::filled(4, 4, 1);
/// assert!(gray_io::load_into(&mut img, "/nonexistent/file.pgm").is_err());
/// assert!(img.is_empty());
/// ```
pub fn load_into<P: AsRef<Path>>(target: &mut GrayImage, path: P) -> IoResult<()> {
    target.reset();
    *target = read(path)?;
    Ok(())
}

/// Writes an image, reporting only success or failure.
///
/// The error is logged at `warn` level.
pub fn save<P: AsRef<Path>>(path: P, image: &GrayImage) -> bool {
    let path = path.as_ref();
    match write(path, image) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to save image");
            false
        }
    }
}
