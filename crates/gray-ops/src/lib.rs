//! # gray-ops
//!
//! Operations on grayscale rasters.
//!
//! # Modules
//!
//! - [`transform`] - Crop and paste
//! - [`resize`] - 2x zoom with interpolation, block-mean subsampling
//! - [`stats`] - Block mean
//! - [`intensity`] - Contrast stretch and inversion
//! - [`shuffle`] - Deterministic row permutation
//!
//! Crop, zoom and subsample return a new [`GrayImage`](gray_core::GrayImage);
//! contrast, invert and shuffle modify the image in place. Every fallible
//! operation checks its arguments before touching a sample, so on error the
//! input is unchanged.
//!
//! # Rounding
//!
//! Averages and remapped values are computed in `f64`, rounded half away
//! from zero and clamped to `0..=255`.
//!
//! # Example
//!
//! ```rust
//! use gray_core::GrayImage;
//! use gray_ops::{intensity, resize, shuffle, transform};
//!
//! let mut img = GrayImage::filled(32, 32, 100);
//! intensity::adjust_contrast(&mut img, 50, 150, 0, 255)?;
//! shuffle::shuffle_rows(&mut img)?;
//!
//! let block = transform::crop(&img, 0, 0, 8, 8);
//! let zoomed = resize::zoom_2x(&block, None)?;
//! let icon = resize::subsample(&img, 4)?;
//! assert_eq!(zoomed.dimensions(), (15, 15));
//! assert_eq!(icon.dimensions(), (8, 8));
//! # Ok::<(), gray_ops::OpsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod intensity;
pub mod resize;
pub mod shuffle;
pub mod stats;
pub mod transform;

pub use error::{OpsError, OpsResult};
pub use intensity::ContrastStretch;
pub use resize::ZoomRegion;
pub use shuffle::SHUFFLE_MODULUS;

/// Rounds half away from zero into the sample range.
#[inline]
pub(crate) fn round_sample(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
