//! # gray-core
//!
//! Core types for grayscale raster processing.
//!
//! - [`GrayImage`] - Owned single-channel 8-bit image, row-major
//! - [`Region`] - Rectangular block of samples
//! - [`Error`] - Container errors (bounds, dimensions, allocation)
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other crates build on it:
//!
//! ```text
//! gray-core (this crate)
//!    ^
//!    |
//!    +-- gray-io  (PGM decode/encode)
//!    +-- gray-ops (crop, zoom, subsample, contrast, shuffle)
//!    +-- gray-cli (the `gray` binary)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gray_core::GrayImage;
//!
//! let mut img = GrayImage::filled(480, 640, 0);
//! img.set_pixel(10, 20, 255);
//! let copy = img.clone(); // deep copy
//! assert_eq!(copy.pixel(10, 20), 255);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod region;

pub use error::{Error, Result};
pub use image::GrayImage;
pub use region::Region;

/// Largest sample value.
pub const MAX_SAMPLE: u8 = u8::MAX;

/// Prelude module for convenient imports.
///
/// ```
/// use gray_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::GrayImage;
    pub use crate::region::Region;
}
