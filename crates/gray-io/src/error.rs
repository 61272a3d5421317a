//! Error types for I/O operations.
//!
//! Distinguishes "this is not the format we read" from failures while
//! reading or parsing a file that claims to be one.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a grayscale PGM file.
    #[error("not a PGM image: {0}")]
    NotThisFormat(String),

    /// Format recognised but not supported for this operation.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid or corrupted file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Sample depth beyond 8 bits.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded data could not form an image.
    #[error("image error: {0}")]
    Image(#[from] gray_core::Error),
}

impl IoError {
    /// Returns `true` if the input was of the wrong format, as opposed to
    /// a read or parse failure.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::NotThisFormat(_) | Self::UnsupportedFormat(_))
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
