//! Error types for gray-core operations.
//!
//! Covers the failure modes of the image container itself: bounds checks,
//! dimension validation and allocation. Format and processing errors live
//! in `gray-io` and `gray-ops`, which wrap this type.
//!
//! # Usage
//!
//! ```rust
//! use gray_core::{Error, Result};
//!
//! fn check(row: u32, col: u32, rows: u32, cols: u32) -> Result<()> {
//!     if row >= rows || col >= cols {
//!         return Err(Error::out_of_bounds(row, col, rows, cols));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(3, 0, 2, 2).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing a [`crate::GrayImage`].
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds), [`InvalidRegion`](Error::InvalidRegion)
/// - **Allocation errors**: [`AllocationFailed`](Error::AllocationFailed)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions)
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gray_core::Error;
    ///
    /// let err = Error::out_of_bounds(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel (row {row}, col {col}) out of bounds for image {rows}x{cols}")]
    OutOfBounds {
        /// Row that was accessed
        row: u32,
        /// Column that was accessed
        col: u32,
        /// Image row count
        rows: u32,
        /// Image column count
        cols: u32,
    },

    /// Region extends beyond image bounds.
    #[error("region (row {row}, col {col}, {height}x{width}) exceeds image bounds {rows}x{cols}")]
    InvalidRegion {
        /// Region top row
        row: u32,
        /// Region left column
        col: u32,
        /// Region height in rows
        height: u32,
        /// Region width in columns
        width: u32,
        /// Image row count
        rows: u32,
        /// Image column count
        cols: u32,
    },

    /// Memory allocation failed.
    ///
    /// Only produced by the fallible constructors; the plain constructors
    /// abort on allocation failure like any `Vec`.
    #[error("failed to allocate {requested} bytes: {reason}")]
    AllocationFailed {
        /// Bytes requested
        requested: usize,
        /// Failure reason
        reason: String,
    },

    /// Invalid image dimensions or a sample buffer that does not match them.
    #[error("invalid dimensions: {rows}x{cols} ({reason})")]
    InvalidDimensions {
        /// Requested row count
        rows: u32,
        /// Requested column count
        cols: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: u32, col: u32, rows: u32, cols: u32) -> Self {
        Self::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(region: crate::Region, rows: u32, cols: u32) -> Self {
        Self::InvalidRegion {
            row: region.row,
            col: region.col,
            height: region.height,
            width: region.width,
            rows,
            cols,
        }
    }

    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(rows: u32, cols: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            rows,
            cols,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidRegion { .. })
    }

    /// Returns `true` if this is an allocation error.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Region;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_invalid_region() {
        let err = Error::invalid_region(Region::new(5, 5, 10, 10), 8, 8);
        assert!(err.to_string().contains("10x10"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_allocation_failed() {
        let err = Error::allocation_failed(1024 * 1024 * 1024, "out of memory");
        assert!(err.to_string().contains("out of memory"));
        assert!(err.is_allocation_error());
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(4, 4, "expected 16 samples, got 3");
        let msg = err.to_string();
        assert!(msg.contains("4x4"));
        assert!(msg.contains("got 3"));
    }
}
