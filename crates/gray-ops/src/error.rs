//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
///
/// Every operation validates its arguments before touching any sample, so
/// an error always leaves the input unchanged.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Row mapping would drop or duplicate rows.
    #[error("row mapping with modulus {modulus} is not a permutation of {rows} rows")]
    NotAPermutation {
        /// Image row count
        rows: u32,
        /// Modulus used by the mapping
        modulus: usize,
    },

    /// Region or coordinate outside the image.
    #[error(transparent)]
    Image(#[from] gray_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
