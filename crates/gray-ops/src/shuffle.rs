//! Deterministic row permutation.
//!
//! Row `r` of the result holds what was row `(r * P) mod rows` before the
//! call. The map is a permutation only when `P` and `rows` are coprime, so
//! [`shuffle_rows_with`] checks that first and refuses otherwise, rather
//! than silently duplicating some rows and dropping others.

use crate::{OpsError, OpsResult};
use gray_core::GrayImage;
use tracing::debug;

/// Default multiplier for [`shuffle_rows`]. Prime, so every row count
/// below it is coprime with it.
pub const SHUFFLE_MODULUS: usize = 9973;

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Whether `r -> (r * modulus) mod rows` visits every row exactly once.
///
/// ```rust
/// use gray_ops::shuffle::{is_permutation, SHUFFLE_MODULUS};
///
/// assert!(is_permutation(10, SHUFFLE_MODULUS));
/// assert!(!is_permutation(2 * SHUFFLE_MODULUS as u32, SHUFFLE_MODULUS));
/// assert!(!is_permutation(4, 6));
/// ```
pub fn is_permutation(rows: u32, modulus: usize) -> bool {
    match rows {
        0 | 1 => true,
        _ => gcd(modulus as u64 % u64::from(rows), u64::from(rows)) == 1,
    }
}

/// Shuffles rows with [`SHUFFLE_MODULUS`].
///
/// # Errors
///
/// Returns [`OpsError::NotAPermutation`] when the row count is a multiple
/// of 9973. The image is untouched in that case.
///
/// # Example
///
/// ```rust
/// use gray_core::GrayImage;
/// use gray_ops::shuffle::shuffle_rows;
///
/// let mut img = GrayImage::from_data(10, 1, (0..10).collect()).unwrap();
/// shuffle_rows(&mut img).unwrap();
/// assert_eq!(img.data(), &[0, 3, 6, 9, 2, 5, 8, 1, 4, 7]);
/// ```
pub fn shuffle_rows(image: &mut GrayImage) -> OpsResult<()> {
    shuffle_rows_with(image, SHUFFLE_MODULUS)
}

/// Shuffles rows so that row `r` receives old row `(r * modulus) mod rows`.
///
/// Rows are copied into a fresh buffer which then replaces the old one.
/// An empty image is left as is.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] if `modulus` is 0
/// - [`OpsError::NotAPermutation`] if `modulus` and the row count share a
///   factor
pub fn shuffle_rows_with(image: &mut GrayImage, modulus: usize) -> OpsResult<()> {
    if modulus == 0 {
        return Err(OpsError::InvalidParameter("shuffle modulus must be positive".into()));
    }
    if image.is_empty() {
        return Ok(());
    }

    let rows = image.rows();
    if !is_permutation(rows, modulus) {
        return Err(OpsError::NotAPermutation { rows, modulus });
    }

    let step = modulus as u64 % u64::from(rows);
    let mut shuffled = Vec::with_capacity(image.size());
    for r in 0..u64::from(rows) {
        let source = (r * step % u64::from(rows)) as u32;
        shuffled.extend_from_slice(image.row(source));
    }

    *image = GrayImage::from_data(rows, image.cols(), shuffled)?;
    debug!(rows, modulus, "shuffled rows");
    Ok(())
}
