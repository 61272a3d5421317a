//! Block statistics.

use crate::{OpsError, OpsResult};
use gray_core::{GrayImage, Region};

/// Mean of the `height x width` block whose top-left sample is (row, col).
///
/// Samples outside the image are skipped, but the sum is still divided by
/// the nominal `height * width`. A block hanging over the edge therefore
/// reads darker than its in-bounds samples: a 2x2 block with a single
/// in-bounds sample of 100 has mean 25.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `height` or `width` is 0.
///
/// # Example
///
/// ```rust
/// use gray_core::GrayImage;
/// use gray_ops::stats::mean;
///
/// let img = GrayImage::from_data(2, 2, vec![10, 20, 30, 40]).unwrap();
/// assert_eq!(mean(&img, 0, 0, 2, 2).unwrap(), 25.0);
/// ```
pub fn mean(image: &GrayImage, row: u32, col: u32, height: u32, width: u32) -> OpsResult<f64> {
    if height == 0 || width == 0 {
        return Err(OpsError::InvalidParameter(format!(
            "mean over an empty {height}x{width} block"
        )));
    }

    let mut sum = 0u64;
    if let Some(inside) = Region::new(row, col, height, width).clamp_to(image.rows(), image.cols()) {
        let cols = inside.col as usize..inside.right() as usize;
        for r in inside.row..inside.bottom() {
            sum += image.row(r)[cols.clone()].iter().map(|&v| u64::from(v)).sum::<u64>();
        }
    }

    Ok(sum as f64 / (f64::from(height) * f64::from(width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_full_block() {
        let img = GrayImage::from_data(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_relative_eq!(mean(&img, 0, 0, 2, 3).unwrap(), 3.5);
        assert_relative_eq!(mean(&img, 1, 1, 1, 2).unwrap(), 5.5);
    }

    #[test]
    fn test_mean_clamped_uses_nominal_denominator() {
        let img = GrayImage::filled(3, 3, 100);
        // Only (2, 2) is inside: 100 / 4
        assert_relative_eq!(mean(&img, 2, 2, 2, 2).unwrap(), 25.0);
        // Three in-bounds rows of a 6-row block over a 3-wide column span
        assert_relative_eq!(mean(&img, 0, 0, 6, 3).unwrap(), 50.0);
    }

    #[test]
    fn test_mean_non_square_image_clamps_each_axis() {
        // 2 rows x 5 cols: rows and cols must be clamped independently
        let img = GrayImage::filled(2, 5, 10);
        assert_relative_eq!(mean(&img, 0, 0, 2, 5).unwrap(), 10.0);
        assert_relative_eq!(mean(&img, 0, 3, 2, 4).unwrap(), 5.0);
    }

    #[test]
    fn test_mean_outside_is_zero() {
        let img = GrayImage::filled(3, 3, 200);
        assert_relative_eq!(mean(&img, 10, 10, 2, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_mean_rejects_empty_block() {
        let img = GrayImage::filled(3, 3, 200);
        assert!(matches!(mean(&img, 0, 0, 0, 2), Err(OpsError::InvalidParameter(_))));
        assert!(mean(&img, 0, 0, 2, 0).is_err());
    }
}
