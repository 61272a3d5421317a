//! Scaling operations.
//!
//! - [`zoom_2x`] - Enlarge a square block to `2n - 1` samples per side,
//!   interpolating the new samples
//! - [`subsample`] - Shrink by an integer factor using block means
//!
//! # Example
//!
//! ```rust
//! use gray_core::GrayImage;
//! use gray_ops::resize::{subsample, zoom_2x, ZoomRegion};
//!
//! let img = GrayImage::filled(64, 64, 50);
//!
//! let icon = subsample(&img, 4).unwrap();
//! assert_eq!(icon.dimensions(), (16, 16));
//!
//! let zoomed = zoom_2x(&img, Some(ZoomRegion::new(10, 10, 8))).unwrap();
//! assert_eq!(zoomed.dimensions(), (15, 15));
//! ```

use crate::stats::mean;
use crate::{round_sample, OpsError, OpsResult};
use gray_core::{GrayImage, Region};
use tracing::{debug, trace};

/// Square block of the source image to enlarge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRegion {
    /// Top row of the block.
    pub row: u32,
    /// Left column of the block.
    pub col: u32,
    /// Side length in samples.
    pub side: u32,
}

impl ZoomRegion {
    /// Creates a zoom region.
    #[inline]
    pub const fn new(row: u32, col: u32, side: u32) -> Self {
        Self { row, col, side }
    }

    /// The block anchored at (0, 0) whose side is the image's row count.
    ///
    /// Meant for square images; a source narrower than it is tall is
    /// rejected by [`zoom_2x`].
    #[inline]
    pub fn whole(image: &GrayImage) -> Self {
        Self::new(0, 0, image.rows())
    }

    /// The block as a [`Region`].
    #[inline]
    pub const fn region(&self) -> Region {
        Region::new(self.row, self.col, self.side, self.side)
    }
}

#[inline]
fn average(a: u8, b: u8) -> u8 {
    round_sample((f64::from(a) + f64::from(b)) / 2.0)
}

/// Zooms a square block by two, producing `n x n` with `n = 2 * side - 1`.
///
/// `None` zooms the whole image ([`ZoomRegion::whole`]).
///
/// 1. Source samples land on even output coordinates.
/// 2. Odd columns of even rows get the rounded mean of their left and
///    right neighbours.
/// 3. Odd rows get the rounded mean of the rows above and below, using the
///    values from step 2 in odd columns.
///
/// Means are computed in `f64` and rounded half away from zero.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] if the side length is 0
/// - [`OpsError::Image`] if the block does not lie entirely inside the image
/// - [`OpsError::InvalidDimensions`] if the output size overflows
///
/// # Example
///
/// ```rust
/// use gray_core::GrayImage;
/// use gray_ops::resize::zoom_2x;
///
/// let src = GrayImage::from_data(2, 2, vec![10, 20, 30, 40]).unwrap();
/// let out = zoom_2x(&src, None).unwrap();
/// assert_eq!(out.data(), &[10, 15, 20,
///                          20, 25, 30,
///                          30, 35, 40]);
/// ```
pub fn zoom_2x(image: &GrayImage, region: Option<ZoomRegion>) -> OpsResult<GrayImage> {
    let zoom = region.unwrap_or_else(|| ZoomRegion::whole(image));
    if zoom.side == 0 {
        return Err(OpsError::InvalidParameter(
            "zoom side length must be positive".into(),
        ));
    }
    if !image.bounds().contains_region(&zoom.region()) {
        return Err(gray_core::Error::invalid_region(zoom.region(), image.rows(), image.cols()).into());
    }
    let n = zoom
        .side
        .checked_mul(2)
        .map(|d| d - 1)
        .ok_or_else(|| OpsError::InvalidDimensions(format!("zoomed side of {} overflows", zoom.side)))?;

    let mut out = GrayImage::zeros(n, n);

    for a in 0..zoom.side {
        for b in 0..zoom.side {
            out.set_pixel(2 * a, 2 * b, image.pixel(zoom.row + a, zoom.col + b));
        }
    }

    for i in (0..n).step_by(2) {
        for j in (1..n).step_by(2) {
            let v = average(out.pixel(i, j - 1), out.pixel(i, j + 1));
            out.set_pixel(i, j, v);
        }
    }

    for i in (1..n).step_by(2) {
        for j in 0..n {
            let v = average(out.pixel(i - 1, j), out.pixel(i + 1, j));
            out.set_pixel(i, j, v);
        }
        trace!(row = i, "interpolated row");
    }

    debug!(?zoom, side = n, "zoomed 2x");
    Ok(out)
}

/// Shrinks the image by `factor` using block means.
///
/// The result is `floor(rows / factor) x floor(cols / factor)`; each output
/// sample is the rounded mean of its `factor x factor` source block.
/// Leftover rows and columns that do not fill a block are ignored.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `factor` is 0.
///
/// # Example
///
/// ```rust
/// use gray_core::GrayImage;
/// use gray_ops::resize::subsample;
///
/// let src = GrayImage::from_data(2, 2, vec![0, 1, 1, 1]).unwrap();
/// assert_eq!(subsample(&src, 2).unwrap().data(), &[1]); // 0.75 rounds up
/// ```
pub fn subsample(image: &GrayImage, factor: u32) -> OpsResult<GrayImage> {
    if factor == 0 {
        return Err(OpsError::InvalidParameter(
            "subsample factor must be positive".into(),
        ));
    }

    let rows = image.rows() / factor;
    let cols = image.cols() / factor;
    let mut out = GrayImage::zeros(rows, cols);

    for i in 0..out.rows() {
        for j in 0..out.cols() {
            let m = mean(image, i * factor, j * factor, factor, factor)?;
            out.set_pixel(i, j, round_sample(m));
        }
    }

    debug!(factor, rows = out.rows(), cols = out.cols(), "subsampled");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(rows: u32, cols: u32) -> GrayImage {
        let data = (0..rows * cols).map(|i| (i * 5 % 256) as u8).collect();
        GrayImage::from_data(rows, cols, data).unwrap()
    }

    #[test]
    fn test_zoom_2x2() {
        let src = GrayImage::from_data(2, 2, vec![10, 20, 30, 40]).unwrap();
        let out = zoom_2x(&src, Some(ZoomRegion::new(0, 0, 2))).unwrap();
        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(out.pixel(0, 0), 10);
        assert_eq!(out.pixel(0, 2), 20);
        assert_eq!(out.pixel(2, 0), 30);
        assert_eq!(out.pixel(2, 2), 40);
        assert_eq!(out.pixel(0, 1), 15);
        assert_eq!(out.pixel(2, 1), 35);
        assert_eq!(out.pixel(1, 0), 20);
        assert_eq!(out.pixel(1, 2), 30);
        assert_eq!(out.pixel(1, 1), 25);
    }

    #[test]
    fn test_zoom_rounds_half_away_from_zero() {
        let src = GrayImage::from_data(2, 2, vec![0, 1, 2, 4]).unwrap();
        let out = zoom_2x(&src, None).unwrap();
        // (0 + 1) / 2 = 0.5 -> 1, (2 + 4) / 2 = 3
        assert_eq!(out.row(0), &[0, 1, 1]);
        assert_eq!(out.row(2), &[2, 3, 4]);
        // column means use the already rounded horizontal values: (1 + 3) / 2
        assert_eq!(out.row(1), &[1, 2, 3]);
    }

    #[test]
    fn test_zoom_region_offset() {
        let src = numbered(6, 6);
        let out = zoom_2x(&src, Some(ZoomRegion::new(2, 3, 3))).unwrap();
        assert_eq!(out.dimensions(), (5, 5));
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(out.pixel(2 * a, 2 * b), src.pixel(2 + a, 3 + b));
            }
        }
    }

    #[test]
    fn test_zoom_side_one() {
        let src = numbered(3, 3);
        let out = zoom_2x(&src, Some(ZoomRegion::new(1, 1, 1))).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.pixel(0, 0), src.pixel(1, 1));
    }

    #[test]
    fn test_zoom_rejects_region_outside() {
        let src = numbered(4, 4);
        let err = zoom_2x(&src, Some(ZoomRegion::new(2, 2, 3))).unwrap_err();
        assert!(matches!(err, OpsError::Image(e) if e.is_bounds_error()));
    }

    #[test]
    fn test_zoom_rejects_zero_side() {
        assert!(matches!(
            zoom_2x(&numbered(4, 4), Some(ZoomRegion::new(0, 0, 0))),
            Err(OpsError::InvalidParameter(_))
        ));
        assert!(matches!(
            zoom_2x(&GrayImage::new(), None),
            Err(OpsError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zoom_whole_needs_square_source() {
        // 4 rows, 3 cols: the whole-image block would be 4x4
        assert!(zoom_2x(&numbered(4, 3), None).is_err());
        // 3 rows, 4 cols: the 3x3 block fits
        assert_eq!(zoom_2x(&numbered(3, 4), None).unwrap().dimensions(), (5, 5));
    }

    #[test]
    fn test_subsample_factor_one_is_identity() {
        let src = numbered(7, 5);
        assert_eq!(subsample(&src, 1).unwrap(), src);
    }

    #[test]
    fn test_subsample_block_means() {
        let src = GrayImage::from_data(
            4,
            4,
            vec![
                0, 2, 10, 10, //
                4, 6, 10, 11, //
                100, 100, 255, 255, //
                100, 101, 255, 254,
            ],
        )
        .unwrap();
        let out = subsample(&src, 2).unwrap();
        // 3.0, 10.25, 100.25, 254.75
        assert_eq!(out.data(), &[3, 10, 100, 255]);
    }

    #[test]
    fn test_subsample_drops_partial_blocks() {
        let out = subsample(&numbered(7, 10), 3).unwrap();
        assert_eq!(out.dimensions(), (2, 3));
        assert!(subsample(&numbered(2, 10), 3).unwrap().is_empty());
    }

    #[test]
    fn test_subsample_zero_factor() {
        let err = subsample(&numbered(4, 4), 0).unwrap_err();
        assert!(matches!(err, OpsError::InvalidParameter(_)));
    }
}
