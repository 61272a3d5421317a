//! Region extraction and placement.
//!
//! # Operations
//!
//! - [`crop`] - Extract a block, zero-filling whatever falls outside the source
//! - [`paste`] - Copy one image into another at an offset, clipped to the target
//!
//! # Example
//!
//! ```rust
//! use gray_core::GrayImage;
//! use gray_ops::transform::{crop, paste};
//!
//! let src = GrayImage::filled(64, 64, 128);
//!
//! // 32 rows x 16 cols starting at (8, 8)
//! let block = crop(&src, 8, 8, 16, 32);
//! assert_eq!(block.dimensions(), (32, 16));
//!
//! let mut canvas = GrayImage::zeros(40, 40);
//! paste(&mut canvas, &block, 30, 30);
//! assert_eq!(canvas.pixel(39, 39), 128);
//! ```

use gray_core::{GrayImage, Region};
use tracing::debug;

/// Crops a block from the image.
///
/// The result has `width` rows and `height` columns: output sample
/// `(i, j)` comes from source `(top_row + i, left_col + j)` for
/// `i < width`, `j < height`. Output samples whose source coordinate lies
/// outside the image stay 0, so a region hanging over the edge (or lying
/// entirely outside) never fails.
///
/// If `width` or `height` is 0 the result is the empty image.
///
/// # Example
///
/// ```rust
/// use gray_core::GrayImage;
/// use gray_ops::transform::crop;
///
/// let src = GrayImage::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
/// let out = crop(&src, 1, 1, 2, 2);
/// assert_eq!(out.data(), &[4, 0, 0, 0]);
/// ```
pub fn crop(image: &GrayImage, top_row: u32, left_col: u32, height: u32, width: u32) -> GrayImage {
    let mut out = GrayImage::zeros(width, height);
    if out.is_empty() {
        return out;
    }

    let requested = Region::new(top_row, left_col, width, height);
    let Some(inside) = requested.clamp_to(image.rows(), image.cols()) else {
        debug!(%requested, rows = image.rows(), cols = image.cols(), "crop region outside image");
        return out;
    };

    let src_cols = inside.col as usize..inside.right() as usize;
    let dst_start = (inside.col - left_col) as usize;
    let dst_cols = dst_start..dst_start + inside.width as usize;
    for row in inside.row..inside.bottom() {
        out.row_mut(row - top_row)[dst_cols.clone()].copy_from_slice(&image.row(row)[src_cols.clone()]);
    }

    debug!(%requested, copied = %inside, "cropped");
    out
}

/// Copies `src` into `dst` with its top-left corner at (row, col).
///
/// Parts of `src` that fall outside `dst` are dropped. Returns the region
/// of `dst` that was written, or `None` if nothing overlapped.
pub fn paste(dst: &mut GrayImage, src: &GrayImage, row: u32, col: u32) -> Option<Region> {
    let target = Region::new(row, col, src.rows(), src.cols()).clamp_to(dst.rows(), dst.cols())?;

    let width = target.width as usize;
    for r in target.row..target.bottom() {
        let src_row = &src.row(r - row)[..width];
        dst.row_mut(r)[target.col as usize..target.right() as usize].copy_from_slice(src_row);
    }

    debug!(%target, "pasted");
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(rows: u32, cols: u32) -> GrayImage {
        let data = (0..rows * cols).map(|i| i as u8).collect();
        GrayImage::from_data(rows, cols, data).unwrap()
    }

    #[test]
    fn test_crop_inside_reproduces_block() {
        let src = numbered(6, 8);
        // width = 3 rows, height = 4 cols
        let out = crop(&src, 2, 1, 4, 3);
        assert_eq!(out.dimensions(), (3, 4));
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(out.pixel(i, j), src.pixel(2 + i, 1 + j));
            }
        }
    }

    #[test]
    fn test_crop_swaps_height_and_width() {
        let src = numbered(10, 10);
        let out = crop(&src, 0, 0, 2, 5);
        assert_eq!(out.rows(), 5);
        assert_eq!(out.cols(), 2);
    }

    #[test]
    fn test_crop_partially_outside_zero_fills() {
        let src = GrayImage::filled(4, 4, 9);
        let out = crop(&src, 2, 3, 3, 3);
        assert_eq!(out.dimensions(), (3, 3));
        for (i, j, v) in out.pixels() {
            let inside = 2 + i < 4 && 3 + j < 4;
            assert_eq!(v, if inside { 9 } else { 0 }, "at ({i}, {j})");
        }
    }

    #[test]
    fn test_crop_fully_outside() {
        let src = GrayImage::filled(4, 4, 9);
        let out = crop(&src, 100, 100, 2, 2);
        assert_eq!(out, GrayImage::zeros(2, 2));
    }

    #[test]
    fn test_crop_zero_size_is_empty() {
        let src = GrayImage::filled(4, 4, 9);
        assert!(crop(&src, 0, 0, 0, 3).is_empty());
        assert!(crop(&src, 0, 0, 3, 0).is_empty());
        assert!(crop(&GrayImage::new(), 0, 0, 2, 2).pixels().all(|(_, _, v)| v == 0));
    }

    #[test]
    fn test_paste_clips() {
        let mut dst = GrayImage::zeros(4, 4);
        let src = numbered(3, 3);
        let written = paste(&mut dst, &src, 2, 1).unwrap();
        assert_eq!(written, Region::new(2, 1, 2, 3));
        assert_eq!(dst.row(2), &[0, 0, 1, 2]);
        assert_eq!(dst.row(3), &[0, 3, 4, 5]);
        assert_eq!(dst.row(0), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_paste_outside_is_noop() {
        let mut dst = GrayImage::zeros(2, 2);
        assert!(paste(&mut dst, &GrayImage::filled(2, 2, 1), 5, 0).is_none());
        assert!(paste(&mut dst, &GrayImage::new(), 0, 0).is_none());
        assert_eq!(dst, GrayImage::zeros(2, 2));
    }
}
