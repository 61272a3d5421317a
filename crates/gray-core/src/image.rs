//! The grayscale image container.
//!
//! [`GrayImage`] owns a 2D grid of single-byte intensity samples.
//!
//! # Memory Layout
//!
//! Samples live in one contiguous buffer in **row-major** order with no
//! padding between rows:
//!
//! ```text
//! index = row * cols + col
//!
//! Memory: [s s s s ...]  ← Row 0
//!         [s s s s ...]  ← Row 1
//!         ...
//! ```
//!
//! The linear accessors ([`GrayImage::pixel_at`], [`GrayImage::set_pixel_at`])
//! never index the buffer directly: they split the index into (row, col)
//! and go through the 2D accessors, so the addressing contract does not
//! depend on the storage layout.
//!
//! # Ownership
//!
//! An image exclusively owns its samples. `clone()` is a deep copy, so two
//! images never share storage and mutating one never affects the other.
//! Storage is released when the image is dropped, reassigned, or
//! [`reset`](GrayImage::reset).
//!
//! # Empty images
//!
//! An image is either empty (0x0, no storage) or has both dimensions
//! positive. Asking for a size with a single zero dimension yields the
//! empty image.
//!
//! # Usage
//!
//! ```rust
//! use gray_core::GrayImage;
//!
//! let mut img = GrayImage::filled(4, 6, 100);
//! img.set_pixel(1, 2, 255);
//!
//! assert_eq!(img.pixel(1, 2), 255);
//! assert_eq!(img.pixel_at(8), 255); // 8 = 1 * 6 + 2
//! assert_eq!(img.size(), 24);
//! ```

use crate::{Error, Region, Result};

/// Owned single-channel 8-bit image.
///
/// Pixel accessors follow a fail-fast policy: [`pixel`](Self::pixel),
/// [`set_pixel`](Self::set_pixel) and their linear variants **panic** on
/// out-of-bounds coordinates. Use [`get_pixel`](Self::get_pixel) or
/// [`try_set_pixel`](Self::try_set_pixel) when coordinates come from
/// untrusted input.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GrayImage {
    /// Row-major samples, exactly `rows * cols` of them
    data: Vec<u8>,
    /// Number of rows
    rows: u32,
    /// Number of columns
    cols: u32,
}

impl GrayImage {
    /// Creates the empty image (0x0, no storage).
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Creates a `rows x cols` image with every sample set to 0.
    #[inline]
    pub fn zeros(rows: u32, cols: u32) -> Self {
        Self::filled(rows, cols, 0)
    }

    /// Creates a `rows x cols` image with every sample set to `value`.
    ///
    /// If either dimension is 0 the result is the empty image.
    ///
    /// # Panics
    ///
    /// Aborts if the allocation fails, like any `Vec`. Use
    /// [`try_filled`](Self::try_filled) to get an error instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gray_core::GrayImage;
    ///
    /// let img = GrayImage::filled(3, 0, 7);
    /// assert!(img.is_empty());
    /// assert_eq!(img.size(), 0);
    /// ```
    pub fn filled(rows: u32, cols: u32, value: u8) -> Self {
        if rows == 0 || cols == 0 {
            return Self::new();
        }
        Self {
            data: vec![value; rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    /// Fallible version of [`filled`](Self::filled).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if `rows * cols` overflows `usize`
    /// - [`Error::AllocationFailed`] if the buffer cannot be reserved
    pub fn try_filled(rows: u32, cols: u32, value: u8) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Ok(Self::new());
        }
        let len = sample_count(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| Error::allocation_failed(len, e.to_string()))?;
        data.resize(len, value);
        Ok(Self { data, rows, cols })
    }

    /// Wraps decoded samples as an image, taking ownership of the buffer.
    ///
    /// `data` must be row-major and hold exactly `rows * cols` samples.
    /// A zero dimension requires an empty buffer and yields the empty image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the length does not match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gray_core::GrayImage;
    ///
    /// let img = GrayImage::from_data(2, 2, vec![10, 20, 30, 40]).unwrap();
    /// assert_eq!(img.pixel(1, 0), 30);
    /// assert!(GrayImage::from_data(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_data(rows: u32, cols: u32, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(rows, cols)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                rows,
                cols,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        if expected == 0 {
            return Ok(Self::new());
        }
        Ok(Self { data, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Dimensions as (rows, cols).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of samples (`rows * cols`).
    #[inline]
    pub fn size(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns `true` if the image holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Region covering the whole image.
    #[inline]
    pub fn bounds(&self) -> Region {
        Region::from_size(self.rows, self.cols)
    }

    /// Raw row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw row-major samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image and returns its sample buffer.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Releases the storage and returns the image to the empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    #[inline]
    fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns the sample at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is out of bounds.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> u8 {
        assert!(
            self.in_bounds(row, col),
            "pixel (row {row}, col {col}) out of bounds for image {}x{}",
            self.rows,
            self.cols
        );
        self.data[self.offset(row, col)]
    }

    /// Returns the sample at (row, col), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, row: u32, col: u32) -> Option<u8> {
        if self.in_bounds(row, col) {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Sets the sample at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, row: u32, col: u32, value: u8) {
        assert!(
            self.in_bounds(row, col),
            "pixel (row {row}, col {col}) out of bounds for image {}x{}",
            self.rows,
            self.cols
        );
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }

    /// Sets the sample at (row, col), reporting out-of-bounds access as an error.
    pub fn try_set_pixel(&mut self, row: u32, col: u32, value: u8) -> Result<()> {
        if !self.in_bounds(row, col) {
            return Err(Error::out_of_bounds(row, col, self.rows, self.cols));
        }
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    /// Splits a linear index into (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `k >= size()`.
    #[inline]
    fn split_index(&self, k: usize) -> (u32, u32) {
        assert!(
            k < self.size(),
            "linear index {k} out of bounds for image of {} samples",
            self.size()
        );
        let cols = self.cols as usize;
        ((k / cols) as u32, (k % cols) as u32)
    }

    /// Returns sample `k` of the unrolled image, i.e. `(k / cols, k % cols)`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= size()`.
    #[inline]
    pub fn pixel_at(&self, k: usize) -> u8 {
        let (row, col) = self.split_index(k);
        self.pixel(row, col)
    }

    /// Sets sample `k` of the unrolled image.
    ///
    /// # Panics
    ///
    /// Panics if `k >= size()`.
    #[inline]
    pub fn set_pixel_at(&mut self, k: usize, value: u8) {
        let (row, col) = self.split_index(k);
        self.set_pixel(row, col, value);
    }

    /// Returns one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols as usize]
    }

    /// Returns one row of samples mutably.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [u8] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        let start = self.offset(row, 0);
        let cols = self.cols as usize;
        &mut self.data[start..start + cols]
    }

    /// Iterates over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // `max(1)` keeps chunk size valid for the empty image (no data anyway).
        self.data.chunks_exact(self.cols.max(1) as usize)
    }

    /// Iterates over all samples with their coordinates, row by row.
    ///
    /// ```rust
    /// use gray_core::GrayImage;
    ///
    /// let img = GrayImage::filled(2, 3, 9);
    /// assert!(img.pixels().all(|(_, _, v)| v == 9));
    /// assert_eq!(img.pixels().count(), 6);
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c, self.pixel(r, c))))
    }

    /// Sets every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Replaces every sample `z` with `f(z)`.
    ///
    /// ```rust
    /// use gray_core::GrayImage;
    ///
    /// let mut img = GrayImage::filled(2, 2, 10);
    /// img.map_pixels(|z| z * 2);
    /// assert_eq!(img.pixel(1, 1), 20);
    /// ```
    pub fn map_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(u8) -> u8,
    {
        for sample in self.data.iter_mut() {
            *sample = f(*sample);
        }
    }
}

/// `rows * cols` as `usize`, or an error if it overflows.
fn sample_count(rows: u32, cols: u32) -> Result<usize> {
    (rows as usize)
        .checked_mul(cols as usize)
        .ok_or_else(|| Error::invalid_dimensions(rows, cols, "sample count overflows usize"))
}

impl std::fmt::Debug for GrayImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrayImage")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("samples", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(rows: u32, cols: u32) -> GrayImage {
        let data = (0..rows * cols).map(|i| (i % 256) as u8).collect();
        GrayImage::from_data(rows, cols, data).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let img = GrayImage::new();
        assert!(img.is_empty());
        assert_eq!(img.dimensions(), (0, 0));
        assert_eq!(img.size(), 0);
        assert!(img.data().is_empty());
        assert_eq!(GrayImage::default(), img);
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        for n in [1, 7, 300] {
            let a = GrayImage::filled(0, n, 5);
            let b = GrayImage::filled(n, 0, 5);
            assert!(a.is_empty() && b.is_empty());
            assert_eq!(a.size(), 0);
            assert_eq!(b.size(), 0);
            assert_eq!(a.dimensions(), (0, 0));
        }
    }

    #[test]
    fn test_filled() {
        let img = GrayImage::filled(3, 5, 42);
        assert_eq!(img.dimensions(), (3, 5));
        assert_eq!(img.size(), 15);
        assert!(img.data().iter().all(|&v| v == 42));
    }

    #[test]
    fn test_try_filled() {
        let img = GrayImage::try_filled(4, 4, 1).unwrap();
        assert_eq!(img, GrayImage::filled(4, 4, 1));
        assert!(GrayImage::try_filled(0, 4, 1).unwrap().is_empty());
    }

    #[test]
    fn test_from_data_wrong_size() {
        let err = GrayImage::from_data(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
        assert!(GrayImage::from_data(0, 3, vec![]).unwrap().is_empty());
        assert!(GrayImage::from_data(0, 3, vec![1]).is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let a = GrayImage::filled(4, 4, 7);
        let mut b = a.clone();
        b.set_pixel(0, 0, 200);
        assert_eq!(a.pixel(0, 0), 7);
        assert_eq!(b.pixel(0, 0), 200);
    }

    #[test]
    fn test_assign_replaces_storage() {
        let mut a = GrayImage::filled(2, 2, 1);
        let b = GrayImage::filled(3, 5, 9);
        assert_eq!(a.pixel(1, 1), 1);
        a = b.clone();
        assert_eq!(a.dimensions(), (3, 5));
        assert_eq!(a.pixel(2, 4), 9);
    }

    #[test]
    fn test_linear_matches_2d() {
        let img = ramp(7, 9);
        for k in 0..img.size() {
            let cols = img.cols() as usize;
            assert_eq!(img.pixel_at(k), img.pixel((k / cols) as u32, (k % cols) as u32));
        }
    }

    #[test]
    fn test_set_pixel_at_touches_one_sample() {
        let mut img = ramp(5, 6);
        let before = img.clone();
        img.set_pixel_at(13, 250);
        assert_eq!(img.pixel_at(13), 250);
        assert_eq!(img.pixel(2, 1), 250);
        for k in (0..img.size()).filter(|&k| k != 13) {
            assert_eq!(img.pixel_at(k), before.pixel_at(k));
        }
    }

    #[test]
    fn test_get_pixel_bounds() {
        let img = GrayImage::filled(2, 3, 5);
        assert_eq!(img.get_pixel(1, 2), Some(5));
        assert_eq!(img.get_pixel(2, 0), None);
        assert_eq!(img.get_pixel(0, 3), None);
    }

    #[test]
    fn test_try_set_pixel() {
        let mut img = GrayImage::zeros(2, 2);
        assert!(img.try_set_pixel(1, 1, 3).is_ok());
        let err = img.try_set_pixel(0, 2, 3).unwrap_err();
        assert!(err.is_bounds_error());
        assert_eq!(img.data(), &[0, 0, 0, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_col_overflow_panics() {
        // (0, 3) would alias (1, 0) in the flat buffer; it must not.
        let img = GrayImage::zeros(2, 3);
        img.pixel(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_at_out_of_range_panics() {
        let img = GrayImage::zeros(2, 3);
        img.pixel_at(6);
    }

    #[test]
    fn test_rows() {
        let mut img = ramp(3, 4);
        assert_eq!(img.row(1), &[4, 5, 6, 7]);
        img.row_mut(2).copy_from_slice(&[1, 1, 1, 1]);
        assert_eq!(img.pixel(2, 3), 1);
        assert_eq!(img.iter_rows().count(), 3);
        assert_eq!(GrayImage::new().iter_rows().count(), 0);
    }

    #[test]
    fn test_reset() {
        let mut img = GrayImage::filled(10, 10, 1);
        img.reset();
        assert!(img.is_empty());
        assert!(img.data().is_empty());
    }

    #[test]
    fn test_map_and_fill() {
        let mut img = ramp(2, 2);
        img.map_pixels(|z| 255 - z);
        assert_eq!(img.data(), &[255, 254, 253, 252]);
        img.fill(0);
        assert_eq!(img, GrayImage::zeros(2, 2));
    }

    #[test]
    fn test_debug() {
        let s = format!("{:?}", GrayImage::zeros(2, 3));
        assert!(s.contains("rows: 2"));
        assert!(s.contains("cols: 3"));
    }
}
