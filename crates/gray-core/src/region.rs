//! Rectangular image regions.
//!
//! [`Region`] names a block of samples by its top-left corner and extent,
//! using the same (row, col) convention as [`crate::GrayImage`]:
//!
//! ```text
//! (0,0) ────────► col
//!   │
//!   │   ┌──────────┐
//!   │   │  Region  │ height rows
//!   │   └──────────┘
//!   ▼     width cols
//!  row
//! ```
//!
//! Edges are saturating: a region whose far edge would overflow `u32` is
//! treated as reaching `u32::MAX`, which is always outside any image.
//!
//! # Usage
//!
//! ```rust
//! use gray_core::Region;
//!
//! let region = Region::new(10, 20, 50, 100);
//! assert!(region.contains(15, 25));
//! assert!(!region.contains(5, 25));
//!
//! // Part of the region that lies inside a 40x40 image
//! let clamped = region.clamp_to(40, 40).unwrap();
//! assert_eq!(clamped, Region::new(10, 20, 30, 20));
//! ```

/// A rectangle of samples: top row, left column, height (rows) and width (cols).
///
/// A region with zero height or width is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Top row (inclusive)
    pub row: u32,
    /// Left column (inclusive)
    pub col: u32,
    /// Height in rows
    pub height: u32,
    /// Width in columns
    pub width: u32,
}

impl Region {
    /// Creates a region from its top-left corner and extent.
    #[inline]
    pub const fn new(row: u32, col: u32, height: u32, width: u32) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// Creates a region anchored at (0, 0) covering `rows x cols`.
    #[inline]
    pub const fn from_size(rows: u32, cols: u32) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// First row past the region (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.row.saturating_add(self.height)
    }

    /// First column past the region (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.col.saturating_add(self.width)
    }

    /// Number of samples covered by the region.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.height as u64 * self.width as u64
    }

    /// Returns `true` if the region covers no samples.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Returns `true` if (row, col) is inside the region.
    ///
    /// ```rust
    /// use gray_core::Region;
    ///
    /// let r = Region::new(10, 10, 100, 100);
    /// assert!(r.contains(10, 10));
    /// assert!(r.contains(109, 109));
    /// assert!(!r.contains(110, 110));
    /// ```
    #[inline]
    pub const fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.row && row < self.bottom() && col >= self.col && col < self.right()
    }

    /// Returns `true` if `other` lies entirely inside this region.
    #[inline]
    pub const fn contains_region(&self, other: &Region) -> bool {
        other.row >= self.row
            && other.col >= self.col
            && other.bottom() <= self.bottom()
            && other.right() <= self.right()
    }

    /// Returns the overlap of two regions, or `None` if they do not overlap.
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let row = self.row.max(other.row);
        let col = self.col.max(other.col);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());

        if row < bottom && col < right {
            Some(Region::new(row, col, bottom - row, right - col))
        } else {
            None
        }
    }

    /// Clamps this region to an image of `rows x cols`.
    ///
    /// Returns `None` when nothing of the region lies inside the image.
    #[inline]
    pub fn clamp_to(&self, rows: u32, cols: u32) -> Option<Region> {
        self.intersect(&Region::from_size(rows, cols))
    }

    /// Iterates over all (row, col) coordinates, row by row.
    ///
    /// ```rust
    /// use gray_core::Region;
    ///
    /// let coords: Vec<_> = Region::new(0, 0, 2, 2).iter_coords().collect();
    /// assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    /// ```
    pub fn iter_coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.row..self.bottom()).flat_map(move |r| (self.col..self.right()).map(move |c| (r, c)))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Region({}, {}, {}x{})",
            self.row, self.col, self.height, self.width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_area() {
        let r = Region::new(10, 20, 50, 100);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.right(), 120);
        assert_eq!(r.area(), 5000);
        assert!(!r.is_empty());
        assert!(Region::new(3, 3, 0, 5).is_empty());
    }

    #[test]
    fn test_saturating_edges() {
        let r = Region::new(u32::MAX - 1, 0, 10, 1);
        assert_eq!(r.bottom(), u32::MAX);
        assert!(r.clamp_to(100, 100).is_none());
    }

    #[test]
    fn test_intersect() {
        let a = Region::new(0, 0, 100, 100);
        let b = Region::new(50, 50, 100, 100);
        assert_eq!(a.intersect(&b), Some(Region::new(50, 50, 50, 50)));

        let c = Region::new(200, 200, 10, 10);
        assert!(a.intersect(&c).is_none());
    }

    #[test]
    fn test_contains_region() {
        let outer = Region::from_size(8, 8);
        assert!(outer.contains_region(&Region::new(2, 2, 6, 6)));
        assert!(!outer.contains_region(&Region::new(2, 2, 7, 6)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Region::new(1, 2, 3, 4).to_string(), "Region(1, 2, 3x4)");
    }
}
