//! Sample value remapping.
//!
//! - [`ContrastStretch`] - Three-segment piecewise-linear remap of `[0, 255]`
//! - [`adjust_contrast`] - Apply a stretch in place from its four thresholds
//! - [`invert`] - Photographic negative
//!
//! All operations run in place and allocate nothing beyond a 256-entry
//! lookup table.

use crate::{round_sample, OpsError, OpsResult};
use gray_core::{GrayImage, MAX_SAMPLE};
use tracing::debug;

/// Piecewise-linear contrast stretch.
///
/// `[0, in_low)` maps onto `[0, out_low)`, `[in_low, in_high]` onto
/// `[out_low, out_high]` and `(in_high, 255]` onto `(out_high, 255]`,
/// each segment linearly.
///
/// # Example
///
/// ```rust
/// use gray_ops::intensity::ContrastStretch;
///
/// let s = ContrastStretch::new(50, 150, 0, 200).unwrap();
/// assert_eq!(s.apply(100), 100);
/// assert_eq!(s.apply(25), 0);
/// assert_eq!(s.apply(200), 226);
/// assert_eq!((s.in_low(), s.in_high()), (50, 150));
/// ```
///
/// Thresholds are only set through [`ContrastStretch::new`], so every
/// stretch in existence has strictly increasing pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastStretch {
    in_low: u8,
    in_high: u8,
    out_low: u8,
    out_high: u8,
}

impl Default for ContrastStretch {
    fn default() -> Self {
        Self::identity()
    }
}

impl ContrastStretch {
    /// Creates a stretch, checking that both threshold pairs are strictly
    /// increasing.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `in_low >= in_high` or
    /// `out_low >= out_high`.
    pub fn new(in_low: u8, in_high: u8, out_low: u8, out_high: u8) -> OpsResult<Self> {
        if in_low >= in_high {
            return Err(OpsError::InvalidParameter(format!(
                "input thresholds must increase: {in_low} >= {in_high}"
            )));
        }
        if out_low >= out_high {
            return Err(OpsError::InvalidParameter(format!(
                "output thresholds must increase: {out_low} >= {out_high}"
            )));
        }
        Ok(Self { in_low, in_high, out_low, out_high })
    }

    /// Lower input threshold.
    #[inline]
    pub const fn in_low(&self) -> u8 {
        self.in_low
    }

    /// Upper input threshold.
    #[inline]
    pub const fn in_high(&self) -> u8 {
        self.in_high
    }

    /// Output value for the lower input threshold.
    #[inline]
    pub const fn out_low(&self) -> u8 {
        self.out_low
    }

    /// Output value for the upper input threshold.
    #[inline]
    pub const fn out_high(&self) -> u8 {
        self.out_high
    }

    /// The stretch that maps every sample to itself.
    pub const fn identity() -> Self {
        Self { in_low: 0, in_high: MAX_SAMPLE, out_low: 0, out_high: MAX_SAMPLE }
    }

    /// Check if this stretch leaves every sample unchanged.
    pub fn is_identity(&self) -> bool {
        (0..=MAX_SAMPLE).all(|z| self.apply(z) == z)
    }

    /// Slopes of the lower, middle and upper segments.
    ///
    /// A segment of zero width (`in_low == 0` or `in_high == 255`) has no
    /// samples and reports a slope of 0.
    pub fn slopes(&self) -> (f64, f64, f64) {
        let (i1, i2) = (f64::from(self.in_low), f64::from(self.in_high));
        let (o1, o2) = (f64::from(self.out_low), f64::from(self.out_high));
        let max = f64::from(MAX_SAMPLE);

        let s1 = if self.in_low == 0 { 0.0 } else { o1 / i1 };
        let s2 = (o2 - o1) / (i2 - i1);
        let s3 = if self.in_high == MAX_SAMPLE { 0.0 } else { (max - o2) / (max - i2) };
        (s1, s2, s3)
    }

    /// Maps a single sample.
    pub fn apply(&self, z: u8) -> u8 {
        let (s1, s2, s3) = self.slopes();
        let zf = f64::from(z);
        if z < self.in_low {
            round_sample(s1 * zf)
        } else if z > self.in_high {
            round_sample(f64::from(self.out_high) + s3 * (zf - f64::from(self.in_high)))
        } else {
            round_sample(f64::from(self.out_low) + s2 * (zf - f64::from(self.in_low)))
        }
    }

    /// Lookup table with the mapped value of every sample.
    pub fn lut(&self) -> [u8; 256] {
        let mut table = [0u8; 256];
        for (z, slot) in (0..=MAX_SAMPLE).zip(table.iter_mut()) {
            *slot = self.apply(z);
        }
        table
    }
}

/// Remaps every sample through a [`ContrastStretch`].
///
/// Cannot fail: a stretch only exists with validated thresholds.
pub fn apply_stretch(image: &mut GrayImage, stretch: &ContrastStretch) {
    if stretch.is_identity() {
        debug!("identity stretch, skipping");
        return;
    }
    let table = stretch.lut();
    image.map_pixels(|z| table[usize::from(z)]);
    debug!(?stretch, size = image.size(), "applied contrast stretch");
}

/// Stretches contrast in place.
///
/// Samples in `[in1, in2]` are spread linearly over `[out1, out2]`; the
/// segments below and above are scaled to fill what remains of `[0, 255]`.
/// Results are rounded half away from zero.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for equal or crossed thresholds.
/// The image is untouched in that case.
///
/// # Example
///
/// ```rust
/// use gray_core::GrayImage;
/// use gray_ops::intensity::adjust_contrast;
///
/// let mut img = GrayImage::filled(2, 2, 75);
/// adjust_contrast(&mut img, 50, 150, 0, 200).unwrap();
/// assert!(img.data().iter().all(|&v| v == 50));
/// ```
pub fn adjust_contrast(image: &mut GrayImage, in1: u8, in2: u8, out1: u8, out2: u8) -> OpsResult<()> {
    let stretch = ContrastStretch::new(in1, in2, out1, out2)?;
    apply_stretch(image, &stretch);
    Ok(())
}

/// Replaces every sample `z` with `255 - z`.
pub fn invert(image: &mut GrayImage) {
    image.map_pixels(|z| MAX_SAMPLE - z);
    debug!(size = image.size(), "inverted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp() -> GrayImage {
        GrayImage::from_data(16, 16, (0..=255).collect()).unwrap()
    }

    #[test]
    fn test_identity_stretch() {
        let mut img = GrayImage::filled(3, 3, 100);
        adjust_contrast(&mut img, 0, 255, 0, 255).unwrap();
        assert!(img.data().iter().all(|&v| v == 100));

        let mut img = ramp();
        adjust_contrast(&mut img, 0, 255, 0, 255).unwrap();
        assert_eq!(img, ramp());
        assert!(ContrastStretch::identity().is_identity());
    }

    #[test]
    fn test_slopes() {
        let s = ContrastStretch::new(50, 150, 20, 220).unwrap();
        let (s1, s2, s3) = s.slopes();
        assert_relative_eq!(s1, 0.4);
        assert_relative_eq!(s2, 2.0);
        assert_relative_eq!(s3, 35.0 / 105.0);

        let (s1, s2, s3) = ContrastStretch::identity().slopes();
        assert_relative_eq!(s1, 0.0);
        assert_relative_eq!(s2, 1.0);
        assert_relative_eq!(s3, 0.0);
    }

    #[test]
    fn test_three_segments() {
        let s = ContrastStretch::new(50, 150, 0, 200).unwrap();
        assert_eq!(s.apply(0), 0);
        assert_eq!(s.apply(49), 0);
        assert_eq!(s.apply(50), 0);
        assert_eq!(s.apply(100), 100);
        assert_eq!(s.apply(150), 200);
        // 200 + 55 / 105 = 200.52
        assert_eq!(s.apply(151), 201);
        assert_eq!(s.apply(255), 255);
    }

    #[test]
    fn test_inexact_slope_rounds_down() {
        // 255 / 100 is 2.5499999999999998 in f64, so 50 steps give 127.49...
        let s = ContrastStretch::new(50, 150, 0, 255).unwrap();
        assert_eq!(s.apply(100), 127);
    }

    #[test]
    fn test_exact_half_rounds_away_from_zero() {
        // slope 0.5: 2 -> 0.5 -> 1
        let s = ContrastStretch::new(1, 3, 0, 1).unwrap();
        assert_eq!(s.apply(2), 1);
        assert_eq!(s.apply(1), 0);
        assert_eq!(s.apply(3), 1);
    }

    #[test]
    fn test_accessors_report_validated_thresholds() {
        let s = ContrastStretch::new(10, 20, 30, 40).unwrap();
        assert_eq!((s.in_low(), s.in_high(), s.out_low(), s.out_high()), (10, 20, 30, 40));
        assert_eq!(ContrastStretch::default(), ContrastStretch::identity());

        let mut img = GrayImage::from_data(1, 4, vec![50, 120, 150, 230]).unwrap();
        assert!(ContrastStretch::new(200, 100, 0, 255).is_err());
        assert!(ContrastStretch::new(100, 100, 0, 255).is_err());
        assert!(adjust_contrast(&mut img, 200, 100, 0, 255).is_err());
        assert_eq!(img.data(), &[50, 120, 150, 230]);
    }

    #[test]
    fn test_lower_and_upper_segments_scale() {
        let s = ContrastStretch::new(100, 200, 50, 150).unwrap();
        // 0.5 * 40
        assert_eq!(s.apply(40), 20);
        // 150 + (105 / 55) * 55
        assert_eq!(s.apply(255), 255);
        // 150 + 1.909 * 10 = 169.09
        assert_eq!(s.apply(210), 169);
    }

    #[test]
    fn test_output_is_monotonic() {
        let table = ContrastStretch::new(30, 90, 10, 240).unwrap().lut();
        assert!(table.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_crossed_thresholds_leave_image_untouched() {
        let mut img = ramp();
        for (a, b, c, d) in [(150, 50, 0, 255), (50, 50, 0, 255), (0, 255, 200, 100), (0, 255, 7, 7)] {
            let err = adjust_contrast(&mut img, a, b, c, d).unwrap_err();
            assert!(matches!(err, OpsError::InvalidParameter(_)));
        }
        assert_eq!(img, ramp());
    }

    #[test]
    fn test_invert() {
        let mut img = GrayImage::from_data(1, 3, vec![0, 100, 255]).unwrap();
        invert(&mut img);
        assert_eq!(img.data(), &[255, 155, 0]);
        invert(&mut img);
        assert_eq!(img.data(), &[0, 100, 255]);
    }

    #[test]
    fn test_empty_image() {
        let mut img = GrayImage::new();
        adjust_contrast(&mut img, 10, 20, 30, 40).unwrap();
        invert(&mut img);
        assert!(img.is_empty());
    }
}
