//! Incremental per-channel mean

use crate::color::{HexColor, Rgb};

/// Running mean of the RGB samples in one block.
///
/// Each sample updates the means with `mean += (sample - mean) / count`,
/// which stays within the sample range at every step instead of growing an
/// unbounded sum. Alpha is ignored.
///
/// # Example
///
/// ```
/// use mosaic_core::reduce::BlockMean;
/// use mosaic_core::Rgb;
///
/// let mut mean = BlockMean::default();
/// mean.push(Rgb::new(0, 0, 0));
/// mean.push(Rgb::new(255, 100, 1));
///
/// assert_eq!(mean.count(), 2);
/// assert_eq!(mean.means(), [127.5, 50.0, 0.5]);
/// assert_eq!(mean.color(), Rgb::new(128, 50, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlockMean {
    r: f64,
    g: f64,
    b: f64,
    count: u64,
}

impl BlockMean {
    /// Fold one sample into the mean.
    #[inline]
    pub fn push(&mut self, sample: Rgb) {
        self.count += 1;
        let n = self.count as f64;
        self.r += (sample.r as f64 - self.r) / n;
        self.g += (sample.g as f64 - self.g) / n;
        self.b += (sample.b as f64 - self.b) / n;
    }

    /// Number of samples folded in so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Unrounded channel means `[r, g, b]`; all zero before the first sample.
    #[inline]
    pub fn means(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// The mean rounded half away from zero and clamped to 8 bits.
    #[inline]
    pub fn color(&self) -> Rgb {
        Rgb::from_means(self.r, self.g, self.b)
    }

    /// The rounded mean as a hex color.
    #[inline]
    pub fn hex(&self) -> HexColor {
        self.color().to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mean_is_black() {
        let mean = BlockMean::default();
        assert_eq!(mean.count(), 0);
        assert_eq!(mean.color(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_single_sample_is_exact() {
        let mut mean = BlockMean::default();
        mean.push(Rgb::new(17, 34, 51));
        assert_eq!(mean.means(), [17.0, 34.0, 51.0]);
        assert_eq!(mean.hex().to_string(), "#112233");
    }

    #[test]
    fn test_matches_arithmetic_mean() {
        let samples: Vec<Rgb> = (0..997u32)
            .map(|i| Rgb::new((i * 37 % 256) as u8, (i * 91 % 256) as u8, (i % 7 * 40) as u8))
            .collect();

        let mut mean = BlockMean::default();
        for &s in &samples {
            mean.push(s);
        }

        let n = samples.len() as f64;
        let expected = [
            samples.iter().map(|s| s.r as f64).sum::<f64>() / n,
            samples.iter().map(|s| s.g as f64).sum::<f64>() / n,
            samples.iter().map(|s| s.b as f64).sum::<f64>() / n,
        ];

        for (got, want) in mean.means().iter().zip(expected) {
            assert!(
                (got - want).abs() <= 1e-9 * want.abs().max(1.0),
                "running mean {got} drifted from {want}"
            );
        }
    }

    #[test]
    fn test_constant_samples_stay_exact() {
        let mut mean = BlockMean::default();
        for _ in 0..10_000 {
            mean.push(Rgb::new(255, 1, 128));
        }
        assert_eq!(mean.means(), [255.0, 1.0, 128.0]);
    }
}
