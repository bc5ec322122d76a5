use px_core::kernel::KernelSize;
use px_core::raster::Raster;
use px_core::traits::Filter;

use crate::float::FloatRaster;
use crate::gaussian::gaussian_blur;

/// High-frequency residual: `original - blur(original)`.
///
/// # Example
/// ```
/// use px_core::{KernelSize, Raster};
/// use px_filter::highboost::unsharp_mask;
/// let mask = unsharp_mask(&Raster::filled(6, 6, 1, 90), KernelSize::DEFAULT);
/// assert!(mask.data.iter().all(|&m| m == 0.0));
/// ```
#[must_use]
pub fn unsharp_mask(image: &Raster, kernel: KernelSize) -> FloatRaster {
    let original = FloatRaster::from_raster(image);
    let blurred = gaussian_blur(&original, kernel);
    let mut mask = original;
    for (m, b) in mask.data.iter_mut().zip(&blurred.data) {
        *m -= b;
    }
    mask
}

/// Boosted samples before saturation: `original + k * mask`.
///
/// Exposed so callers can inspect values that the final clamp would hide.
#[must_use]
pub fn boosted_samples(image: &Raster, k: f64, kernel: KernelSize) -> FloatRaster {
    let mut out = unsharp_mask(image, kernel);
    for (m, &o) in out.data.iter_mut().zip(&image.data) {
        *m = f64::from(o) + k * *m;
    }
    out
}

/// Sharpen `image` by high-boost filtering.
///
/// Promotes to `f64`, blurs with a Gaussian of `kernel` size, adds `k`
/// times the residual back, clamps to [0, 255] and truncates to `u8`.
/// Works on any channel count; each channel is filtered on its own.
///
/// # Example
/// ```
/// use px_core::{KernelSize, Raster};
/// use px_filter::high_boost_filter;
/// let flat = Raster::filled(50, 50, 1, 128);
/// assert_eq!(high_boost_filter(&flat, 3.5, KernelSize::DEFAULT), flat);
/// ```
#[must_use]
pub fn high_boost_filter(image: &Raster, k: f64, kernel: KernelSize) -> Raster {
    log::debug!(
        "high-boost k={k} kernel={kernel} sobre {}×{}×{}",
        image.width,
        image.height,
        image.channels
    );
    boosted_samples(image, k, kernel).to_raster()
}

/// [`high_boost_filter`] with the 5×5 window.
#[must_use]
pub fn high_boost_filter_default(image: &Raster, k: f64) -> Raster {
    high_boost_filter(image, k, KernelSize::DEFAULT)
}

/// Filtro high-boost com parâmetros fixos.
///
/// # Example
/// ```
/// use px_core::{Filter, Raster};
/// use px_filter::HighBoost;
/// let filter = HighBoost::new(1.5);
/// let img = Raster::filled(8, 8, 1, 10);
/// assert_eq!(filter.apply(&img), img);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighBoost {
    /// Boost factor applied to the residual.
    pub k: f64,
    /// Blur window.
    pub kernel: KernelSize,
}

impl HighBoost {
    /// High-boost with the 5×5 window.
    #[must_use]
    pub fn new(k: f64) -> Self {
        Self {
            k,
            kernel: KernelSize::DEFAULT,
        }
    }

    /// Same filter with another blur window.
    #[must_use]
    pub fn with_kernel(mut self, kernel: KernelSize) -> Self {
        self.kernel = kernel;
        self
    }
}

impl Filter for HighBoost {
    fn apply(&self, input: &Raster) -> Raster {
        high_boost_filter(input, self.k, self.kernel)
    }

    fn name(&self) -> &'static str {
        "high-boost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic 24×24 test pattern with hard edges and a gradient.
    fn pattern() -> Raster {
        let mut img = Raster::new(24, 24, 1);
        for y in 0..24 {
            for x in 0..24 {
                let v = if (x / 6 + y / 6) % 2 == 0 { 40 } else { 210 };
                img.set_sample(x, y, 0, (v + x) as u8);
            }
        }
        img
    }

    #[test]
    fn k_zero_is_identity() {
        let img = pattern();
        assert_eq!(high_boost_filter_default(&img, 0.0), img);
    }

    #[test]
    fn uniform_image_is_unchanged_for_any_k() {
        let flat = Raster::filled(50, 50, 1, 128);
        for k in [-10.0, -1.0, 0.5, 1.0, 2.0, 100.0, 1e9] {
            assert_eq!(high_boost_filter_default(&flat, k), flat, "k={k}");
        }
    }

    #[test]
    fn output_keeps_shape() {
        let img = pattern();
        let out = high_boost_filter(&img, 2.0, KernelSize::new(7, 3).unwrap());
        assert_eq!(out.dimensions(), img.dimensions());
        assert_eq!(out.channels, 1);
        assert_eq!(out.len(), img.len());
    }

    #[test]
    fn huge_k_saturates_edges() {
        let img = pattern();
        let out = high_boost_filter_default(&img, 1e6);
        let mask = unsharp_mask(&img, KernelSize::DEFAULT);
        for (o, m) in out.data.iter().zip(&mask.data) {
            if *m > 1e-3 {
                assert_eq!(*o, 255);
            } else if *m < -1e-3 {
                assert_eq!(*o, 0);
            }
        }
        assert!(out.data.contains(&0) && out.data.contains(&255));
    }

    #[test]
    fn pre_clamp_value_grows_with_k_where_mask_is_positive() {
        let img = pattern();
        let mask = unsharp_mask(&img, KernelSize::DEFAULT);
        let lo = boosted_samples(&img, 0.5, KernelSize::DEFAULT);
        let hi = boosted_samples(&img, 3.0, KernelSize::DEFAULT);
        let mut checked = 0;
        for ((m, a), b) in mask.data.iter().zip(&lo.data).zip(&hi.data) {
            if *m > 0.0 {
                assert!(b >= a);
                checked += 1;
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn sharpening_increases_edge_contrast() {
        // Step edge: 50 | 200
        let mut img = Raster::filled(10, 1, 1, 50);
        for x in 5..10 {
            img.set_sample(x, 0, 0, 200);
        }
        let out = high_boost_filter(&img, 1.0, KernelSize::new(5, 1).unwrap());
        // blur(4) = 96.875, blur(5) = 153.125
        assert_eq!(out.sample(4, 0, 0), 3);
        assert_eq!(out.sample(5, 0, 0), 246);
        assert_eq!(out.sample(0, 0, 0), 50);
        assert_eq!(out.sample(9, 0, 0), 200);
    }

    #[test]
    fn rgb_rasters_are_filtered_per_channel() {
        let mut img = Raster::new(12, 12, 3);
        for y in 0..12 {
            for x in 0..12 {
                img.set_sample(x, y, 0, if x < 6 { 20 } else { 220 });
                img.set_sample(x, y, 1, 77);
            }
        }
        let out = HighBoost::new(2.0).apply(&img);
        assert_eq!(out.channels, 3);
        assert!(out.channel(1).all(|g| g == 77));
        assert!(out.channel(2).all(|b| b == 0));
        assert!(out.channel(0).any(|r| r == 255));
    }
}
