use px_core::kernel::KernelSize;

use crate::float::FloatRaster;

/// Fixed taps for the small windows, used whenever sigma is derived from
/// the size. Each table sums to exactly 1 in binary floating point.
const SMALL_KERNELS: [&[f64]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25],
];

/// Standard deviation implied by a window of `n` taps.
///
/// # Example
/// ```
/// use px_filter::gaussian::sigma_for_size;
/// assert!((sigma_for_size(5) - 1.1).abs() < 1e-12);
/// ```
#[must_use]
pub fn sigma_for_size(n: u32) -> f64 {
    0.3 * ((f64::from(n) - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1D Gaussian taps for an odd window of `n`.
///
/// Windows of 1, 3, 5 and 7 use fixed tables; wider windows sample the
/// Gaussian at [`sigma_for_size`] and normalize.
///
/// # Example
/// ```
/// use px_filter::gaussian::gaussian_kernel_1d;
/// assert_eq!(gaussian_kernel_1d(5), vec![0.0625, 0.25, 0.375, 0.25, 0.0625]);
/// let wide = gaussian_kernel_1d(9);
/// assert!((wide.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn gaussian_kernel_1d(n: u32) -> Vec<f64> {
    debug_assert!(n % 2 == 1, "kernel size must be odd");
    if n <= 7 {
        return SMALL_KERNELS[(n / 2) as usize].to_vec();
    }

    let sigma = sigma_for_size(n);
    let scale = -0.5 / (sigma * sigma);
    let center = f64::from(n - 1) * 0.5;
    let mut taps: Vec<f64> = (0..n)
        .map(|i| {
            let x = f64::from(i) - center;
            (scale * x * x).exp()
        })
        .collect();

    let sum: f64 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Reflect an out-of-range coordinate back into `0..len` without repeating
/// the edge sample (`gfedcb|abcdefgh|gfedcba`).
///
/// # Example
/// ```
/// use px_filter::gaussian::reflect_101;
/// assert_eq!(reflect_101(-1, 8), 1);
/// assert_eq!(reflect_101(-2, 8), 2);
/// assert_eq!(reflect_101(8, 8), 6);
/// assert_eq!(reflect_101(3, 8), 3);
/// ```
#[must_use]
pub fn reflect_101(mut i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let len = len as isize;
    // Loop covers windows wider than the image.
    while i < 0 || i >= len {
        if i < 0 {
            i = -i;
        } else {
            i = 2 * (len - 1) - i;
        }
    }
    i as usize
}

/// Separable Gaussian blur, horizontal pass then vertical pass.
///
/// Each channel is filtered independently; borders use [`reflect_101`].
///
/// # Example
/// ```
/// use px_core::kernel::KernelSize;
/// use px_filter::float::FloatRaster;
/// use px_filter::gaussian::gaussian_blur;
///
/// let mut img = FloatRaster::zeros(5, 5, 1);
/// img.data.iter_mut().for_each(|v| *v = 42.0);
/// let out = gaussian_blur(&img, KernelSize::DEFAULT);
/// assert!(out.data.iter().all(|&v| v == 42.0));
/// ```
#[must_use]
pub fn gaussian_blur(src: &FloatRaster, kernel: KernelSize) -> FloatRaster {
    let kx = gaussian_kernel_1d(kernel.width());
    let ky = gaussian_kernel_1d(kernel.height());
    log::debug!(
        "desfoque gaussiano {kernel} (sigma x={:.3}, y={:.3})",
        sigma_for_size(kernel.width()),
        sigma_for_size(kernel.height())
    );

    let (w, h) = (src.width as usize, src.height as usize);
    let channels = usize::from(src.channels);
    if w == 0 || h == 0 {
        return src.clone();
    }

    let half_x = (kx.len() / 2) as isize;
    let mut tmp = FloatRaster::zeros(src.width, src.height, src.channels);
    for y in 0..h {
        for x in 0..w {
            for c in 0..channels {
                let mut acc = 0.0;
                for (i, &t) in kx.iter().enumerate() {
                    let sx = reflect_101(x as isize + i as isize - half_x, w);
                    acc += src.data[src.index(sx, y, c)] * t;
                }
                let idx = tmp.index(x, y, c);
                tmp.data[idx] = acc;
            }
        }
    }

    let half_y = (ky.len() / 2) as isize;
    let mut out = FloatRaster::zeros(src.width, src.height, src.channels);
    for y in 0..h {
        for x in 0..w {
            for c in 0..channels {
                let mut acc = 0.0;
                for (i, &t) in ky.iter().enumerate() {
                    let sy = reflect_101(y as isize + i as isize - half_y, h);
                    acc += tmp.data[tmp.index(x, sy, c)] * t;
                }
                let idx = out.index(x, y, c);
                out.data[idx] = acc;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_tables_sum_to_one() {
        for n in [1, 3, 5, 7] {
            let k = gaussian_kernel_1d(n);
            assert_eq!(k.len(), n as usize);
            assert_eq!(k.iter().sum::<f64>(), 1.0, "size {n}");
        }
    }

    #[test]
    fn wide_kernel_is_symmetric_and_peaked() {
        let k = gaussian_kernel_1d(11);
        assert_eq!(k.len(), 11);
        assert!(k.iter().zip(k.iter().rev()).all(|(a, b)| (a - b).abs() < 1e-15));
        assert!(k[..6].windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn reflect_handles_tiny_images() {
        assert_eq!(reflect_101(-2, 1), 0);
        assert_eq!(reflect_101(5, 1), 0);
        // len 2: ...1 0 | 0 1 | 0 1...
        assert_eq!(reflect_101(-1, 2), 1);
        assert_eq!(reflect_101(2, 2), 0);
        assert_eq!(reflect_101(-3, 2), 1);
    }

    #[test]
    fn blur_spreads_an_impulse_by_the_table() {
        let mut img = FloatRaster::zeros(9, 1, 1);
        img.data[4] = 16.0;
        let out = gaussian_blur(&img, KernelSize::new(5, 1).unwrap());
        assert_eq!(out.data, vec![0.0, 0.0, 1.0, 4.0, 6.0, 4.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn blur_reflects_at_the_border() {
        // 1D row [a b c] with a 3-tap window: left edge = .25*b + .5*a + .25*b
        let mut img = FloatRaster::zeros(3, 1, 1);
        img.data = vec![0.0, 8.0, 0.0];
        let out = gaussian_blur(&img, KernelSize::new(3, 1).unwrap());
        assert_eq!(out.data, vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn channels_do_not_mix() {
        let mut img = FloatRaster::zeros(4, 4, 3);
        for px in img.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[10.0, 20.0, 30.0]);
        }
        let out = gaussian_blur(&img, KernelSize::DEFAULT);
        for px in out.data.chunks_exact(3) {
            assert_eq!(px, &[10.0, 20.0, 30.0]);
        }
    }
}
