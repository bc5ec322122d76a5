use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use px_core::raster::Raster;

/// Carrega uma imagem do disco em tons de cinza de 8 bits.
///
/// Any format enabled on the `image` dependency is accepted (PNG, JPEG,
/// BMP, GIF). 8-bit grayscale files are kept as stored; everything else is
/// reduced to RGB and weighted with [`bt601_luma`].
///
/// # Errors
/// Returns an error if the file is missing, unreadable or not an image.
///
/// # Example
/// ```no_run
/// use px_source::image::load_grayscale;
/// use std::path::Path;
/// let img = load_grayscale(Path::new("lena.png")).unwrap();
/// assert_eq!(img.channels, 1);
/// ```
pub fn load_grayscale(path: &Path) -> Result<Raster> {
    let img = image::open(path)
        .with_context(|| format!("Não foi possível carregar a imagem do caminho: {}", path.display()))?;
    let (width, height, data) = match img {
        DynamicImage::ImageLuma8(luma) => {
            let (w, h) = luma.dimensions();
            (w, h, luma.into_raw())
        }
        other => {
            let rgb = other.to_rgb8();
            let (w, h) = rgb.dimensions();
            let data = rgb.pixels().map(|p| bt601_luma(p.0)).collect();
            (w, h, data)
        }
    };
    log::debug!("{} carregada: {width}×{height}", path.display());
    Ok(Raster::from_raw(width, height, 1, data)?)
}

/// Fixed-point BT.601 luma with 14 fractional bits, rounded.
///
/// Weights sum to `1 << 14`, so gray pixels map to themselves.
///
/// # Example
/// ```
/// use px_source::image::bt601_luma;
/// assert_eq!(bt601_luma([255, 0, 0]), 76);
/// assert_eq!(bt601_luma([0, 255, 0]), 150);
/// assert_eq!(bt601_luma([0, 0, 255]), 29);
/// assert_eq!(bt601_luma([77, 77, 77]), 77);
/// ```
#[must_use]
pub fn bt601_luma([r, g, b]: [u8; 3]) -> u8 {
    let acc = u32::from(r) * 4899 + u32::from(g) * 9617 + u32::from(b) * 1868 + (1 << 13);
    (acc >> 14) as u8
}

/// Convert a raster into an `image` buffer of the matching color type.
///
/// # Errors
/// Returns an error if the sample buffer does not match the dimensions.
pub fn to_dynamic(raster: &Raster) -> Result<DynamicImage> {
    let (w, h) = raster.dimensions();
    let data = raster.data.clone();
    let img = match raster.channels {
        1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        n => anyhow::bail!("Número de canais não suportado: {n}"),
    };
    img.context("Buffer incoerente com as dimensões do raster")
}

/// Encode `raster` as PNG at `path`.
///
/// Samples are written in the raster's own order (L, RGB or RGBA), which
/// is already PNG's channel order.
///
/// # Errors
/// Returns an error if encoding or writing fails.
pub fn save_png(raster: &Raster, path: &Path) -> Result<()> {
    to_dynamic(raster)?
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Não foi possível salvar {}", path.display()))?;
    log::info!("{} gravada ({}×{}, {} canais)", path.display(), raster.width, raster.height, raster.channels);
    Ok(())
}

/// Create `dir` (and parents) unless it already exists.
///
/// Returns `true` when the directory was created by this call.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).with_context(|| format!("Não foi possível criar a pasta {}", dir.display()))?;
    Ok(true)
}
