use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use px_core::config::BoostConfig;
use px_filter::high_boost_filter;
use px_source::image::{ensure_output_dir, load_grayscale, save_png};
use px_source::naming::boosted_file_name;

/// Sharpen `image` with boost factor `k` and save it under the configured
/// output directory. Progress messages go to `out`.
///
/// The directory is created before the input is read, so it exists even
/// when loading fails.
///
/// # Errors
/// Returns an error if `k` is not finite, the input cannot be decoded, or
/// the result cannot be written. Nothing is saved in those cases.
pub fn run_boost<W: Write>(config: &BoostConfig, image: &Path, k: f64, out: &mut W) -> Result<PathBuf> {
    if ensure_output_dir(&config.output_dir)? {
        writeln!(out, "Criando a pasta de resultados: '{}/'", config.output_dir.display())?;
    }
    if !k.is_finite() {
        anyhow::bail!("O fator k deve ser um número finito, recebido {k}");
    }

    let input = load_grayscale(image)?;

    writeln!(out, "Aplicando filtro High-Boost com k = {k:?} em '{}'...", image.display())?;
    let sharpened = high_boost_filter(&input, k, config.kernel());

    let path = config.output_dir.join(boosted_file_name(image, k));
    save_png(&sharpened, &path)?;
    writeln!(out, "✅ Sucesso! Imagem com nitidez realçada salva em: {}", path.display())?;
    Ok(path)
}
