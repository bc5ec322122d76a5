use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use px_core::config::CubeConfig;
use px_source::generate_slice;
use px_source::image::{ensure_output_dir, save_png};
use px_source::naming::slice_file_name;

use crate::menu::{MenuSession, SliceRequest};

/// Run the `cubo-rgb` session until the exit word or end of input.
///
/// Returns the paths written, in request order.
///
/// # Errors
/// Returns an error if the output directory cannot be created, a slice
/// cannot be saved, or either stream fails.
pub fn run_cube<R: BufRead, W: Write>(config: &CubeConfig, input: R, output: W) -> Result<Vec<PathBuf>> {
    let mut session = MenuSession::new(input, output);
    let out = session.output_mut();
    writeln!(out, "=== GERADOR (FUNCIONAL) DE FATIAS DO CUBO RGB ===")?;

    if ensure_output_dir(&config.output_dir)? {
        writeln!(out, "Pasta '{}' criada para salvar as imagens.", config.output_dir.display())?;
    }

    let mut written = Vec::new();
    while let Some(request) = session.next_request()? {
        written.push(render_request(config, request, session.output_mut())?);
    }

    writeln!(session.output_mut(), "\nPrograma terminado. Até logo!")?;
    Ok(written)
}

/// Render, save and preview one slice.
///
/// # Errors
/// Returns an error if saving or writing to `out` fails.
pub fn render_request<W: Write>(config: &CubeConfig, request: SliceRequest, out: &mut W) -> Result<PathBuf> {
    let SliceRequest { face, slice } = request;
    writeln!(out, "\nGerando fatia da face {face} no índice {slice}...")?;

    let raster = generate_slice(face, i64::from(slice), config.resolution);
    let path = config.output_dir.join(slice_file_name(face, slice));
    save_png(&raster, &path)?;
    writeln!(out, "✅ Sucesso! Imagem salva em: {}", path.display())?;

    if config.preview {
        let title = format!("Face {face}: {}\nFatia no índice {slice}", face.name());
        px_render::render_preview(out, &raster, &title, config.preview_cols).context("pré-visualização")?;
    }
    Ok(path)
}
