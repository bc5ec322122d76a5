use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use px_core::raster::Raster;

/// Glyph whose lower half takes the foreground color.
pub const HALF_BLOCK: char = '▄';

/// Raster downsampled to terminal cells, two pixels per cell.
///
/// The top pixel of each cell becomes the background color and the bottom
/// pixel the foreground of [`HALF_BLOCK`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfBlockGrid {
    /// `(top, bottom)` RGB pairs, row-major.
    pub cells: Vec<((u8, u8, u8), (u8, u8, u8))>,
    /// Width in terminal columns.
    pub cols: u16,
    /// Height in terminal rows.
    pub rows: u16,
}

/// First three samples as RGB, or luma replicated for grayscale.
fn rgb_at(raster: &Raster, x: u32, y: u32) -> (u8, u8, u8) {
    match raster.pixel(x, y) {
        [v] => (*v, *v, *v),
        [r, g, b, ..] => (*r, *g, *b),
        _ => (0, 0, 0),
    }
}

impl HalfBlockGrid {
    /// Nearest-neighbour sampling of `raster` into at most `max_cols`
    /// columns, keeping the pixel aspect ratio square.
    ///
    /// # Example
    /// ```
    /// use px_core::raster::Raster;
    /// use px_render::HalfBlockGrid;
    /// let grid = HalfBlockGrid::sample(&Raster::new(256, 256, 3), 64);
    /// assert_eq!((grid.cols, grid.rows), (64, 32));
    /// ```
    #[must_use]
    pub fn sample(raster: &Raster, max_cols: u16) -> Self {
        let (w, h) = raster.dimensions();
        if w == 0 || h == 0 || max_cols == 0 {
            return Self {
                cells: Vec::new(),
                cols: 0,
                rows: 0,
            };
        }

        let cols = w.min(u32::from(max_cols));
        let pixel_h = (u64::from(h) * u64::from(cols) / u64::from(w)).max(1) as u32;
        let rows = pixel_h.div_ceil(2);

        let mut cells = Vec::with_capacity((cols * rows) as usize);
        for cy in 0..rows {
            for cx in 0..cols {
                let px = (u64::from(cx) * u64::from(w) / u64::from(cols)) as u32;
                let py_top = (u64::from(cy * 2) * u64::from(h) / u64::from(pixel_h)) as u32;
                let py_bot = (u64::from(cy * 2 + 1) * u64::from(h) / u64::from(pixel_h)) as u32;

                let px = px.min(w - 1);
                let py_top = py_top.min(h - 1);
                let py_bot = py_bot.min(h - 1);

                cells.push((rgb_at(raster, px, py_top), rgb_at(raster, px, py_bot)));
            }
        }

        Self {
            cells,
            cols: cols as u16,
            rows: rows as u16,
        }
    }
}

/// Escreve um título e depois o raster em meio-blocos truecolor.
///
/// # Errors
/// Propagates write errors from `out`.
///
/// # Example
/// ```
/// use px_core::raster::Raster;
/// use px_render::render_preview;
/// let mut out = Vec::new();
/// render_preview(&mut out, &Raster::new(4, 4, 1), "teste", 64).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("teste"));
/// ```
pub fn render_preview<W: Write>(out: &mut W, raster: &Raster, title: &str, max_cols: u16) -> io::Result<()> {
    let grid = HalfBlockGrid::sample(raster, max_cols);
    log::debug!("pré-visualização {}×{} células", grid.cols, grid.rows);

    queue!(out, Print(title), Print('\n'))?;
    if grid.cols == 0 {
        return out.flush();
    }

    for row in grid.cells.chunks_exact(usize::from(grid.cols)) {
        for &((tr, tg, tb), (br, bg, bb)) in row {
            queue!(
                out,
                SetBackgroundColor(Color::Rgb { r: tr, g: tg, b: tb }),
                SetForegroundColor(Color::Rgb { r: br, g: bg, b: bb }),
                Print(HALF_BLOCK)
            )?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_not_upscaled() {
        let grid = HalfBlockGrid::sample(&Raster::new(10, 6, 3), 64);
        assert_eq!((grid.cols, grid.rows), (10, 3));
        assert_eq!(grid.cells.len(), 30);
    }

    #[test]
    fn odd_height_rounds_up() {
        let grid = HalfBlockGrid::sample(&Raster::new(4, 5, 1), 64);
        assert_eq!(grid.rows, 3);
    }

    #[test]
    fn top_and_bottom_pixels_map_to_cell_halves() {
        let mut r = Raster::new(1, 2, 3);
        r.set_sample(0, 0, 0, 255);
        r.set_sample(0, 1, 2, 255);
        let grid = HalfBlockGrid::sample(&r, 8);
        assert_eq!(grid.cells, vec![((255, 0, 0), (0, 0, 255))]);
    }

    #[test]
    fn grayscale_is_replicated() {
        let grid = HalfBlockGrid::sample(&Raster::filled(2, 2, 1, 9), 8);
        assert!(grid.cells.iter().all(|&c| c == ((9, 9, 9), (9, 9, 9))));
    }

    #[test]
    fn render_emits_one_glyph_per_cell() {
        let mut out = Vec::new();
        render_preview(&mut out, &Raster::new(16, 16, 3), "Face 1", 8).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(HALF_BLOCK).count(), 8 * 4);
        assert_eq!(text.matches('\n').count(), 1 + 4);
    }

    #[test]
    fn empty_raster_prints_title_only() {
        let mut out = Vec::new();
        render_preview(&mut out, &Raster::new(0, 0, 3), "vazio", 8).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "vazio\n");
    }
}
