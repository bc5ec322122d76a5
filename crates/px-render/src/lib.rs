/// Terminal output for pixcube: truecolor half-block previews of rasters.

pub mod preview;

pub use preview::{HalfBlockGrid, render_preview};
