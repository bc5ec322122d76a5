/// Raster sources and sinks for pixcube: image files on disk, output
/// file naming, and the procedural RGB cube slices.

pub mod image;
pub mod naming;
pub mod procedural;

pub use procedural::cube::{Face, generate_slice};
