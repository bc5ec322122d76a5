/// Shared types for pixcube: raster buffers, kernel sizes, errors and
/// the TOML configuration read by both tools.

pub mod config;
pub mod error;
pub mod kernel;
pub mod raster;
pub mod traits;

pub use config::ToolConfig;
pub use error::CoreError;
pub use kernel::KernelSize;
pub use raster::Raster;
pub use traits::{Filter, Generator};
