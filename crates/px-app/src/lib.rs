/// Front-ends for the two tools: `cubo-rgb` (interactive RGB cube slicer)
/// and `highboost` (one-shot sharpening filter).

pub mod boost;
pub mod cli;
pub mod cube;
pub mod menu;

use std::path::Path;

use anyhow::Result;
use px_core::config::{ToolConfig, load_config};

/// Load `path`, or fall back to the built-in defaults when it is absent.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn resolve_config(path: &Path) -> Result<ToolConfig> {
    if path.exists() {
        load_config(path)
    } else {
        log::warn!("Config não encontrada: {}. Usando os padrões.", path.display());
        Ok(ToolConfig::default())
    }
}

/// Install the `env_logger` backend at `level` (falls back to `warn`).
pub fn init_logging(level: &str) {
    env_logger::Builder::new()
        .filter_level(level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();
}
