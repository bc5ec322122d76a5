use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::kernel::KernelSize;

/// Configuração das duas ferramentas, lida de um arquivo TOML.
///
/// Every field has a default matching the historical behaviour of the
/// tools, so an absent or partial file is fine.
///
/// # Example
/// ```
/// use px_core::config::ToolConfig;
/// let config = ToolConfig::default();
/// assert_eq!(config.cube.resolution, 256);
/// assert_eq!(config.boost.output_dir.to_str(), Some("resultados_highboost"));
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ToolConfig {
    /// Cube slice generator settings.
    pub cube: CubeConfig,
    /// High-boost filter settings.
    pub boost: BoostConfig,
}

/// Settings for the `cubo-rgb` generator.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CubeConfig {
    /// Directory receiving `faceF_fatiaSSS.png` files.
    pub output_dir: PathBuf,
    /// Side length of each generated slice, in pixels [1, 4096].
    pub resolution: u32,
    /// Print a terminal preview after each render.
    pub preview: bool,
    /// Maximum preview width in terminal columns [8, 256].
    pub preview_cols: u16,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("figuras_rgb"),
            resolution: 256,
            preview: true,
            preview_cols: 64,
        }
    }
}

/// Settings for the `highboost` filter.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BoostConfig {
    /// Directory receiving `{stem}_k{k}.png` files.
    pub output_dir: PathBuf,
    /// Blur window width, odd, [1, 31].
    pub kernel_width: u32,
    /// Blur window height, odd, [1, 31].
    pub kernel_height: u32,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("resultados_highboost"),
            kernel_width: 5,
            kernel_height: 5,
        }
    }
}

impl BoostConfig {
    /// Blur window described by this config.
    ///
    /// Falls back to 5×5 if the dimensions were never clamped.
    #[must_use]
    pub fn kernel(&self) -> KernelSize {
        KernelSize::new(self.kernel_width, self.kernel_height).unwrap_or_default()
    }
}

/// Bring a kernel dimension into [1, 31] and round even values up.
fn odd_dimension(v: u32) -> u32 {
    let v = v.clamp(1, 31);
    if v % 2 == 0 { v + 1 } else { v }
}

impl ToolConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.cube.resolution = self.cube.resolution.clamp(1, 4096);
        self.cube.preview_cols = self.cube.preview_cols.clamp(8, 256);
        self.boost.kernel_width = odd_dimension(self.boost.kernel_width);
        self.boost.kernel_height = odd_dimension(self.boost.kernel_height);
    }
}

/// Estrutura TOML intermediária para desserialização com valores opcionais.
#[derive(Deserialize)]
struct ConfigFile {
    cube: Option<CubeSection>,
    boost: Option<BoostSection>,
}

/// Cube section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct CubeSection {
    output_dir: Option<PathBuf>,
    resolution: Option<u32>,
    preview: Option<bool>,
    preview_cols: Option<u16>,
}

/// Boost section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct BoostSection {
    output_dir: Option<PathBuf>,
    kernel_width: Option<u32>,
    kernel_height: Option<u32>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this layout.
///
/// # Example
/// ```
/// use px_core::config::parse_config;
/// let config = parse_config("[cube]\nresolution = 64\n").unwrap();
/// assert_eq!(config.cube.resolution, 64);
/// assert_eq!(config.boost.kernel_width, 5);
/// ```
pub fn parse_config(content: &str) -> Result<ToolConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erro de parsing TOML")?;

    let mut config = ToolConfig::default();

    if let Some(c) = file.cube {
        if let Some(v) = c.output_dir {
            config.cube.output_dir = v;
        }
        if let Some(v) = c.resolution {
            config.cube.resolution = v;
        }
        if let Some(v) = c.preview {
            config.cube.preview = v;
        }
        if let Some(v) = c.preview_cols {
            config.cube.preview_cols = v;
        }
    }

    if let Some(b) = file.boost {
        if let Some(v) = b.output_dir {
            config.boost.output_dir = v;
        }
        if let Some(v) = b.kernel_width {
            config.boost.kernel_width = v;
        }
        if let Some(v) = b.kernel_height {
            config.boost.kernel_height = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Carrega um arquivo TOML e mescla com os valores padrão.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use px_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ToolConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Não foi possível ler {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("Configuração inválida em {}", path.display()))?;
    log::debug!("Configuração carregada de {}: {config:?}", path.display());
    Ok(config)
}
