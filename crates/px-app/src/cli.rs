use std::path::PathBuf;

use clap::Parser;
use px_core::config::ToolConfig;
use px_core::kernel::KernelSize;

/// Gerador interativo de fatias do cubo RGB.
#[derive(Parser, Debug)]
#[command(name = "cubo-rgb", version, about, long_about = None)]
pub struct CubeCli {
    /// Arquivo de configuração TOML. Padrão: config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Pasta de saída das fatias (sobrepõe a config).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Lado da imagem gerada, em pixels (1-4096).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub resolution: Option<u32>,

    /// Não mostrar a pré-visualização no terminal.
    #[arg(long, default_value_t = false)]
    pub no_preview: bool,

    /// Nível de log: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl CubeCli {
    /// Fold command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut ToolConfig) {
        if let Some(ref dir) = self.output_dir {
            config.cube.output_dir.clone_from(dir);
        }
        if let Some(resolution) = self.resolution {
            config.cube.resolution = resolution;
        }
        if self.no_preview {
            config.cube.preview = false;
        }
    }
}

/// Aplica filtragem High-Boost a uma imagem.
#[derive(Parser, Debug)]
#[command(name = "highboost", version, about, long_about = None)]
pub struct BoostCli {
    /// Caminho para a imagem de entrada.
    #[arg(short = 'i', long = "image")]
    pub image: PathBuf,

    /// Fator de boost k.
    #[arg(short = 'k', long = "k_factor", allow_negative_numbers = true)]
    pub k_factor: f64,

    /// Arquivo de configuração TOML. Padrão: config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Pasta de saída (sobrepõe a config).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Janela do desfoque gaussiano, "LxA" ímpar (ex: 5x5).
    #[arg(long)]
    pub kernel: Option<KernelSize>,

    /// Nível de log: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl BoostCli {
    /// Fold command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut ToolConfig) {
        if let Some(ref dir) = self.output_dir {
            config.boost.output_dir.clone_from(dir);
        }
        if let Some(kernel) = self.kernel {
            config.boost.kernel_width = kernel.width();
            config.boost.kernel_height = kernel.height();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_accepts_short_flags_and_negative_k() {
        let cli = BoostCli::try_parse_from(["highboost", "-i", "lena.png", "-k", "-1.5"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("lena.png"));
        assert_eq!(cli.k_factor, -1.5);
        assert!(cli.kernel.is_none());
    }

    #[test]
    fn boost_long_flags_keep_underscore() {
        let cli = BoostCli::try_parse_from(["highboost", "--image", "a.jpg", "--k_factor", "2", "--kernel", "7x3"])
            .unwrap();
        assert_eq!(cli.k_factor, 2.0);
        assert_eq!(cli.kernel, Some(KernelSize::new(7, 3).unwrap()));
    }

    #[test]
    fn boost_requires_image_and_k() {
        assert!(BoostCli::try_parse_from(["highboost", "-k", "1"]).is_err());
        assert!(BoostCli::try_parse_from(["highboost", "-i", "a.png"]).is_err());
        assert!(BoostCli::try_parse_from(["highboost", "-i", "a.png", "-k", "abc"]).is_err());
    }

    #[test]
    fn boost_rejects_even_kernel() {
        assert!(BoostCli::try_parse_from(["highboost", "-i", "a.png", "-k", "1", "--kernel", "4x4"]).is_err());
    }

    #[test]
    fn boost_overrides_reach_config() {
        let cli = BoostCli::try_parse_from([
            "highboost",
            "-i",
            "a.png",
            "-k",
            "1",
            "--kernel",
            "9",
            "--output-dir",
            "saida",
        ])
        .unwrap();
        let mut config = ToolConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.boost.kernel(), KernelSize::new(9, 9).unwrap());
        assert_eq!(config.boost.output_dir, PathBuf::from("saida"));
    }

    #[test]
    fn cube_overrides_reach_config() {
        let cli = CubeCli::try_parse_from(["cubo-rgb", "--resolution", "32", "--no-preview"]).unwrap();
        let mut config = ToolConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.cube.resolution, 32);
        assert!(!config.cube.preview);
        assert_eq!(config.cube.output_dir, PathBuf::from("figuras_rgb"));
    }

    #[test]
    fn cube_resolution_is_bounded() {
        assert!(CubeCli::try_parse_from(["cubo-rgb", "--resolution", "0"]).is_err());
        assert!(CubeCli::try_parse_from(["cubo-rgb", "--resolution", "5000"]).is_err());
    }
}
