use std::io;

use anyhow::Result;
use clap::Parser;
use px_app::cli::CubeCli;

fn main() -> Result<()> {
    let cli = CubeCli::parse();
    px_app::init_logging(&cli.log_level);

    let mut config = px_app::resolve_config(&cli.config)?;
    cli.apply_overrides(&mut config);
    config.clamp_all();
    log::info!("cubo-rgb: {:?}", config.cube);

    let written = px_app::cube::run_cube(&config.cube, io::stdin().lock(), io::stdout().lock())?;
    log::info!("{} fatia(s) gravada(s)", written.len());
    Ok(())
}
