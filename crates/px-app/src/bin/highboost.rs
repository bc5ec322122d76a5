use std::io;
use std::process::ExitCode;

use clap::Parser;
use px_app::cli::BoostCli;

fn main() -> ExitCode {
    let cli = BoostCli::parse();
    px_app::init_logging(&cli.log_level);

    let result = px_app::resolve_config(&cli.config).and_then(|mut config| {
        cli.apply_overrides(&mut config);
        config.clamp_all();
        px_app::boost::run_boost(&config.boost, &cli.image, cli.k_factor, &mut io::stdout().lock())
    });

    match result {
        Ok(path) => {
            log::info!("saída: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{e:#}");
            eprintln!("Erro: {e}");
            ExitCode::FAILURE
        }
    }
}
