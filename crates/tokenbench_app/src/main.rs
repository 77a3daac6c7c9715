mod cli;
mod runner;
mod settings;

use std::path::Path;

use clap::Parser;
use engine_logging::{engine_info, LevelFilter, DEFAULT_LOG_FILE};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let settings = settings::resolve(&cli)?;
    engine_logging::initialize(
        settings.log_destination,
        LevelFilter::Info,
        Path::new(DEFAULT_LOG_FILE),
    );
    engine_info!("Settings: {:?}", settings);
    runner::run(&settings, cli.tokenizer)?;
    Ok(())
}
