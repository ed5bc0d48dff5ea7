//! Finite State Machine Flowchart Generator

use clap::Parser;
use fsm_flowchart::{Config, Result, VERSION, cli, init_logging};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    // Command-line level wins over the configured one
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_logging(level);

    tracing::info!("FSM flowchart generator v{}", VERSION);
    tracing::debug!("Parsed arguments: {:?}", args);
    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config)
}
