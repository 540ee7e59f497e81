//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_draft_values::{
    cli::{Commands, DraftValues},
    commands::process_data::handle_process_data,
    ProcessConfig,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = DraftValues::parse();

    let default_level = if app.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match app.command {
        Commands::ProcessData(args) => {
            let config = ProcessConfig::from(&args);
            handle_process_data(config, args.json).context("process-data failed")?
        }
    }

    Ok(())
}
