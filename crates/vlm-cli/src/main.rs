mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!(version = env!("CARGO_PKG_VERSION"), "vlm starting.");
    debug!(?cli, "Arguments parsed.");

    if let Some(threads) = cli.threads {
        configure_thread_pool(threads)?;
    }

    let (name, outcome) = match cli.command {
        Commands::Analyze(args) => ("analyze", commands::analyze::run(args, cli.quiet)),
        Commands::Characteristics(args) => {
            ("characteristics", commands::characteristics::run(args, cli.quiet))
        }
    };

    match &outcome {
        Ok(()) => info!(command = name, "Finished."),
        Err(e) => error!(command = name, error = %e, "Command failed."),
    }
    outcome
}

/// Sizes the global rayon pool used to assemble influence matrices.
fn configure_thread_pool(threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(CliError::Argument(
            "--threads must be at least 1".to_string(),
        ));
    }
    info!(threads, "Configuring the global thread pool.");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .map_err(|e| CliError::Other(anyhow::anyhow!("failed to build thread pool: {e}")))
}
