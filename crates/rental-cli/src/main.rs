//! Rental Registry - vehicle, customer and rental bookkeeping
//!
//! A CLI tool that tracks rentable vehicles and appends every change to
//! plain text files.

use clap::Parser;
use rental_cli::cli::Cli;
use rental_cli::commands;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
