//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rental_app::repository::Journal;
use rental_types::{OutputFormat, PersistPolicy};

#[derive(Parser)]
#[command(name = "rental-registry")]
#[command(version)]
#[command(about = "Track rental vehicles, customers and rent/return transactions")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory for vehicles.txt, customers.txt and rental_records.txt
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Keep or roll back in-memory changes whose file append fails
    #[arg(long, global = true)]
    pub persist_policy: Option<PersistPolicy>,

    /// Verbose logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session reading commands from stdin
    Shell,

    /// Execute session commands from a script file, one per line
    Run {
        /// Path to the script file
        script: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set persist policy (keep, rollback)
        #[arg(long)]
        set_persist_policy: Option<PersistPolicy>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Print raw lines from the append-only files
    Journal {
        /// Which file to print. Prints all three if omitted.
        #[arg(value_enum)]
        journal: Option<Journal>,
    },
}
