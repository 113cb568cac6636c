//! Command handlers

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use rental_app::config::Config;
use rental_app::repository::{open_journal, open_rental_system, Journal};
use rental_types::{Error, OutputFormat, PersistPolicy, Result};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::session::Session;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    if let Some(policy) = cli.persist_policy {
        config.persist_policy = policy;
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Shell => cmd_shell(&config, output_format),

        Commands::Run { script } => cmd_run(&config, script, output_format),

        Commands::Config {
            show,
            set_data_dir,
            set_output,
            set_persist_policy,
            reset,
        } => cmd_config(
            *show,
            set_data_dir.clone(),
            *set_output,
            *set_persist_policy,
            *reset,
        ),

        Commands::Journal { journal } => cmd_journal(&config, *journal),
    }
}

fn cmd_shell(config: &Config, output_format: OutputFormat) -> Result<()> {
    let system = open_rental_system(config)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!("Rental registry. Type 'help' for commands, 'quit' to leave.");
        println!("Data dir: {}", config.data_dir()?.display());
    }

    let mut session = Session::new(system, output_format, io::stdout());
    let report = session.run(stdin.lock(), interactive)?;
    info!(
        executed = report.executed,
        failed = report.failed,
        "Shell session ended"
    );
    Ok(())
}

fn cmd_run(config: &Config, script: &Path, output_format: OutputFormat) -> Result<()> {
    if !script.exists() {
        return Err(Error::Session(format!(
            "Script not found: {}",
            script.display()
        )));
    }

    let reader = BufReader::new(File::open(script)?);
    let system = open_rental_system(config)?;
    let mut session = Session::new(system, output_format, io::stdout());
    let report = session.run(reader, false)?;
    info!(
        script = %script.display(),
        executed = report.executed,
        failed = report.failed,
        "Script finished"
    );

    if report.failed > 0 {
        return Err(Error::Session(format!(
            "{} of {} commands failed",
            report.failed, report.executed
        )));
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_persist_policy: Option<PersistPolicy>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(policy) = set_persist_policy {
        config.persist_policy = policy;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

fn cmd_journal(config: &Config, journal: Option<Journal>) -> Result<()> {
    let data_dir = config.data_dir()?;
    let journals = match journal {
        Some(journal) => vec![journal],
        None => vec![Journal::Vehicles, Journal::Customers, Journal::Records],
    };
    let show_headers = journals.len() > 1;

    for journal in journals {
        let log = open_journal(&data_dir, journal);
        let lines = log.read_lines()?;
        if show_headers {
            println!("== {} ({} lines)", log.path().display(), lines.len());
        }
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}
