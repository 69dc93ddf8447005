mod cli;
mod client;
mod commands;
mod config;
mod confirm;
mod directory;
mod error;
mod notify;
mod output;
mod table;
mod types;
mod view;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::DirectoryClient;
use config::Config;
use error::{AdminError, Result};
use notify::TerminalNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        let verbose = std::env::args().any(|arg| arg == "--verbose" || arg == "-v");
        for line in error_report(&e, verbose) {
            eprintln!("{line}");
        }

        std::process::exit(1);
    }
}

/// Lines to print for a failed run. Errors the view already notified are
/// not repeated; `--verbose` still shows their causes.
fn error_report(e: &AdminError, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if !e.is_reported() {
        lines.push(format!("Error: {e}"));
    }

    // Show error chain if verbose flag was passed
    if verbose {
        let mut source = e.source();
        while let Some(cause) = source {
            lines.push(format!("Caused by: {cause}"));
            source = cause.source();
        }
    }

    lines
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PROJADM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "projadm", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        // Commands that talk to the directory service
        command => {
            let config = Config::load()?;
            let directory =
                DirectoryClient::new(config.api_url()?, config.api_token(), config.timeout())?;

            match command {
                Commands::List => {
                    commands::projects::list(directory, TerminalNotifier).await?;
                }
                Commands::Edit(args) => {
                    commands::projects::edit(directory, TerminalNotifier, args).await?;
                }
                Commands::Delete(args) => {
                    commands::projects::delete(directory, TerminalNotifier, args).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
