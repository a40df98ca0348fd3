mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use venvlink_core::config::LinkerConfig;
use venvlink_core::observability;
use venvlink_env::{BootstrapError, BootstrapOptions};

fn main() -> ExitCode {
    // Also loads `.env`, so clap's `env` fallbacks see it.
    observability::init_tracing();
    let cli = Cli::parse();
    let config = cli.linker.apply(LinkerConfig::from_env());
    let command = cli.command.unwrap_or(Commands::All);
    tracing::debug!(?command, ?config, "starting");

    match run(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<BootstrapError>() {
            Some(err) => {
                tracing::debug!(kind = err.kind(), "bootstrap failed");
                eprintln!("✗ {}", err);
                ExitCode::from(err.exit_code())
            }
            None => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(command: Commands, config: &LinkerConfig) -> Result<()> {
    match command {
        Commands::All => commands::run::cmd_run(config, BootstrapOptions::default())?,
        Commands::Link => commands::run::cmd_run(
            config,
            BootstrapOptions {
                link: true,
                install: false,
            },
        )?,
        Commands::Install => commands::run::cmd_run(
            config,
            BootstrapOptions {
                link: false,
                install: true,
            },
        )?,
        Commands::Check { json } => {
            let report = commands::check::inspect(config)?;
            if json {
                println!("{}", commands::check::render_json(&report)?);
            } else {
                println!("{}", commands::check::render_text(&report));
            }
        }
    }
    Ok(())
}
