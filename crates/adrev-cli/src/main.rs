//! adrev: command-line ad revenue estimator.
//!
//! Reads form defaults from `config.toml`, overlays command-line values,
//! and prints the estimate as text or JSON. Validation failures exit with
//! status 2; anything else that goes wrong exits with status 1.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use adrev_revenue::{FormError, RevenueError};
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::config::CalculatorConfig;

/// Exit status for input the user can correct.
const EXIT_INVALID_INPUT: u8 = 2;

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("adrev={log_level}").parse()?),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

fn run(cli: &Cli, config: &CalculatorConfig) -> anyhow::Result<()> {
    let output = commands::run(&cli.command, config)?;
    println!("{}", output.render(cli.json || config.output.json)?);
    Ok(())
}

fn is_invalid_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<RevenueError>().is_some() || err.downcast_ref::<FormError>().is_some()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CalculatorConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.advanced.log_level) {
        eprintln!("error: invalid log level {:?}: {e:#}", config.advanced.log_level);
        return ExitCode::FAILURE;
    }
    debug!(?cli, "adrev starting");

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_invalid_input(&e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_INVALID_INPUT)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
