//! Command handlers.
//!
//! Each handler returns an [`Output`] carrying both a JSON value and a
//! plain-text rendering; `main` picks one based on `--json`.

pub mod estimate;
pub mod tables;

use serde_json::Value;

use crate::cli::Commands;
use crate::config::CalculatorConfig;

/// Result of a command, renderable as text or JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub json: Value,
    pub text: String,
}

impl Output {
    pub fn render(&self, as_json: bool) -> anyhow::Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(&self.json)?)
        } else {
            Ok(self.text.clone())
        }
    }
}

/// Dispatch a parsed command.
pub fn run(command: &Commands, config: &CalculatorConfig) -> anyhow::Result<Output> {
    match command {
        Commands::Estimate(args) => estimate::estimate(args, config),
        Commands::Banners => Ok(tables::banners()),
        Commands::Rates => Ok(tables::rates()),
    }
}
