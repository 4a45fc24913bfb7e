//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adrev", version, about = "Ad revenue estimator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file to read instead of $ADREV_CONFIG_DIR/config.toml"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate revenue; unset fields fall back to configured defaults.
    Estimate(EstimateArgs),
    /// List banner sizes and their multipliers.
    Banners,
    /// List geography rates.
    Rates,
}

#[derive(Args, Debug, Default, Clone)]
pub struct EstimateArgs {
    #[arg(long, allow_negative_numbers = true, help = "Traffic amount")]
    pub traffic: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "US share, in percent")]
    pub us: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "CA share, in percent")]
    pub ca: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "GB share, in percent")]
    pub gb: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "DE share, in percent")]
    pub de: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Other share, in percent")]
    pub other: Option<f64>,
    #[arg(long, help = "IAB banner size, e.g. 300x250")]
    pub banner: Option<String>,
    #[arg(long, help = "Show per-geography revenue")]
    pub breakdown: bool,
}
