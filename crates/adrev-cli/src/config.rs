//! Configuration file management.

use std::path::{Path, PathBuf};

use adrev_types::{BannerSize, CalculationInput, GeoShares, DEFAULT_TRAFFIC};
use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::EstimateArgs;

/// Complete calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Values used for any estimate field not given on the command line.
    #[serde(default)]
    pub defaults: FormDefaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Advanced settings.
    #[serde(default)]
    pub advanced: AdvancedConfig,
}

/// Pre-filled form values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default = "default_traffic")]
    pub traffic: f64,
    #[serde(default = "default_us")]
    pub us: f64,
    #[serde(default = "default_ca")]
    pub ca: f64,
    #[serde(default = "default_gb")]
    pub gb: f64,
    #[serde(default = "default_de")]
    pub de: f64,
    #[serde(default = "default_other")]
    pub other: f64,
    /// Banner identifier, e.g. "300x250".
    #[serde(default = "default_banner_size")]
    pub banner_size: String,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON even without `--json`.
    #[serde(default)]
    pub json: bool,
}

/// Advanced configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedConfig {
    /// Log level: "trace" | "debug" | "info" | "warn" | "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions

fn default_traffic() -> f64 {
    DEFAULT_TRAFFIC
}

fn default_us() -> f64 {
    GeoShares::default().us
}

fn default_ca() -> f64 {
    GeoShares::default().ca
}

fn default_gb() -> f64 {
    GeoShares::default().gb
}

fn default_de() -> f64 {
    GeoShares::default().de
}

fn default_other() -> f64 {
    GeoShares::default().other
}

fn default_banner_size() -> String {
    BannerSize::default().id().to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            traffic: default_traffic(),
            us: default_us(),
            ca: default_ca(),
            gb: default_gb(),
            de: default_de(),
            other: default_other(),
            banner_size: default_banner_size(),
        }
    }
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl FormDefaults {
    /// Build an input from command-line values, filling gaps from `self`.
    pub fn merge(&self, args: &EstimateArgs) -> CalculationInput {
        let geo = GeoShares::new(
            args.us.unwrap_or(self.us),
            args.ca.unwrap_or(self.ca),
            args.gb.unwrap_or(self.gb),
            args.de.unwrap_or(self.de),
            args.other.unwrap_or(self.other),
        );
        CalculationInput::new(
            args.traffic.unwrap_or(self.traffic),
            geo,
            args.banner.clone().unwrap_or_else(|| self.banner_size.clone()),
        )
    }
}

impl CalculatorConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and a missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::load_from(&config_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: CalculatorConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Get the config file path.
    fn config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("ADREV_CONFIG_DIR") {
            return PathBuf::from(dir).join("config.toml");
        }
        home_fallback(".adrev").join("config.toml")
    }
}

/// Fallback home directory resolution.
fn home_fallback(subpath: &str) -> PathBuf {
    std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(subpath))
        .unwrap_or_else(|_| PathBuf::from(".").join(subpath))
}
