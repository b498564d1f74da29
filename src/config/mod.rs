pub mod file;

use crate::config::file::FileConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RATES_ENDPOINT: &str = "https://open.er-api.com/v6/latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Parser)]
#[command(name = "deskcalc")]
#[command(about = "Console calculator, currency converter, and unit converter")]
pub struct CliConfig {
    /// Base URL of the exchange-rate service.
    #[arg(long)]
    pub rates_endpoint: Option<String>,

    /// Request timeout for rate lookups, in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional TOML settings file; explicit flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging CLI flags over the settings file over
/// the built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub rates_endpoint: String,
    pub timeout_secs: u64,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let rates = file.rates.unwrap_or_default();

        Ok(Settings {
            rates_endpoint: cli
                .rates_endpoint
                .clone()
                .or(rates.endpoint)
                .unwrap_or_else(|| DEFAULT_RATES_ENDPOINT.to_string()),
            timeout_secs: cli
                .timeout_secs
                .or(rates.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            verbose: cli.verbose,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("rates_endpoint", &self.rates_endpoint)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
