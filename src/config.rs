//! Pricer configuration
//!
//! Hand-set contract and market parameters. Loaded from a TOML file, with every
//! field optional and falling back to the defaults below; the CLI overrides
//! individual fields on top.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{BSError, BSResult};
use crate::data::VALID_PERIODS;

/// Parameters for one pricing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricerConfig {
    /// Underlying ticker
    pub ticker: String,
    /// Option strike
    pub strike: f64,
    /// Expiration date ("YYYY-MM-DD")
    pub expiry: NaiveDate,
    /// Annualized risk-free rate
    pub rate: f64,
    /// Annualized volatility used for pricing
    pub volatility: f64,
    /// Lookback for historical volatility
    pub history_period: String,
    /// HTTP timeout for market data requests
    pub request_timeout_secs: u64,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            ticker: "CVS".to_string(),
            strike: 80.0,
            expiry: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            rate: 0.05,
            volatility: 0.20,
            history_period: "1y".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> BSResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        tracing::debug!("Loaded config from {:?}", path);
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(s: &str) -> BSResult<Self> {
        toml::from_str(s).map_err(|e| BSError::config(format!("Failed to parse config: {}", e)))
    }

    /// Reject parameters the pipeline cannot run with.
    ///
    /// Zero volatility is allowed here; the pricer reports it as a non-finite
    /// price rather than an error.
    pub fn validate(&self) -> BSResult<()> {
        if self.ticker.trim().is_empty() {
            return Err(BSError::config("ticker must not be empty"));
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(BSError::config(format!("strike must be positive, got {}", self.strike)));
        }
        if !self.rate.is_finite() {
            return Err(BSError::config("rate must be finite"));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(BSError::config(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !VALID_PERIODS.contains(&self.history_period.as_str()) {
            return Err(BSError::config(format!(
                "history_period '{}' is not one of {:?}",
                self.history_period, VALID_PERIODS
            )));
        }
        Ok(())
    }
}

/// Example config file
pub fn default_config_template() -> &'static str {
    r#"# bs-options configuration
#
# All fields are optional; missing ones use the defaults shown here.

ticker = "CVS"
strike = 80.0
expiry = "2024-12-31"

# Continuous annual rate (0.05 = 5%)
rate = 0.05

# Annual volatility used for pricing (0.20 = 20%)
volatility = 0.20

# Lookback for historical volatility: 1mo, 3mo, 6mo, 1y, 2y, ...
history_period = "1y"

request_timeout_secs = 30
"#
}
