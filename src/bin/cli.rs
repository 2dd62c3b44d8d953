//! BS Options CLI
//!
//! Prices a call and put on one ticker from its latest close, then prints the
//! historical volatility and the prices it implies.
//!
//! ```bash
//! bs-cli --ticker CVS --strike 80 --expiry 2024-12-31
//! bs-cli --config pricer.toml --json
//! RUST_LOG=bs_options=debug bs-cli
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;

use bs_options::config::default_config_template;
use bs_options::prelude::*;

/// Black-Scholes pricer for a single equity option.
#[derive(Parser)]
#[command(name = "bs-cli")]
#[command(about = "Price a European call/put from a live quote and estimate historical volatility")]
struct Cli {
    /// TOML config file (fields not given fall back to defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Underlying ticker
    #[arg(long)]
    ticker: Option<String>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Expiration date (YYYY-MM-DD)
    #[arg(long)]
    expiry: Option<NaiveDate>,

    /// Risk-free rate (0.05 = 5%)
    #[arg(long)]
    rate: Option<f64>,

    /// Volatility used for pricing (0.20 = 20%)
    #[arg(long)]
    vol: Option<f64>,

    /// Lookback for historical volatility (e.g. 1y, 6mo)
    #[arg(long)]
    period: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print an example config file and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<PricerConfig> {
        let mut config = match &self.config {
            Some(path) => PricerConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => PricerConfig::default(),
        };

        if let Some(ticker) = &self.ticker {
            config.ticker = ticker.to_uppercase();
        }
        if let Some(strike) = self.strike {
            config.strike = strike;
        }
        if let Some(expiry) = self.expiry {
            config.expiry = expiry;
        }
        if let Some(rate) = self.rate {
            config.rate = rate;
        }
        if let Some(vol) = self.vol {
            config.volatility = vol;
        }
        if let Some(period) = &self.period {
            config.history_period = period.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn print_report(report: &PricingReport) {
    println!("{} Current Stock Price: ${:.2}", report.ticker, report.spot);
    println!("Strike Price: ${}", report.strike);
    println!("Expiry: {}", report.expiry);
    println!("Time to Expiration (years): {:.2}", report.time_to_expiry);
    println!("Risk-Free Interest Rate: {:.2}%", report.rate * 100.0);
    println!("Volatility: {:.2}%", report.configured.vol * 100.0);
    println!("Call Option Price: ${:.2}", report.configured.call);
    println!("Put Option Price: ${:.2}", report.configured.put);

    let g = &report.call_greeks;
    println!("\nCall Greeks:");
    println!("  Delta: {:.4}", g.delta);
    println!("  Gamma: {:.6}", g.gamma);
    println!("  Theta: {:.4} (per day)", g.theta);
    println!("  Vega:  {:.4} (per vol point)", g.vega);
    println!("  Rho:   {:.4} (per rate point)", g.rho);

    println!(
        "\nHistorical Volatility ({} closes): {:.2}%",
        report.history_len,
        report.historical.vol * 100.0
    );
    if let Some((first, last)) = report.history_range {
        println!("History: {} to {}", first, last);
    }
    println!("Call Option Price @ hist vol: ${:.2}", report.historical.call);
    println!("Put Option Price @ hist vol: ${:.2}", report.historical.put);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bs_options=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", default_config_template());
        return Ok(());
    }

    let config = cli.resolve_config()?;
    let client = YahooClient::with_timeout(Duration::from_secs(config.request_timeout_secs))?;

    let today = Utc::now().date_naive();
    let report = match build_report(&client, &config, today) {
        Ok(report) => report,
        Err(e) => {
            if e.is_fetch_failure() {
                tracing::error!("market data for {} unavailable, nothing priced", config.ticker);
            }
            return Err(anyhow::Error::new(e).context(format!("pricing {} options", config.ticker)));
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
