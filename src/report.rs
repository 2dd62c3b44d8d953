//! Pricing run
//!
//! Fetches the spot and history for one ticker, then prices the call and put
//! with the configured volatility and again with the historical estimate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::config::PricerConfig;
use crate::core::{time_to_expiry, BSResult, Greeks, OptionParams, OptionType};
use crate::data::MarketData;
use crate::models::{greeks_params, historical_volatility, price_params};

/// Call and put values for one volatility input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CallPut {
    pub vol: f64,
    pub call: f64,
    pub put: f64,
}

impl CallPut {
    fn price(params: &OptionParams) -> Self {
        Self {
            vol: params.vol,
            call: price_params(&params.with_type(OptionType::Call)),
            put: price_params(&params.with_type(OptionType::Put)),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.call.is_finite() && self.put.is_finite()
    }
}

/// Everything the CLI prints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    pub ticker: String,
    pub spot: f64,
    pub as_of: DateTime<Utc>,
    pub strike: f64,
    pub expiry: NaiveDate,
    /// Years from `today` to expiry
    pub time_to_expiry: f64,
    pub rate: f64,
    /// Prices using the configured volatility
    pub configured: CallPut,
    pub call_greeks: Greeks,
    /// Number of closes behind the historical estimate
    pub history_len: usize,
    /// First and last trading date of the history, when dated
    pub history_range: Option<(NaiveDate, NaiveDate)>,
    /// Prices using the historical volatility
    pub historical: CallPut,
}

/// Run the fetch → price → estimate pipeline.
///
/// Fetch and estimation errors propagate unchanged; nothing is retried.
/// Degenerate inputs still produce a report, with a warning: on the expiry
/// date prices collapse to intrinsic value (NaN when spot equals strike),
/// and past expiry they are NaN.
pub fn build_report<M: MarketData + ?Sized>(
    source: &M,
    config: &PricerConfig,
    today: NaiveDate,
) -> BSResult<PricingReport> {
    config.validate()?;

    let quote = source.fetch_quote(&config.ticker)?;
    let time = time_to_expiry(config.expiry, today);

    let params = OptionParams::new(
        quote.latest_close,
        config.strike,
        time,
        config.rate,
        config.volatility,
        OptionType::Call,
    );

    if time < 0.0 {
        tracing::warn!(
            "{} expiry {} is before {}; prices will be NaN",
            config.ticker,
            config.expiry,
            today
        );
    } else if time == 0.0 {
        tracing::warn!(
            "{} expires today ({}); prices are intrinsic value",
            config.ticker,
            today
        );
    } else if !params.is_well_formed() {
        tracing::warn!(
            "{} inputs outside the model's domain (vol {})",
            config.ticker,
            config.volatility
        );
    }

    let configured = CallPut::price(&params);
    let call_greeks = greeks_params(&params);

    let history = source.fetch_history(&config.ticker, &config.history_period)?;
    let hist_vol = historical_volatility(&history.closes)?;
    let historical = CallPut::price(&params.with_vol(hist_vol));

    for (label, prices) in [("configured", &configured), ("historical", &historical)] {
        if !prices.is_finite() {
            tracing::warn!("{} vol {:.4} gave non-finite prices", label, prices.vol);
        }
    }

    tracing::debug!(
        "{}: spot {:.2}, T {:.4}, call {:.4}, put {:.4}, hist vol {:.4}",
        config.ticker,
        quote.latest_close,
        time,
        configured.call,
        configured.put,
        hist_vol
    );

    Ok(PricingReport {
        ticker: config.ticker.clone(),
        spot: quote.latest_close,
        as_of: quote.timestamp,
        strike: config.strike,
        expiry: config.expiry,
        time_to_expiry: time,
        rate: config.rate,
        configured,
        call_greeks,
        history_len: history.len(),
        history_range: history.date_range(),
        historical,
    })
}
