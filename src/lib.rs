//! # BS Options - Black-Scholes Pricing for a Single Equity
//!
//! Prices a European call and put on one stock from its latest close and a
//! handful of hand-set parameters, and estimates the stock's historical
//! volatility from a year of daily closes.
//!
//! ## Key Components
//!
//! - **Black-Scholes**: closed-form pricing and Greeks, no dividends
//! - **Normal distribution**: self-contained erf and normal CDF
//! - **Historical volatility**: sample std of daily returns, annualized by √252
//! - **Data Fetching**: Yahoo Finance daily chart behind the `MarketData` trait
//! - **Report**: the fetch → price → estimate pipeline, free of printing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bs_options::prelude::*;
//!
//! let call = bs_price(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call);
//! let put = bs_price(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Put);
//!
//! let vol = historical_volatility(&[100.0, 101.5, 99.8, 102.3]).unwrap();
//!
//! let client = YahooClient::new().unwrap();
//! let report = build_report(&client, &PricerConfig::default(), chrono::Utc::now().date_naive());
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - Price American or exotic options
//! - Adjust for dividends
//! - Guard against zero time to expiry or zero volatility (prices go non-finite)
//! - Cache or retry market data requests

pub mod config;
pub mod core;
pub mod data;
pub mod models;
pub mod report;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        time_to_expiry, BSError, BSResult, Greeks, OptionParams, OptionType, PriceSeries,
        SpotQuote,
    };

    // Data fetching
    pub use crate::data::{MarketData, YahooClient};

    // Models
    pub use crate::models::{
        daily_returns,
        greeks as bs_greeks,
        historical_volatility,
        norm_cdf,
        norm_pdf,
        parity_gap,
        price as bs_price,
        price_params,
        TRADING_DAYS_PER_YEAR,
    };

    // Pipeline
    pub use crate::config::PricerConfig;
    pub use crate::report::{build_report, CallPut, PricingReport};
}

// Re-export main types at crate root
pub use crate::core::{BSError, BSResult};
pub use crate::config::PricerConfig;
