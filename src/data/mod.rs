//! Market data fetching
//!
//! Handles:
//! - The `MarketData` interface the pricing pipeline depends on
//! - Yahoo Finance chart API for daily closes (free, delayed)

pub mod yahoo;

pub use yahoo::*;

use crate::core::{BSResult, PriceSeries, SpotQuote};

/// Source of spot quotes and daily price history.
///
/// Failures surface as `Network`, `NotFound` or `Data` errors. Implementations
/// do not retry or cache.
pub trait MarketData {
    /// Latest daily close for `ticker`
    fn fetch_quote(&self, ticker: &str) -> BSResult<SpotQuote>;

    /// Daily closes for `ticker` over `period` (e.g. "1y"), oldest first
    fn fetch_history(&self, ticker: &str, period: &str) -> BSResult<PriceSeries>;
}
