//! Yahoo Finance data fetcher
//!
//! Pulls daily bars from Yahoo Finance's unofficial v8 chart API.
//!
//! Note: This is for educational/research purposes. Yahoo Finance
//! data is delayed ~15 minutes and intended for personal use.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::Deserialize;

use super::MarketData;
use crate::core::{BSError, BSResult, PriceSeries, SpotQuote};

/// Ranges accepted by the chart endpoint
pub const VALID_PERIODS: &[&str] = &[
    "1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max",
];

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl YahooClient {
    pub fn new() -> BSResult<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> BSResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| BSError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
        })
    }

    /// Point the client at a different host (proxies, mirrors)
    pub fn with_base_url(mut self, base_url: &str) -> BSResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Chart endpoint for a symbol. The symbol is one percent-encoded path
    /// segment, so `/` in a ticker cannot escape it.
    pub fn chart_url(&self, symbol: &str, period: &str) -> BSResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BSError::config(format!("base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push("chart")
            .push(symbol);
        url.query_pairs_mut()
            .append_pair("range", period)
            .append_pair("interval", "1d");
        Ok(url)
    }

    /// Daily bars for a symbol over a range
    pub fn get_chart(&self, symbol: &str, period: &str) -> BSResult<PriceSeries> {
        if !VALID_PERIODS.contains(&period) {
            return Err(BSError::invalid_argument(format!(
                "unsupported history period '{}', expected one of {:?}",
                period, VALID_PERIODS
            )));
        }

        let url = self.chart_url(symbol, period)?;
        tracing::info!("Fetching {} daily closes for {}", period, symbol);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| BSError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| BSError::Network(e.to_string()))?;

        // Unknown symbols come back as 404 with a structured error body
        match parse_chart(symbol, &body) {
            Ok(series) => Ok(series),
            Err(e @ BSError::NotFound(_)) => Err(e),
            Err(_) if !status.is_success() => Err(BSError::Network(format!(
                "HTTP {} fetching chart for {}",
                status, symbol
            ))),
            Err(e) => Err(e),
        }
    }
}

impl MarketData for YahooClient {
    fn fetch_quote(&self, ticker: &str) -> BSResult<SpotQuote> {
        let series = self.get_chart(ticker, "1d")?;
        latest_quote(&series)
    }

    fn fetch_history(&self, ticker: &str, period: &str) -> BSResult<PriceSeries> {
        self.get_chart(ticker, period)
    }
}

fn parse_base_url(base_url: &str) -> BSResult<Url> {
    Url::parse(base_url).map_err(|e| BSError::config(format!("bad base URL '{}': {}", base_url, e)))
}

/// Last bar of a series as a spot quote
pub fn latest_quote(series: &PriceSeries) -> BSResult<SpotQuote> {
    let latest_close = series
        .last_close()
        .ok_or_else(|| BSError::not_found(format!("no closing price for {}", series.symbol)))?;

    let timestamp = series
        .dates
        .last()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now);

    Ok(SpotQuote {
        symbol: series.symbol.clone(),
        latest_close,
        timestamp,
    })
}

/// Parse a chart API payload into a daily close series.
///
/// Bars with a null close are skipped. Dates are in the exchange's local time.
pub fn parse_chart(symbol: &str, body: &str) -> BSResult<PriceSeries> {
    let response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| BSError::data(format!("Failed to parse chart: {}", e)))?;

    if let Some(err) = response.chart.error {
        let msg = format!("{}: {}", symbol, err.description.unwrap_or(err.code.clone()));
        return if err.code.eq_ignore_ascii_case("Not Found") {
            Err(BSError::NotFound(msg))
        } else {
            Err(BSError::Data(msg))
        };
    }

    let result = response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| BSError::not_found(format!("no chart data returned for {}", symbol)))?;

    let offset = result.meta.as_ref().and_then(|m| m.gmtoffset).unwrap_or(0);
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    if closes.len() != result.timestamp.len() {
        return Err(BSError::data(format!(
            "chart for {} has {} timestamps but {} closes",
            symbol,
            result.timestamp.len(),
            closes.len()
        )));
    }

    let mut series = PriceSeries::new(symbol);
    for (ts, close) in result.timestamp.iter().zip(closes) {
        let Some(close) = close.filter(|c| c.is_finite()) else {
            continue;
        };
        let date = DateTime::from_timestamp(ts + offset, 0)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| BSError::data(format!("bad timestamp {} in chart", ts)))?;
        series.push(date, close);
    }

    if series.is_empty() {
        return Err(BSError::not_found(format!("no closing prices for {}", symbol)));
    }

    Ok(series)
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooChartResult>>,
    error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    meta: Option<YahooChartMeta>,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    #[serde(default)]
    quote: Vec<YahooQuoteBars>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteBars {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
