//! Market data snapshots
//!
//! Spot quotes and daily closing-price history for a single underlying.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Latest close for an underlying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    /// Most recent daily close
    pub latest_close: f64,
    /// Time of the bar the close belongs to
    pub timestamp: DateTime<Utc>,
}

/// Daily closing prices in chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    /// Trading dates, one per close
    pub dates: Vec<NaiveDate>,
    /// Closing prices, oldest first
    pub closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            dates: Vec::new(),
            closes: Vec::new(),
        }
    }

    /// Build from closes alone (dates left empty)
    pub fn from_closes(symbol: impl Into<String>, closes: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            dates: Vec::new(),
            closes,
        }
    }

    /// Append one bar. Callers push in chronological order.
    pub fn push(&mut self, date: NaiveDate, close: f64) {
        self.dates.push(date);
        self.closes.push(close);
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Most recent close
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// First and last trading date covered
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.dates.first(), self.dates.last()) {
            (Some(&first), Some(&last)) => Some((first, last)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_series() {
        let mut series = PriceSeries::new("CVS");
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
        assert_eq!(series.date_range(), None);

        let d1 = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 10, 4).unwrap();
        series.push(d1, 62.10);
        series.push(d2, 62.85);

        assert_eq!(series.len(), 2);
        assert_eq!(series.last_close(), Some(62.85));
        assert_eq!(series.date_range(), Some((d1, d2)));
    }

    #[test]
    fn test_from_closes() {
        let series = PriceSeries::from_closes("TEST", vec![1.0, 2.0, 3.0]);
        assert_eq!(series.len(), 3);
        assert!(series.dates.is_empty());
        assert_eq!(series.date_range(), None);
    }
}
