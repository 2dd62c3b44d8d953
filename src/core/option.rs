//! Option contract definitions
//!
//! European calls and puts on a single equity, plus the scalar inputs the
//! pricing formula consumes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BSError, BSResult};

/// Calendar days per year used for time-to-expiry
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = BSError;

    fn from_str(s: &str) -> BSResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(BSError::invalid_argument(format!(
                "invalid option type '{}', expected 'call' or 'put'",
                other
            ))),
        }
    }
}

/// Inputs to a single Black-Scholes valuation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Current underlying price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time: f64,
    /// Annualized risk-free rate (continuous compounding)
    pub rate: f64,
    /// Annualized volatility
    pub vol: f64,
    pub option_type: OptionType,
}

impl OptionParams {
    pub fn new(
        spot: f64,
        strike: f64,
        time: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time,
            rate,
            vol,
            option_type,
        }
    }

    /// Same contract with the other option type
    pub fn with_type(&self, option_type: OptionType) -> Self {
        Self { option_type, ..*self }
    }

    /// Same contract priced with a different volatility
    pub fn with_vol(&self, vol: f64) -> Self {
        Self { vol, ..*self }
    }

    /// Whether the formula is numerically meaningful for these inputs.
    ///
    /// Not enforced by the pricer. At T = 0 the price collapses to intrinsic
    /// value (NaN when spot equals strike); T < 0 gives NaN.
    pub fn is_well_formed(&self) -> bool {
        self.spot > 0.0 && self.strike > 0.0 && self.time > 0.0 && self.vol > 0.0
    }
}

/// Time to expiry in years, counted in whole calendar days.
///
/// Negative once the expiry date has passed.
pub fn time_to_expiry(expiry: NaiveDate, today: NaiveDate) -> f64 {
    (expiry - today).num_days() as f64 / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option_type() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);

        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert!(matches!(err, BSError::InvalidArgument(_)));
        assert!("".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for kind in [OptionType::Call, OptionType::Put] {
            assert_eq!(kind.to_string().parse::<OptionType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_time_to_expiry() {
        let expiry = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 10, 7).unwrap();

        // 85 days
        let tte = time_to_expiry(expiry, today);
        assert!((tte - 85.0 / 365.0).abs() < 1e-12);

        // Expired contracts go negative
        assert!(time_to_expiry(today, expiry) < 0.0);
    }

    #[test]
    fn test_params_builders() {
        let call = OptionParams::new(100.0, 95.0, 0.5, 0.03, 0.25, OptionType::Call);
        let put = call.with_type(OptionType::Put);
        assert_eq!(put.option_type, OptionType::Put);
        assert_eq!(put.strike, 95.0);

        assert!(call.is_well_formed());
        assert!(!call.with_vol(0.0).is_well_formed());
    }
}
