//! Historical volatility
//!
//! Annualized close-to-close volatility from a daily price series.

use statrs::statistics::Statistics;

use crate::core::{BSError, BSResult};

/// Trading days per year used to annualize daily figures
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Simple period-over-period returns: `(p[i] - p[i-1]) / p[i-1]`.
///
/// Length is one less than the input; empty for fewer than two prices.
pub fn daily_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Scale a per-period standard deviation to a yearly figure
pub fn annualize(period_std: f64, periods_per_year: f64) -> f64 {
    period_std * periods_per_year.sqrt()
}

/// Annualized historical volatility of a daily closing-price series.
///
/// Sample standard deviation (ddof = 1) of the simple daily returns, scaled
/// by √252. Needs at least two returns, i.e. three prices: a two-price
/// series is rejected with `InsufficientData` as well, although the formula
/// itself only breaks below two prices (one return has no sample deviation).
pub fn historical_volatility(prices: &[f64]) -> BSResult<f64> {
    if prices.len() < 2 {
        return Err(BSError::insufficient_data(format!(
            "need at least 2 prices to form a return, got {}",
            prices.len()
        )));
    }

    let returns = daily_returns(prices);
    if returns.len() < 2 {
        return Err(BSError::insufficient_data(
            "sample standard deviation needs at least 2 returns",
        ));
    }

    let daily_std = returns.iter().std_dev();
    let vol = annualize(daily_std, TRADING_DAYS_PER_YEAR);

    tracing::debug!(
        "historical vol over {} returns: daily {:.6}, annualized {:.6}",
        returns.len(),
        daily_std,
        vol
    );

    Ok(vol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_daily_returns() {
        let r = daily_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(r.len(), 2);
        assert_abs_diff_eq!(r[0], 0.10, epsilon = 1e-15);
        assert_abs_diff_eq!(r[1], -0.10, epsilon = 1e-15);

        assert!(daily_returns(&[100.0]).is_empty());
        assert!(daily_returns(&[]).is_empty());
    }

    #[test]
    fn test_constant_series_has_zero_vol() {
        let vol = historical_volatility(&[100.0, 100.0, 100.0, 100.0]).unwrap();
        assert_eq!(vol, 0.0);
    }

    #[test]
    fn test_constant_growth_has_zero_vol() {
        // Both returns are exactly 10%
        let vol = historical_volatility(&[100.0, 110.0, 121.0]).unwrap();
        assert_eq!(vol, 0.0);
    }

    #[test]
    fn test_known_value() {
        // Returns +10%, -10%: sample std = sqrt(0.02) = 0.141421...
        let vol = historical_volatility(&[100.0, 110.0, 99.0]).unwrap();
        assert_abs_diff_eq!(vol, 0.02_f64.sqrt() * 252.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_matches_two_pass_sample_std() {
        let prices = [
            62.10, 62.85, 61.97, 63.40, 63.02, 64.11, 63.55, 62.80, 63.90, 64.75,
        ];
        let returns = daily_returns(&prices);
        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

        let vol = historical_volatility(&prices).unwrap();
        assert_abs_diff_eq!(vol, var.sqrt() * TRADING_DAYS_PER_YEAR.sqrt(), epsilon = 1e-12);
        assert!(vol > 0.0);
    }

    #[test]
    fn test_insufficient_data() {
        let err = historical_volatility(&[100.0]).unwrap_err();
        assert!(matches!(err, BSError::InsufficientData(_)));

        let err = historical_volatility(&[]).unwrap_err();
        assert!(matches!(err, BSError::InsufficientData(_)));

        // One return has no sample deviation
        let err = historical_volatility(&[100.0, 101.0]).unwrap_err();
        assert!(matches!(err, BSError::InsufficientData(_)));
    }

    #[test]
    fn test_annualize() {
        assert_abs_diff_eq!(annualize(0.01, 252.0), 0.158_745, epsilon = 1e-6);
    }
}
