//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing (no dividends, continuous compounding)
//! - Analytic Greeks
//! - Put-call parity check
//!
//! Inputs are not validated. With T = 0 or vol = 0, d1 divides by zero: when
//! the numerator is non-zero d1 runs to ±∞ and the price collapses to its
//! limit (intrinsic value at T = 0), and when it is zero (S = K at T = 0) the
//! price is NaN. T < 0 gives NaN. Callers that care should check
//! [`OptionParams::is_well_formed`] first.

use crate::core::{Greeks, OptionParams, OptionType};
use super::normal::{norm_cdf, norm_pdf};

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Black-Scholes European option price
pub fn price(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> f64 {
    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d1 - vol * time.sqrt();
    let df = (-rate * time).exp();

    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Price from a parameter bundle
pub fn price_params(params: &OptionParams) -> f64 {
    price(
        params.spot,
        params.strike,
        params.time,
        params.rate,
        params.vol,
        params.option_type,
    )
}

/// Black-Scholes Greeks
pub fn greeks(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> Greeks {
    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d1 - vol * time.sqrt();
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    };

    // Same for call and put
    let gamma = pdf_d1 / (spot * vol * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t / 100.0;

    let decay = -spot * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta = match option_type {
        OptionType::Call => decay - rate * strike * df * norm_cdf(d2),
        OptionType::Put => decay + rate * strike * df * norm_cdf(-d2),
    };

    let rho = match option_type {
        OptionType::Call => strike * time * df * norm_cdf(d2) / 100.0,
        OptionType::Put => -strike * time * df * norm_cdf(-d2) / 100.0,
    };

    Greeks::new(delta, gamma, theta / 365.0, vega, rho)
}

/// Greeks from a parameter bundle
pub fn greeks_params(params: &OptionParams) -> Greeks {
    greeks(
        params.spot,
        params.strike,
        params.time,
        params.rate,
        params.vol,
        params.option_type,
    )
}

/// Deviation from put-call parity: `C - P - (S - K e^{-rT})`
pub fn parity_gap(call: f64, put: f64, spot: f64, strike: f64, time: f64, rate: f64) -> f64 {
    call - put - (spot - strike * (-rate * time).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bs_price_reference() {
        // ATM, 20% vol, 1 year, 5% rate
        let call_price = price(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call);
        let put_price = price(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Put);

        assert_abs_diff_eq!(call_price, 10.4506, epsilon = 1e-4);
        assert_abs_diff_eq!(put_price, 5.5735, epsilon = 1e-4);
    }

    #[test]
    fn test_atm_zero_rate_call_equals_put() {
        for &(spot, time, vol) in &[(100.0, 1.0, 0.2), (75.25, 0.23, 0.35), (4200.0, 2.5, 0.6)] {
            let call = price(spot, spot, time, 0.0, vol, OptionType::Call);
            let put = price(spot, spot, time, 0.0, vol, OptionType::Put);
            assert_abs_diff_eq!(call, put, epsilon = 1e-9 * spot);
        }
    }

    #[test]
    fn test_put_call_parity() {
        let cases = [
            (75.25, 80.0, 0.23, 0.05, 0.20),
            (100.0, 60.0, 3.0, 0.10, 0.45),
            (100.0, 150.0, 0.05, -0.01, 0.15),
            (12.0, 11.5, 1.5, 0.0, 0.90),
        ];

        for &(spot, strike, time, rate, vol) in &cases {
            let call = price(spot, strike, time, rate, vol, OptionType::Call);
            let put = price(spot, strike, time, rate, vol, OptionType::Put);
            assert_abs_diff_eq!(
                parity_gap(call, put, spot, strike, time, rate),
                0.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_call_monotone_in_spot() {
        let mut last = 0.0;
        for i in 40..=200 {
            let spot = i as f64;
            let call = price(spot, 100.0, 0.75, 0.03, 0.25, OptionType::Call);
            assert!(call >= last, "call fell from {} to {} at spot {}", last, call, spot);
            last = call;
        }
    }

    #[test]
    fn test_price_params_matches_price() {
        let params = OptionParams::new(75.25, 80.0, 1.1, 0.05, 0.20, OptionType::Put);
        assert_eq!(
            price_params(&params),
            price(75.25, 80.0, 1.1, 0.05, 0.20, OptionType::Put)
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        // No clamping at expiry or zero vol: 0/0 in d1 gives NaN
        let at_the_money = price(100.0, 100.0, 0.0, 0.05, 0.20, OptionType::Call);
        assert!(at_the_money.is_nan());

        let zero_vol = price(100.0, 100.0, 1.0, 0.0, 0.0, OptionType::Put);
        assert!(zero_vol.is_nan());

        let expired = price(75.25, 80.0, -0.1, 0.05, 0.20, OptionType::Call);
        assert!(expired.is_nan());

        // d1 runs to ±inf away from the money, leaving intrinsic value
        let put = price(75.25, 80.0, 0.0, 0.05, 0.20, OptionType::Put);
        let call = price(75.25, 80.0, 0.0, 0.05, 0.20, OptionType::Call);
        assert_eq!(put, 4.75);
        assert_eq!(call, 0.0);

        let itm_call = price(90.0, 80.0, 0.0, 0.05, 0.20, OptionType::Call);
        assert_eq!(itm_call, 10.0);
    }

    #[test]
    fn test_greeks() {
        let g = greeks(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call);

        assert_abs_diff_eq!(g.delta, 0.6368, epsilon = 1e-4);
        assert_abs_diff_eq!(g.gamma, 0.018762, epsilon = 1e-5);
        assert_abs_diff_eq!(g.vega, 0.37524, epsilon = 1e-4);
        assert!(g.theta < 0.0);
        assert!(g.rho > 0.0);

        let p = greeks(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Put);
        assert_abs_diff_eq!(g.delta - p.delta, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.gamma, p.gamma, epsilon = 1e-15);
        assert!(p.rho < 0.0);
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        let h = 1e-3;
        for option_type in [OptionType::Call, OptionType::Put] {
            let up = price(100.0 + h, 95.0, 0.5, 0.02, 0.3, option_type);
            let down = price(100.0 - h, 95.0, 0.5, 0.02, 0.3, option_type);
            let fd = (up - down) / (2.0 * h);
            let g = greeks(100.0, 95.0, 0.5, 0.02, 0.3, option_type);
            assert_abs_diff_eq!(g.delta, fd, epsilon = 1e-4);
        }
    }
}
