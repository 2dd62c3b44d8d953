//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use bs_options::prelude::*;

fn main() {
    // Option parameters
    let spot = 75.25;
    let strike = 80.0;
    let time = 1.10; // years
    let rate = 0.05; // 5% risk-free rate
    let vol = 0.20; // 20% volatility

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Time:     {:.2} years ({:.0} days)", time, time * 365.0);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let call_price = bs_price(spot, strike, time, rate, vol, OptionType::Call);
    println!("Call Price: ${:.4}", call_price);

    let put_price = bs_price(spot, strike, time, rate, vol, OptionType::Put);
    println!("Put Price:  ${:.4}", put_price);

    // C - P = S - K*e^(-rT)
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", call_price - put_price);
    println!("  S - K*e^(-rT) = {:.4}", spot - strike * (-rate * time).exp());
    println!(
        "  Difference: {:.2e}",
        parity_gap(call_price, put_price, spot, strike, time, rate).abs()
    );

    println!("\n=== Greeks (Call) ===\n");
    let greeks = bs_greeks(spot, strike, time, rate, vol, OptionType::Call);
    println!("Delta:  {:.4}", greeks.delta);
    println!("Gamma:  {:.4}", greeks.gamma);
    println!("Theta:  {:.4} per day", greeks.theta);
    println!("Vega:   {:.4}", greeks.vega);
    println!("Rho:    {:.4}", greeks.rho);

    println!("\n=== Historical Volatility ===\n");
    let closes = [
        74.10, 74.85, 73.97, 75.40, 75.02, 76.11, 75.55, 74.80, 75.90, 75.25,
    ];
    match historical_volatility(&closes) {
        Ok(hv) => {
            println!("{} closes -> {:.2}% annualized", closes.len(), hv * 100.0);
            let call_hv = bs_price(spot, strike, time, rate, hv, OptionType::Call);
            println!("Call Price @ hist vol: ${:.4}", call_hv);
        }
        Err(e) => println!("Could not estimate volatility: {}", e),
    }
}
