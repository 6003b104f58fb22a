//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use chrono::NaiveDate;
use euro_pricer::prelude::*;

fn main() -> Result<(), PricerError> {
    let valuation = NaiveDate::from_ymd_opt(2025, 3, 21).ok_or_else(|| {
        PricerError::invalid_input("bad valuation date")
    })?;
    let expiry = NaiveDate::from_ymd_opt(2025, 6, 20).ok_or_else(|| {
        PricerError::invalid_input("bad expiry date")
    })?;

    let spot = 500.0;
    let strike = 505.0;
    let rate = 0.05; // 5% risk-free rate
    let div = 0.01; // 1% dividend yield
    let vol = 0.20; // 20% volatility

    let market = MarketData::new(spot, rate, vol).with_dividend_yield(div);
    let call = OptionContract::from_dates(strike, valuation, expiry, OptionType::Call)?;
    let put = OptionContract::from_dates(strike, valuation, expiry, OptionType::Put)?;
    let time = call.maturity_in_years;

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Time:     {:.4} years ({} to {})", time, valuation, expiry);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Div:      {:.1}%", div * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let engine = AnalyticEuropeanEngine::new();
    let call_price = engine.price(&call, &market)?.present_value;
    let put_price = engine.price(&put, &market)?.present_value;
    println!("Call Price: ${:.4}", call_price);
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S*e^(-qT) - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = spot * (-div * time).exp() - strike * (-rate * time).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S*e^(-qT) - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    println!("\n=== Greeks (Call) ===\n");
    let greeks = engine.greeks(&call, &market)?;
    println!("Delta:  {:.4}", greeks.delta);
    println!("Gamma:  {:.4}", greeks.gamma);
    println!("Theta:  {:.4} (per day: {:.4})", greeks.theta, greeks.theta_per_day());
    println!("Vega:   {:.4}", greeks.vega);
    println!("Rho:    {:.4}", greeks.rho);

    Ok(())
}
