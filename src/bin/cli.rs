//! Euro Pricer CLI
//!
//! Usage:
//!   euro-pricer                              price the built-in example
//!   euro-pricer <requests.json> [out.json]   price a request batch

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use euro_pricer::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Euro Pricer v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(path) => price_batch(&path, args.next().as_deref()),
        None => price_example(),
    }
}

fn price_example() -> Result<(), Box<dyn std::error::Error>> {
    let spot = 100.0;
    let strike = 100.0; // ATM
    let days = 30;
    let rate = 0.01;
    let vol = 0.20;

    println!("Black-Scholes Pricing Example:");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Time: {} days (Actual/365 Fixed)", days);
    println!("  Rate: {:.1}%", rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let engine = AnalyticEuropeanEngine::new();
    let market = MarketData::new(spot, rate, vol);
    let call = OptionContract::from_days(strike, days, OptionType::Call);
    let put = OptionContract::from_days(strike, days, OptionType::Put);

    println!("Option Prices:");
    println!("  Call: ${:.4}", european_call_price(spot, strike, rate, vol, days)?);
    println!("  Put: ${:.4}", engine.price(&put, &market)?.present_value);

    let greeks = engine.greeks(&call, &market)?;
    print_greeks("Call", &greeks);

    Ok(())
}

fn price_batch(path: &str, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let engine = AnalyticEuropeanEngine::new();
    let requests = load_requests(path)?;

    let mut reports = Vec::with_capacity(requests.len());
    for (i, request) in requests.iter().enumerate() {
        let name = request
            .label
            .clone()
            .unwrap_or_else(|| format!("request #{}", i + 1));

        match request.evaluate(&engine) {
            Ok(report) => {
                println!(
                    "{}: {:?} K={:.2} T={:.4}y -> ${:.4}",
                    name,
                    report.contract.option_type,
                    report.contract.strike,
                    report.contract.maturity_in_years,
                    report.present_value
                );
                reports.push(report);
            }
            Err(e) => warn!("Skipping {}: {}", name, e),
        }
    }

    info!("Priced {} of {} requests", reports.len(), requests.len());

    if let Some(output) = output {
        save_reports(output, &reports)?;
    }

    Ok(())
}

fn print_greeks(label: &str, greeks: &Greeks) {
    println!("\n{} Greeks:", label);
    println!("  Delta: {:.4}", greeks.delta);
    println!("  Gamma: {:.6}", greeks.gamma);
    println!("  Theta: {:.4} (per day: {:.4})", greeks.theta, greeks.theta_per_day());
    println!("  Vega: {:.4} (per 1%: {:.4})", greeks.vega, greeks.vega_per_point());
    println!("  Rho: {:.4}", greeks.rho);
}
