//! # Euro Pricer - Closed-Form European Option Pricing
//!
//! Prices European vanilla calls and puts under the Black-Scholes-Merton
//! model with flat, continuously-compounded rates and dividend yield.
//!
//! ## Overview
//!
//! - **Black-Scholes kernel**: normal CDF/PDF, forward, discount factor, d1/d2
//! - **Engine**: validated pricing through the `PricingEngine` trait
//! - **Greeks**: analytic delta, gamma, vega, theta, rho
//! - **Day count**: Actual/365 Fixed year fractions from explicit dates
//! - **Requests**: JSON batches of contract/market pairs
//!
//! ## Usage
//!
//! ```rust
//! use euro_pricer::prelude::*;
//!
//! let engine = AnalyticEuropeanEngine::new();
//! let contract = OptionContract::call(100.0, 1.0);
//! let market = MarketData::new(100.0, 0.05, 0.20);
//!
//! let result = engine.price(&contract, &market).unwrap();
//! assert!((result.present_value - 10.4506).abs() < 1e-3);
//! ```
//!
//! ## What This Library Does NOT Do
//!
//! - Solve for implied volatility
//! - Price American or exotic exercise
//! - Handle discrete dividend schedules
//! - Keep a global evaluation date (valuation dates are always explicit)

pub mod core;
pub mod data;
pub mod models;
pub mod pricing;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        DayCount, Greeks, MarketData, OptionContract, OptionType, PricerError, PricerResult,
    };

    // Requests
    pub use crate::data::{load_requests, save_reports, PricingReport, PricingRequest};

    // Black-Scholes kernel
    pub use crate::models::{
        greeks as bs_greeks, norm_cdf, norm_pdf, price as bs_price,
    };

    // Engines
    pub use crate::pricing::{
        european_call_price, AnalyticEuropeanEngine, PricingEngine, PricingResult,
    };
}

// Re-export main types at crate root
pub use crate::core::{PricerError, PricerResult};
pub use crate::pricing::{AnalyticEuropeanEngine, PricingEngine, PricingResult};
