//! Pricing engines
//!
//! - `PricingEngine`: the engine interface
//! - `AnalyticEuropeanEngine`: closed-form Black-Scholes-Merton

pub mod engine;

pub use engine::*;
