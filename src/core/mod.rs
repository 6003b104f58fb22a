//! Core data types for the European pricer
//!
//! Defines fundamental types:
//! - OptionContract: Strike, time to expiry, type (call/put)
//! - MarketData: Spot, rates, volatility
//! - Greeks: Price sensitivities
//! - DayCount: Calendar span to year fraction

pub mod day_count;
pub mod error;
pub mod greeks;
pub mod market;
pub mod option;

pub use day_count::*;
pub use error::*;
pub use greeks::*;
pub use market::*;
pub use option::*;
