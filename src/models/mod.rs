//! Pricing Models
//!
//! Implements:
//! - Black-Scholes-Merton (closed-form European price and Greeks)

pub mod black_scholes;

pub use black_scholes::*;
