//! Market data for a single underlying
//!
//! Flat, continuously-compounded rates and a flat Black-Scholes volatility.

use serde::{Deserialize, Serialize};

use super::error::{PricerError, PricerResult};

/// Market snapshot used to price one contract
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Underlying spot price
    pub spot: f64,
    /// Annualized risk-free rate (continuous compounding, may be negative)
    pub risk_free_rate: f64,
    /// Annualized dividend yield (continuous compounding)
    #[serde(default)]
    pub dividend_yield: f64,
    /// Annualized Black-Scholes volatility
    pub volatility: f64,
}

impl MarketData {
    /// Market with zero dividend yield
    pub fn new(spot: f64, risk_free_rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            risk_free_rate,
            dividend_yield: 0.0,
            volatility,
        }
    }

    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Check market invariants: spot > 0, volatility >= 0, rates finite
    pub fn validate(&self) -> PricerResult<()> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricerError::invalid_input(format!(
                "spot must be positive, got {}",
                self.spot
            )));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(PricerError::invalid_input(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(PricerError::invalid_input(format!(
                "risk-free rate must be finite, got {}",
                self.risk_free_rate
            )));
        }
        if !self.dividend_yield.is_finite() {
            return Err(PricerError::invalid_input(format!(
                "dividend yield must be finite, got {}",
                self.dividend_yield
            )));
        }
        Ok(())
    }
}
