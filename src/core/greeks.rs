//! Option Greeks
//!
//! First order sensitivities, plus gamma.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS
    pub delta: f64,
    /// Gamma: d²V/dS²
    pub gamma: f64,
    /// Theta: -dV/dT, per year
    pub theta: f64,
    /// Vega: dV/dσ, per unit of volatility
    pub vega: f64,
    /// Rho: dV/dr, per unit of rate
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Theta per calendar day (Actual/365)
    pub fn theta_per_day(&self) -> f64 {
        self.theta / 365.0
    }

    /// Vega per 1% volatility move
    pub fn vega_per_point(&self) -> f64 {
        self.vega / 100.0
    }

    /// Scale Greeks by a factor (e.g., for notional)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }
}
