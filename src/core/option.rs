//! Option contract definitions
//!
//! European vanilla options: strike, time to expiry in years, call or put.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_count::DayCount;
use super::error::{PricerError, PricerResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot (or forward)
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// European option contract specification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub maturity_in_years: f64,
    /// Option type (Call/Put)
    pub option_type: OptionType,
}

impl OptionContract {
    pub fn new(strike: f64, maturity_in_years: f64, option_type: OptionType) -> Self {
        Self {
            strike,
            maturity_in_years,
            option_type,
        }
    }

    pub fn call(strike: f64, maturity_in_years: f64) -> Self {
        Self::new(strike, maturity_in_years, OptionType::Call)
    }

    pub fn put(strike: f64, maturity_in_years: f64) -> Self {
        Self::new(strike, maturity_in_years, OptionType::Put)
    }

    /// Contract expiring after a whole number of calendar days (Actual/365 Fixed)
    pub fn from_days(strike: f64, days: u32, option_type: OptionType) -> Self {
        Self::new(strike, DayCount::Actual365Fixed.from_days(days), option_type)
    }

    /// Contract from an explicit valuation date and maturity date
    pub fn from_dates(
        strike: f64,
        valuation_date: NaiveDate,
        maturity_date: NaiveDate,
        option_type: OptionType,
    ) -> PricerResult<Self> {
        if maturity_date < valuation_date {
            return Err(PricerError::invalid_input(format!(
                "maturity date {} is before valuation date {}",
                maturity_date, valuation_date
            )));
        }
        let maturity = DayCount::Actual365Fixed.year_fraction(valuation_date, maturity_date);
        Ok(Self::new(strike, maturity, option_type))
    }

    /// Check contract invariants: strike > 0, maturity >= 0
    pub fn validate(&self) -> PricerResult<()> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricerError::invalid_input(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if !self.maturity_in_years.is_finite() || self.maturity_in_years < 0.0 {
            return Err(PricerError::invalid_input(format!(
                "maturity must be non-negative, got {}",
                self.maturity_in_years
            )));
        }
        Ok(())
    }
}
