//! Analytic European pricing engine
//!
//! Validates contract and market inputs, then evaluates the closed-form
//! Black-Scholes-Merton price. The engine holds no state, so one instance can
//! be shared across threads without coordination.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Greeks, MarketData, OptionContract, OptionType, PricerError, PricerResult};
use crate::models::black_scholes;

/// Rounding slack allowed below zero, relative to the larger discounted leg
const NEGATIVE_TOLERANCE: f64 = 1e-12;

/// Result of pricing one contract
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Fair value today, in the same unit as spot and strike
    pub present_value: f64,
}

/// A pricing engine for European vanilla options
pub trait PricingEngine {
    /// Present value of `contract` under `market`
    fn price(&self, contract: &OptionContract, market: &MarketData) -> PricerResult<PricingResult>;

    /// Sensitivities of the present value
    fn greeks(&self, contract: &OptionContract, market: &MarketData) -> PricerResult<Greeks>;
}

/// Closed-form Black-Scholes-Merton engine
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEuropeanEngine;

impl AnalyticEuropeanEngine {
    pub fn new() -> Self {
        Self
    }
}

fn validate(contract: &OptionContract, market: &MarketData) -> PricerResult<()> {
    contract.validate()?;
    market.validate()
}

impl PricingEngine for AnalyticEuropeanEngine {
    fn price(&self, contract: &OptionContract, market: &MarketData) -> PricerResult<PricingResult> {
        validate(contract, market)?;

        let time = contract.maturity_in_years;
        let npv = black_scholes::price(
            market.spot,
            contract.strike,
            market.risk_free_rate,
            market.dividend_yield,
            market.volatility,
            time,
            contract.option_type,
        );

        if !npv.is_finite() {
            return Err(PricerError::invalid_input(format!(
                "inputs produce a non-finite option value {} for {:?} under {:?}",
                npv, contract, market
            )));
        }

        // Floor rounding noise only; anything further below zero is a kernel bug
        let scale = black_scholes::discounted_spot(market.spot, market.dividend_yield, time)
            .max(contract.strike * black_scholes::discount_factor(market.risk_free_rate, time));
        debug_assert!(
            npv >= -NEGATIVE_TOLERANCE * scale,
            "negative option value {} for {:?} under {:?}",
            npv,
            contract,
            market
        );
        let present_value = if npv < 0.0 && npv >= -NEGATIVE_TOLERANCE * scale {
            0.0
        } else {
            npv
        };

        debug!(
            option_type = ?contract.option_type,
            strike = contract.strike,
            maturity = time,
            spot = market.spot,
            vol = market.volatility,
            present_value,
            "priced european option"
        );

        Ok(PricingResult { present_value })
    }

    fn greeks(&self, contract: &OptionContract, market: &MarketData) -> PricerResult<Greeks> {
        validate(contract, market)?;

        Ok(black_scholes::greeks(
            market.spot,
            contract.strike,
            market.risk_free_rate,
            market.dividend_yield,
            market.volatility,
            contract.maturity_in_years,
            contract.option_type,
        ))
    }
}

/// Price a European call with no dividends, expiring in `days` calendar days
/// (Actual/365 Fixed)
pub fn european_call_price(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    days: u32,
) -> PricerResult<f64> {
    let contract = OptionContract::from_days(strike, days, OptionType::Call);
    let market = MarketData::new(spot, rate, vol);
    AnalyticEuropeanEngine
        .price(&contract, &market)
        .map(|result| result.present_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_market() -> MarketData {
        MarketData::new(100.0, 0.05, 0.20)
    }

    #[test]
    fn test_reference_value() {
        let engine = AnalyticEuropeanEngine::new();
        let result = engine
            .price(&OptionContract::call(100.0, 1.0), &atm_market())
            .unwrap();
        assert!((result.present_value - 10.4506).abs() < 1e-3);
    }

    #[test]
    fn test_zero_volatility() {
        let engine = AnalyticEuropeanEngine::new();
        let market = MarketData::new(100.0, 0.05, 0.0);
        let result = engine.price(&OptionContract::call(90.0, 1.0), &market).unwrap();

        // Discounted intrinsic on the forward: e^{-r}(100 e^{r} - 90) = 100 - 90 e^{-r}
        let expected = 100.0 - 90.0 * (-0.05_f64).exp();
        assert!((result.present_value - expected).abs() < 1e-9);
        // Exceeds the discounted spot intrinsic
        assert!(result.present_value > (-0.05_f64).exp() * 10.0);
    }

    #[test]
    fn test_zero_maturity() {
        let engine = AnalyticEuropeanEngine::new();
        let market = atm_market();

        let call = engine.price(&OptionContract::call(110.0, 0.0), &market).unwrap();
        let put = engine.price(&OptionContract::put(110.0, 0.0), &market).unwrap();

        assert_eq!(call.present_value, 0.0);
        assert!((put.present_value - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        let engine = AnalyticEuropeanEngine::new();
        let contract = OptionContract::call(100.0, 1.0);

        let err = engine
            .price(&contract, &atm_market().with_spot(-1.0))
            .unwrap_err();
        assert!(matches!(err, PricerError::InvalidInput(_)));

        let market = MarketData::new(100.0, 0.05, -0.1);
        assert!(engine.price(&contract, &market).unwrap_err().is_invalid_input());

        let contract = OptionContract::put(-100.0, 1.0);
        assert!(engine.price(&contract, &atm_market()).unwrap_err().is_invalid_input());

        let contract = OptionContract::put(100.0, -1.0);
        assert!(engine.greeks(&contract, &atm_market()).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_deep_out_of_the_money_is_non_negative() {
        let engine = AnalyticEuropeanEngine::new();
        let market = MarketData::new(100.0, 0.05, 0.05);

        let call = engine.price(&OptionContract::call(1000.0, 0.1), &market).unwrap();
        let put = engine.price(&OptionContract::put(1.0, 0.1), &market).unwrap();

        assert!(call.present_value >= 0.0 && call.present_value < 1e-12);
        assert!(put.present_value >= 0.0 && put.present_value < 1e-12);
    }

    #[test]
    fn test_negative_rate() {
        let engine = AnalyticEuropeanEngine::new();
        let market = MarketData::new(100.0, -0.01, 0.2);

        let call = engine.price(&OptionContract::call(100.0, 2.0), &market).unwrap();
        let put = engine.price(&OptionContract::put(100.0, 2.0), &market).unwrap();

        let parity = 100.0 - 100.0 * (0.02_f64).exp();
        assert!((call.present_value - put.present_value - parity).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_rate() {
        let engine = AnalyticEuropeanEngine::new();
        let contract = OptionContract::call(100.0, 1.0);

        let market = MarketData::new(100.0, 800.0, 0.2);
        let call = engine.price(&contract, &market).unwrap();
        assert!((call.present_value - 100.0).abs() < 1e-9);

        let zero_vol = engine.price(&contract, &MarketData::new(100.0, 800.0, 0.0)).unwrap();
        assert!((zero_vol.present_value - 100.0).abs() < 1e-9);

        let put = engine.price(&OptionContract::put(100.0, 1.0), &market).unwrap();
        assert!(put.present_value >= 0.0 && put.present_value < 1e-9);
    }

    #[test]
    fn test_unrepresentable_value_is_rejected() {
        // S e^{-qT} overflows f64: reported, never clamped to zero
        let engine = AnalyticEuropeanEngine::new();
        let market = MarketData::new(100.0, 0.05, 0.2).with_dividend_yield(-800.0);
        let err = engine.price(&OptionContract::call(100.0, 1.0), &market).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_european_call_price() {
        // 30 days, 1% rate, 20% vol, at the money
        let price = european_call_price(100.0, 100.0, 0.01, 0.2, 30).unwrap();

        let contract = OptionContract::call(100.0, 30.0 / 365.0);
        let market = MarketData::new(100.0, 0.01, 0.2);
        let expected = AnalyticEuropeanEngine.price(&contract, &market).unwrap();

        assert_eq!(price, expected.present_value);
        assert!(price > 2.0 && price < 2.5);

        assert!(european_call_price(-1.0, 100.0, 0.01, 0.2, 30).is_err());
    }

    #[test]
    fn test_greeks_via_engine() {
        let engine = AnalyticEuropeanEngine::new();
        let g = engine
            .greeks(&OptionContract::call(100.0, 1.0), &atm_market())
            .unwrap();
        assert!(g.delta > 0.5 && g.delta < 0.7);
        assert!(g.gamma > 0.0);
    }
}
