//! Black-Scholes-Merton Model
//!
//! Provides:
//! - Standard normal distribution functions
//! - Discounted spot and strike legs under flat continuous rates
//! - Closed-form European option price
//! - Closed-form Greeks
//!
//! Prices are assembled from the discounted legs S·e^{-qT} and K·e^{-rT}
//! rather than from forward × discount factor, so extreme rates cannot form
//! an `inf * 0` product.
//!
//! These are unchecked kernels over raw inputs. Validation happens in
//! [`crate::pricing`], which is the entry point callers should use.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use statrs::function::erf::erfc;

use crate::core::{Greeks, OptionType};

/// Standard normal CDF
///
/// Evaluated through the complementary error function so that the left tail
/// keeps full relative precision: N(x) = erfc(-x / √2) / 2.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Discount factor: exp(-r * T)
pub fn discount_factor(rate: f64, time: f64) -> f64 {
    (-rate * time).exp()
}

/// Spot discounted at the dividend yield: S * exp(-q * T), equal to D * F
pub fn discounted_spot(spot: f64, div: f64, time: f64) -> f64 {
    spot * (-div * time).exp()
}

/// Leg value weighted by a probability. A zero weight contributes nothing even
/// when the leg itself has overflowed.
fn weighted(leg: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        leg * weight
    }
}

/// Total standard deviation of log returns: σ√T
pub fn std_dev(vol: f64, time: f64) -> f64 {
    vol * time.sqrt()
}

/// Black-Scholes d1 parameter
///
/// Uses ln(F/K) = ln(S/K) + (r - q)T so the forward itself is never formed.
pub fn d1(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    let std_dev = std_dev(vol, time);
    let log_moneyness = (spot / strike).ln() + (rate - div) * time;
    log_moneyness / std_dev + 0.5 * std_dev
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, div, vol, time) - std_dev(vol, time)
}

/// True when the variance term vanishes (including underflow of σ√T) and the
/// price collapses to discounted intrinsic value on the forward
pub fn is_degenerate(vol: f64, time: f64) -> bool {
    std_dev(vol, time) == 0.0
}

/// Black-Scholes European option price
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    div: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> f64 {
    let spot_leg = discounted_spot(spot, div, time);
    let strike_leg = strike * discount_factor(rate, time);

    if is_degenerate(vol, time) {
        return option_type.intrinsic(spot_leg, strike_leg);
    }

    let d1 = d1(spot, strike, rate, div, vol, time);
    let d2 = d1 - std_dev(vol, time);

    match option_type {
        OptionType::Call => weighted(spot_leg, norm_cdf(d1)) - weighted(strike_leg, norm_cdf(d2)),
        OptionType::Put => weighted(strike_leg, norm_cdf(-d2)) - weighted(spot_leg, norm_cdf(-d1)),
    }
}

/// Black-Scholes Greeks
pub fn greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    div: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> Greeks {
    let phi = option_type.phi();
    let df = discount_factor(rate, time);
    let div_factor = (-div * time).exp();

    if is_degenerate(vol, time) {
        // Value is phi * (S e^{-qT} - K e^{-rT}) when in the money, else zero
        let spot_leg = spot * div_factor;
        let strike_leg = strike * df;
        let itm = match option_type {
            OptionType::Call => spot_leg > strike_leg,
            OptionType::Put => spot_leg < strike_leg,
        };
        if !itm {
            return Greeks::default();
        }
        let delta = phi * div_factor;
        let theta = phi * (div * spot_leg - rate * strike_leg);
        let rho = phi * time * strike_leg;
        return Greeks::new(delta, 0.0, theta, 0.0, rho);
    }

    let sqrt_t = time.sqrt();
    let std_dev = std_dev(vol, time);
    let d1 = d1(spot, strike, rate, div, vol, time);
    let d2 = d1 - std_dev;
    let pdf_d1 = norm_pdf(d1);

    let nd1 = norm_cdf(phi * d1);
    let nd2 = norm_cdf(phi * d2);

    let delta = phi * div_factor * nd1;
    let gamma = div_factor * pdf_d1 / (spot * std_dev);
    let vega = spot * div_factor * pdf_d1 * sqrt_t;

    let term1 = -spot * div_factor * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta = term1 - phi * rate * strike * df * nd2 + phi * div * spot * div_factor * nd1;

    let rho = phi * strike * time * df * nd2;

    Greeks::new(delta, gamma, theta, vega, rho)
}
