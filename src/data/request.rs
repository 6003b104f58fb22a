//! Pricing request files
//!
//! A request file is a JSON array of contract/market pairs. Reports are
//! written back as JSON as well.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Greeks, MarketData, OptionContract, PricerResult};
use crate::pricing::PricingEngine;

/// One contract to price under one market snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Free-form label carried into the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub contract: OptionContract,
    pub market: MarketData,
}

/// Priced request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub contract: OptionContract,
    pub market: MarketData,
    pub present_value: f64,
    pub greeks: Greeks,
}

impl PricingRequest {
    pub fn new(contract: OptionContract, market: MarketData) -> Self {
        Self {
            label: None,
            contract,
            market,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Price and compute Greeks with the given engine
    pub fn evaluate<E: PricingEngine + ?Sized>(&self, engine: &E) -> PricerResult<PricingReport> {
        let result = engine.price(&self.contract, &self.market)?;
        let greeks = engine.greeks(&self.contract, &self.market)?;

        Ok(PricingReport {
            label: self.label.clone(),
            contract: self.contract,
            market: self.market,
            present_value: result.present_value,
            greeks,
        })
    }
}

/// Load a batch of requests from a JSON file
pub fn load_requests(path: impl AsRef<Path>) -> PricerResult<Vec<PricingRequest>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let requests: Vec<PricingRequest> = serde_json::from_str(&json)?;

    tracing::info!("Loaded {} pricing requests from {:?}", requests.len(), path);
    Ok(requests)
}

/// Write priced reports to a JSON file
pub fn save_reports(path: impl AsRef<Path>, reports: &[PricingReport]) -> PricerResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(reports)?;
    fs::write(path, json)?;

    tracing::info!("Wrote {} pricing reports to {:?}", reports.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OptionType, PricerError};
    use crate::pricing::AnalyticEuropeanEngine;
    use tempfile::tempdir;

    #[test]
    fn test_load_requests() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("requests.json");
        fs::write(
            &path,
            r#"[
                {
                    "label": "atm call",
                    "contract": {"strike": 100.0, "maturity_in_years": 1.0, "option_type": "call"},
                    "market": {"spot": 100.0, "risk_free_rate": 0.05, "volatility": 0.2}
                },
                {
                    "contract": {"strike": 95.0, "maturity_in_years": 0.5, "option_type": "put"},
                    "market": {"spot": 100.0, "risk_free_rate": 0.03, "dividend_yield": 0.01, "volatility": 0.3}
                }
            ]"#,
        )
        .unwrap();

        let requests = load_requests(&path).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].label.as_deref(), Some("atm call"));
        assert_eq!(requests[0].market.dividend_yield, 0.0);
        assert_eq!(requests[1].contract.option_type, OptionType::Put);
        assert_eq!(requests[1].market.dividend_yield, 0.01);
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = tempdir().unwrap();

        let missing = load_requests(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, PricerError::IO(_)));

        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not a list").unwrap();
        let bad = load_requests(&path).unwrap_err();
        assert!(matches!(bad, PricerError::Serialization(_)));
    }

    #[test]
    fn test_evaluate_and_save() {
        let temp_dir = tempdir().unwrap();
        let engine = AnalyticEuropeanEngine::new();

        let request = PricingRequest::new(
            OptionContract::call(100.0, 1.0),
            MarketData::new(100.0, 0.05, 0.2),
        )
        .with_label("reference");
        let report = request.evaluate(&engine).unwrap();
        assert!((report.present_value - 10.4506).abs() < 1e-3);
        assert!(report.greeks.delta > 0.5);

        let path = temp_dir.path().join("reports.json");
        save_reports(&path, &[report.clone()]).unwrap();
        let loaded: Vec<PricingReport> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, vec![report]);
    }

    #[test]
    fn test_evaluate_rejects_invalid() {
        let request = PricingRequest::new(
            OptionContract::call(100.0, 1.0),
            MarketData::new(-1.0, 0.05, 0.2),
        );
        let err = request.evaluate(&AnalyticEuropeanEngine).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
