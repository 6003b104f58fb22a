//! Error types for the European pricer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricerError {
    /// A contract or market precondition was violated
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type PricerResult<T> = Result<T, PricerError>;

impl PricerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for precondition violations, the only failure the engine itself produces
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<serde_json::Error> for PricerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PricerError::invalid_input("spot must be positive, got -1");
        assert_eq!(err.to_string(), "Invalid input: spot must be positive, got -1");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err: PricerError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert!(matches!(err, PricerError::Serialization(_)));
        assert!(!err.is_invalid_input());
    }
}
