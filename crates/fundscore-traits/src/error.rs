//! Error types for fundscore.
//!
//! Metric computation itself never fails: missing history, malformed fields
//! and zero denominators resolve to `None` inside the engine. The variants
//! here cover the collaborators around it (fetching bundles, reading the
//! ticker universe, writing rows) and startup configuration.

use thiserror::Error;

/// The main error type for fundscore operations.
#[derive(Debug, Error)]
pub enum FundscoreError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error writing an output row.
    #[error("Sink error: {0}")]
    Sink(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for FundscoreError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for FundscoreError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for fundscore operations.
pub type Result<T> = std::result::Result<T, FundscoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FundscoreError::DataFetch("timeout".to_string());
        assert_eq!(err.to_string(), "Data fetch error: timeout");

        let err = FundscoreError::Sink("disk full".to_string());
        assert_eq!(err.to_string(), "Sink error: disk full");
    }

    #[test]
    fn test_error_from_str() {
        let err: FundscoreError = "boom".into();
        assert!(matches!(err, FundscoreError::Other(ref s) if s == "boom"));
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FundscoreError = io.into();
        assert!(matches!(err, FundscoreError::Io(_)));
    }
}
