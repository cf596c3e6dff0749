//! Error types for the Alpha Vantage client.

use fundscore_traits::FundscoreError;
use thiserror::Error;

/// Errors that can occur when using the Alpha Vantage API.
#[derive(Debug, Error)]
pub enum AvError {
    /// Missing API key.
    #[error("ALPHA_VANTAGE_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("Alpha Vantage API error: {0}")]
    Api(String),

    /// Call frequency limit hit.
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// No data available.
    #[error("No data available for {0}")]
    NoData(String),

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}

impl From<AvError> for FundscoreError {
    fn from(err: AvError) -> Self {
        match err {
            AvError::MissingApiKey | AvError::Env(_) => Self::Config(err.to_string()),
            other => Self::DataFetch(other.to_string()),
        }
    }
}
