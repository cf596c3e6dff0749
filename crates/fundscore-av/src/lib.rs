//! Alpha Vantage API client for fundscore.
//!
//! This crate fetches the five per-ticker sources the metric engine reads
//! from the [Alpha Vantage](https://www.alphavantage.co/) `query` endpoint,
//! plus the listing-status CSV used to build a ticker universe.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fundscore_av::AlphaVantageClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlphaVantageClient::from_env()?;
//!
//!     // Fetch one statement
//!     let income = client.income_statement("IBM").await?;
//!
//!     // Fetch everything the engine needs
//!     let bundle = client.bundle("IBM").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `ALPHA_VANTAGE_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! ALPHA_VANTAGE_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::{API_KEY_VAR, AlphaVantageClient};
pub use error::AvError;
pub use types::{DailyEntry, OutputSize, TimeSeriesDaily};

/// Result type for Alpha Vantage operations.
pub type Result<T> = std::result::Result<T, AvError>;
