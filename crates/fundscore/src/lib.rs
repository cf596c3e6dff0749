#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # fundscore
//!
//! Fundamental metrics and composite scoring for listed equities.
//!
//! fundscore is an umbrella crate that re-exports all fundscore sub-crates
//! for convenience. It derives 18 fundamental metrics per ticker from
//! statement data, folds them into a composite score, and runs the whole
//! pipeline over a ticker universe.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fundscore::prelude::*;
//! use fundscore::av::AlphaVantageClient;
//!
//! # async fn example() -> Result<()> {
//! let client = AlphaVantageClient::from_env()?;
//! let bundle = client.bundle("IBM").await?;
//!
//! let metrics = MetricEngine::default().evaluate(&bundle);
//! let score = WeightedSumScorer::default().score(&metrics);
//! println!("IBM: {score}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Data model, error type and seam traits ([`Scorer`], [`BundleProvider`], [`RowSink`])
//! - [`metrics`] - The metric engine and metric registry
//! - [`combine`] - Composite scoring strategies
//! - [`av`] - Alpha Vantage client
//! - [`batch`] - Universe, batch runner and sinks
//!
//! ## Architecture
//!
//! Data flows one way:
//!
//! 1. A **provider** fetches a [`RawBundle`] for one ticker
//! 2. The **metric engine** turns it into a [`MetricSet`]
//! 3. A **scorer** folds the metric set into one number
//! 4. The **batch runner** appends the resulting row to a **sink**

/// Version information for the fundscore crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core data model and trait definitions.
///
/// - [`Scorer`] - Folds a metric set into a composite score
/// - [`BundleProvider`] - Fetches the statement bundle for a ticker
/// - [`RowSink`] - Append-only destination for output rows
pub mod traits {
    pub use fundscore_traits::*;
}

// Re-export core traits at top level for convenience
pub use fundscore_traits::{BundleProvider, RowSink, Scorer};

// Re-export error types
pub use fundscore_traits::{FundscoreError, Result};

// Re-export common types
pub use fundscore_traits::{MetricSet, OutputRow, RawBundle, Symbol};

// ============================================================================
// Metric Engine
// ============================================================================

/// The metric engine.
///
/// ## Metric Categories
///
/// - **Market**: latest price, market cap, P/E, share count
/// - **Profitability**: TTM operating income, net income, revenue, gross margin
/// - **Returns**: TTM ROE and ROA, whether the current ROE is the highest
/// - **Leverage**: equity multiplier
/// - **Growth**: book value and revenue growth counts and rates
/// - **Earnings**: years with positive EPS
///
/// # Example
///
/// ```ignore
/// use fundscore::metrics::{EngineConfig, MetricEngine};
/// use fundscore::metrics::registry::available_metrics;
///
/// let engine = MetricEngine::new(EngineConfig::default().with_eps_min_quarters(8));
/// for info in available_metrics() {
///     println!("{:<32} {}", info.name, info.description);
/// }
/// ```
pub mod metrics {
    pub use fundscore_metrics::*;
}

// ============================================================================
// Scoring
// ============================================================================

/// Composite scoring strategies.
///
/// This module contains implementations of the [`Scorer`] trait.
///
/// ## Available Scorers
///
/// - **WeightedSumScorer**: Fixed-weight sum of 15 metric-derived components
pub mod combine {
    pub use fundscore_combine::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// Alpha Vantage API client.
///
/// ## Setup
///
/// 1. Get a free API key at <https://www.alphavantage.co/>
/// 2. Set the `ALPHA_VANTAGE_API_KEY` environment variable or add it to a `.env` file
pub mod av {
    pub use fundscore_av::*;
}

// ============================================================================
// Batch Runs
// ============================================================================

/// Ticker universe, batch runner and sinks.
pub mod batch {
    pub use fundscore_batch::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use fundscore::prelude::*;
/// ```
///
/// This brings into scope:
/// - Core traits: [`Scorer`], [`BundleProvider`], [`RowSink`]
/// - Engine and scorer: [`MetricEngine`](crate::metrics::MetricEngine),
///   [`WeightedSumScorer`](crate::combine::WeightedSumScorer)
/// - Common types: [`RawBundle`], [`MetricSet`], [`OutputRow`]
/// - Error types: [`Result`], [`FundscoreError`]
pub mod prelude {
    pub use crate::combine::WeightedSumScorer;
    pub use crate::metrics::{EngineConfig, MetricEngine};
    pub use crate::{BundleProvider, RowSink, Scorer};
    pub use crate::{FundscoreError, MetricSet, OutputRow, RawBundle, Result};
}

// ============================================================================
// Tests
// ============================================================================
