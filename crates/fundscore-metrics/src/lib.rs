//! Metric engine for fundscore.
//!
//! This crate derives 18 fundamental metrics from one ticker's
//! [`RawBundle`](fundscore_traits::RawBundle):
//! - Market: latest price, market cap, P/E, share-count predicate
//! - Profitability: trailing-twelve-month (TTM) operating income, net income,
//!   revenue and gross margin
//! - Returns: ROE, ROA, equity multiplier, "current ROE is highest"
//! - Growth: book-value and revenue growth counts, revenue and operating
//!   income growth rates
//! - Earnings: years with positive EPS
//!
//! Every metric is a total function of the bundle. Short history, missing
//! fields and zero denominators resolve to `None` instead of an error.
//!
//! # Example
//!
//! ```ignore
//! use fundscore_metrics::{MetricEngine, EngineConfig};
//!
//! let engine = MetricEngine::new(EngineConfig::default());
//! let metrics = engine.evaluate(&bundle);
//! println!("revenue TTM: {:?}", metrics.revenue_ttm);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod align;
pub mod earnings;
pub mod engine;
pub mod growth;
pub mod market;
pub mod profitability;
pub mod registry;
pub mod returns;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export key types
pub use engine::{EarningsBasis, EngineConfig, MetricEngine};
pub use registry::{MetricCategory, MetricInfo, MetricKind};
