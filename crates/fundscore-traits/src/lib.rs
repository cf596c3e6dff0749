#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core data model and trait definitions for fundscore.
//!
//! This crate provides the types shared by every other fundscore crate:
//! the per-ticker statement bundle the metric engine reads, the metric set
//! it produces, the output row handed to sinks, and the seams between the
//! pure engine and its I/O collaborators.

/// The version of the fundscore-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod metrics;
pub mod provider;
pub mod row;
pub mod scorer;
pub mod sink;
pub mod types;

// Re-exports
pub use error::{FundscoreError, Result};
pub use metrics::MetricSet;
pub use provider::BundleProvider;
pub use row::{Cell, OUTPUT_COLUMNS, OutputRow, rows_to_frame};
pub use scorer::Scorer;
pub use sink::RowSink;
pub use types::{
    Balance, DailyBar, Flow, Overview, PeriodReport, RawBundle, StatementSeries, Symbol,
    parse_number,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
