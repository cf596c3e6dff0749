//! Batch run report.

use fundscore_traits::Symbol;
use serde::{Deserialize, Serialize};

/// A ticker that was skipped because fetching, scoring or writing failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerFailure {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Error message.
    pub reason: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Rows appended to the sink.
    pub processed: usize,
    /// Listings excluded by the universe filter.
    pub skipped: usize,
    /// Tickers that failed, in run order.
    pub failures: Vec<TickerFailure>,
}

impl BatchReport {
    /// Tickers the runner attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.processed + self.failures.len()
    }

    /// Whether every attempted ticker produced a row.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
