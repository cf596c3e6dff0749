//! Batch configuration.

use crate::universe::TickerListing;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which listings a batch evaluates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseFilter {
    /// Required asset type, compared case-insensitively (default: "Stock")
    pub asset_type: Option<String>,

    /// Required listing status, compared case-insensitively (default: "Active")
    pub status: Option<String>,
}

impl Default for UniverseFilter {
    fn default() -> Self {
        Self {
            asset_type: Some("Stock".to_string()),
            status: Some("Active".to_string()),
        }
    }
}

impl UniverseFilter {
    /// A filter that accepts every listing.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            asset_type: None,
            status: None,
        }
    }

    /// Whether a listing passes the filter.
    #[must_use]
    pub fn matches(&self, listing: &TickerListing) -> bool {
        let accepts = |wanted: &Option<String>, actual: &str| {
            wanted
                .as_deref()
                .is_none_or(|w| w.eq_ignore_ascii_case(actual.trim()))
        };
        accepts(&self.asset_type, &listing.asset_type) && accepts(&self.status, &listing.status)
    }
}

/// Configuration for a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Pause between consecutive tickers in milliseconds (default: 5000)
    pub delay_ms: u64,

    /// Listing filter (default: active stocks)
    pub filter: UniverseFilter,

    /// Maximum number of tickers to evaluate (default: no limit)
    pub limit: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 5_000,
            filter: UniverseFilter::default(),
            limit: None,
        }
    }
}

impl BatchConfig {
    /// Pause between consecutive tickers.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
