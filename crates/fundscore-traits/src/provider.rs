//! Bundle provider trait for the data-fetch collaborator.

use crate::{RawBundle, Result};
use async_trait::async_trait;
use std::fmt::Debug;

/// Supplies the statement bundle for one ticker.
///
/// The metric engine never performs I/O; everything it reads arrives through
/// an implementation of this trait. Implementations own credentials,
/// timeouts and request pacing, and report any failure as an error so the
/// caller can skip the ticker.
#[async_trait]
pub trait BundleProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "Alpha Vantage").
    fn name(&self) -> &str;

    /// Fetches every source the engine needs for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error if any source cannot be fetched or parsed.
    async fn fetch_bundle(&self, symbol: &str) -> Result<RawBundle>;
}
