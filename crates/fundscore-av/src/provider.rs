//! [`BundleProvider`] implementation backed by the Alpha Vantage client.

use crate::client::AlphaVantageClient;
use async_trait::async_trait;
use fundscore_traits::{BundleProvider, RawBundle};

#[async_trait]
impl BundleProvider for AlphaVantageClient {
    fn name(&self) -> &str {
        "alpha_vantage"
    }

    async fn fetch_bundle(&self, symbol: &str) -> fundscore_traits::Result<RawBundle> {
        Ok(self.bundle(symbol).await?)
    }
}
