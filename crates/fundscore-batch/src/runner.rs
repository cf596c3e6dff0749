//! Sequential per-ticker batch runner.

use crate::{
    config::BatchConfig,
    report::{BatchReport, TickerFailure},
    universe::{TickerListing, Universe},
};
use fundscore_metrics::MetricEngine;
use fundscore_traits::{BundleProvider, OutputRow, Result, RowSink, Scorer};
use tracing::{info, warn};

/// Evaluates a universe one ticker at a time.
///
/// For each listing that passes the filter: fetch the bundle, evaluate the
/// metrics, score them and append the row. A ticker whose fetch or write
/// fails is recorded in the report and skipped; the batch always runs to
/// the end. The configured delay is awaited between tickers, never inside
/// an evaluation.
#[derive(Debug)]
pub struct BatchRunner<P, S> {
    provider: P,
    scorer: S,
    engine: MetricEngine,
    config: BatchConfig,
}

impl<P: BundleProvider, S: Scorer> BatchRunner<P, S> {
    /// Create a runner with a default metric engine.
    #[must_use]
    pub fn new(provider: P, scorer: S, config: BatchConfig) -> Self {
        Self {
            provider,
            scorer,
            engine: MetricEngine::default(),
            config,
        }
    }

    /// Use a specific metric engine.
    #[must_use]
    pub fn with_engine(mut self, engine: MetricEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Batch configuration.
    #[must_use]
    pub const fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Fetch, evaluate and score one ticker.
    ///
    /// The row name is the listing name when known, else the overview name.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be fetched.
    pub async fn evaluate(&self, listing: &TickerListing) -> Result<OutputRow> {
        let bundle = self.provider.fetch_bundle(&listing.symbol).await?;
        let metrics = self.engine.evaluate(&bundle);
        let score = self.scorer.score(&metrics);

        let name = if listing.name.trim().is_empty() {
            bundle.overview.name().unwrap_or_default().to_string()
        } else {
            listing.name.clone()
        };

        Ok(OutputRow::new(listing.symbol.clone(), name, metrics, score))
    }

    /// Run the batch over `universe`, appending rows to `sink`.
    pub async fn run<K>(&self, universe: &Universe, sink: &mut K) -> BatchReport
    where
        K: RowSink + ?Sized,
    {
        let selected = universe.filtered(&self.config.filter);
        let mut report = BatchReport {
            skipped: universe.len() - selected.len(),
            ..Default::default()
        };
        let limit = self.config.limit.unwrap_or(usize::MAX);

        info!(
            "Evaluating {} of {} listings with {} / {}",
            selected.len().min(limit),
            universe.len(),
            self.provider.name(),
            self.scorer.name()
        );

        for (idx, listing) in selected.into_iter().take(limit).enumerate() {
            if idx > 0 && !self.config.delay().is_zero() {
                tokio::time::sleep(self.config.delay()).await;
            }

            info!("Processing {}", listing.symbol);
            let outcome = match self.evaluate(listing).await {
                Ok(row) => sink.append(&row).map(|()| row.composite_score),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(score) => {
                    report.processed += 1;
                    info!("Finished {} (score {score:.2})", listing.symbol);
                }
                Err(err) => {
                    warn!("Skipping {}: {err}", listing.symbol);
                    report.failures.push(TickerFailure {
                        symbol: listing.symbol.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            "Batch finished: {} rows, {} failures, {} filtered out",
            report.processed,
            report.failures.len(),
            report.skipped
        );
        report
    }
}
