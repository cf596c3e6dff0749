//! Batch orchestration for fundscore.
//!
//! This crate walks a ticker universe one symbol at a time: fetch the
//! bundle, evaluate the metrics, score them, and append the row to a sink.
//! A failing ticker is logged and recorded, never fatal to the batch.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fundscore_av::AlphaVantageClient;
//! use fundscore_batch::{BatchConfig, BatchRunner, CsvSink, Universe};
//! use fundscore_combine::WeightedSumScorer;
//!
//! let client = AlphaVantageClient::from_env()?;
//! let universe = Universe::from_csv_str(&client.listing_status().await?)?;
//! let mut sink = CsvSink::create("scores.csv")?;
//!
//! let runner = BatchRunner::new(client, WeightedSumScorer::default(), BatchConfig::default());
//! let report = runner.run(&universe, &mut sink).await;
//! println!("{} rows written, {} failures", report.processed, report.failures.len());
//! ```

mod config;
mod report;
mod runner;
mod sink;
mod universe;

pub use config::{BatchConfig, UniverseFilter};
pub use report::{BatchReport, TickerFailure};
pub use runner::BatchRunner;
pub use sink::{CsvSink, MemorySink};
pub use universe::{TickerListing, Universe};
