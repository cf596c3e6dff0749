//! Batch run command implementation.

use crate::cmd::score::print_ranked;
use anyhow::Result;
use fundscore_av::AlphaVantageClient;
use fundscore_batch::{BatchConfig, BatchReport, BatchRunner, CsvSink, MemorySink, Universe, UniverseFilter};
use fundscore_combine::WeightedSumScorer;
use fundscore_metrics::{EngineConfig, MetricEngine};
use std::path::PathBuf;
use tracing::info;

/// Options for the run command.
#[derive(Debug)]
pub(crate) struct RunOptions {
    pub(crate) universe: Option<PathBuf>,
    pub(crate) symbols: Vec<String>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) delay_ms: u64,
    pub(crate) limit: Option<usize>,
    pub(crate) asset_type: String,
    pub(crate) status: String,
    pub(crate) all: bool,
    pub(crate) eps_min_quarters: usize,
}

impl RunOptions {
    fn batch_config(&self) -> BatchConfig {
        let filter = if self.all {
            UniverseFilter::any()
        } else {
            UniverseFilter {
                asset_type: Some(self.asset_type.clone()),
                status: Some(self.status.clone()),
            }
        };
        BatchConfig {
            delay_ms: self.delay_ms,
            filter,
            limit: self.limit,
        }
    }
}

/// Score a universe and write the rows to a CSV file or the terminal.
pub(crate) async fn run_batch(options: RunOptions) -> Result<()> {
    let client = AlphaVantageClient::from_env()?;

    let universe = if let Some(path) = &options.universe {
        info!("Reading universe from {}", path.display());
        Universe::from_path(path)?
    } else if !options.symbols.is_empty() {
        Universe::from_symbols(&options.symbols)
    } else {
        info!("Downloading listing status");
        Universe::from_csv_str(&client.listing_status().await?)?
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Batch Run                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = options.batch_config();
    println!("Listings: {}", universe.len());
    println!("Selected: {}", universe.filtered(&config.filter).len());
    println!("Delay:    {} ms", config.delay_ms);
    if let Some(limit) = config.limit {
        println!("Limit:    {limit}");
    }

    let engine =
        MetricEngine::new(EngineConfig::default().with_eps_min_quarters(options.eps_min_quarters));
    let runner =
        BatchRunner::new(client, WeightedSumScorer::default(), config).with_engine(engine);

    let report = if let Some(path) = &options.output {
        println!("Output:   {}\n", path.display());
        let mut sink = CsvSink::create(path)?;
        runner.run(&universe, &mut sink).await
    } else {
        println!();
        let mut sink = MemorySink::new();
        let report = runner.run(&universe, &mut sink).await;
        if report.processed > 0 {
            print_ranked(&sink)?;
        }
        report
    };

    print_report(&report);
    Ok(())
}

fn print_report(report: &BatchReport) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("SUMMARY");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("Attempted:    {}", report.attempted());
    println!("Rows written: {}", report.processed);
    println!("Filtered out: {}", report.skipped);
    println!("Failures:     {}", report.failures.len());

    if !report.is_clean() {
        println!();
        for failure in &report.failures {
            println!("  {:<10} {}", failure.symbol, failure.reason);
        }
    }
    println!();
}
