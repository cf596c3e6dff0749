//! Score a small watchlist and print it ranked.
//!
//! This example demonstrates:
//! - Building a universe from explicit symbols
//! - Running the batch runner against Alpha Vantage
//! - Collecting rows in memory and ranking them by composite score

use fundscore::av::AlphaVantageClient;
use fundscore::batch::{BatchConfig, BatchRunner, MemorySink, Universe};
use fundscore::prelude::*;

/// Symbols to score.
const WATCHLIST: &[&str] = &["IBM", "AAPL", "MSFT", "KO", "JNJ"];

/// Pause between tickers (free tier: 5 calls per minute).
const DELAY_MS: u64 = 15_000;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let client = AlphaVantageClient::from_env()
        .map_err(|_| "Failed to initialize client. Set ALPHA_VANTAGE_API_KEY environment variable.")?;

    let config = BatchConfig {
        delay_ms: DELAY_MS,
        ..Default::default()
    };
    let runner = BatchRunner::new(client, WeightedSumScorer::default(), config);
    let mut sink = MemorySink::new();

    let report = runner
        .run(&Universe::from_symbols(WATCHLIST), &mut sink)
        .await;

    let mut rows = sink.into_rows();
    rows.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));

    println!("\n{:<8} {:<36} {:>10} {:>10}", "Symbol", "Name", "ROE", "Score");
    println!("{}", "-".repeat(68));
    for row in &rows {
        let roe = row
            .metrics
            .roe_ttm
            .map_or_else(|| "-".to_string(), |v| format!("{:.1}%", v * 100.0));
        let name: String = row.name.chars().take(36).collect();
        println!(
            "{:<8} {:<36} {:>10} {:>10.2}",
            row.ticker, name, roe, row.composite_score
        );
    }

    for failure in &report.failures {
        println!("skipped {}: {}", failure.symbol, failure.reason);
    }

    Ok(())
}
