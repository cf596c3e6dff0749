//! Show how one ticker's composite score is assembled.
//!
//! This example demonstrates:
//! - Fetching a single statement bundle
//! - Evaluating the metric engine with annual EPS
//! - Listing each weighted score component

use fundscore::av::AlphaVantageClient;
use fundscore::metrics::EarningsBasis;
use fundscore::metrics::registry::available_metrics;
use fundscore::prelude::*;
use fundscore::traits::Cell;

/// Ticker to break down.
const SYMBOL: &str = "IBM";

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
    let bundle = client.bundle(SYMBOL).await?;

    let engine = MetricEngine::new(EngineConfig::default().with_earnings_basis(EarningsBasis::Annual));
    let metrics = engine.evaluate(&bundle);
    let scorer = WeightedSumScorer::default();
    let score = scorer.score(&metrics);
    let row = OutputRow::new(SYMBOL, bundle.overview.name().unwrap_or(SYMBOL), metrics, score);

    println!("\n{} ({})", row.ticker, row.name);
    println!("{}", "=".repeat(60));

    // cells 2..20 line up with the registry order
    for (info, cell) in available_metrics().iter().zip(row.cells().iter().skip(2)) {
        let value = match cell {
            Cell::Empty => "-".to_string(),
            other => other.to_string(),
        };
        println!("{:<32} {:>26}", info.name, value);
    }

    println!("\n{:<32} {:>8} {:>8} {:>10}", "Component", "Value", "Weight", "Contrib.");
    println!("{}", "-".repeat(60));
    for component in scorer.components(&row.metrics) {
        println!(
            "{:<32} {:>8.3} {:>8} {:>10.3}",
            component.name,
            component.value,
            component.weight,
            component.contribution()
        );
    }
    println!("{}", "-".repeat(60));
    println!("{:<32} {:>28.2}", "Composite score", row.composite_score);

    Ok(())
}
