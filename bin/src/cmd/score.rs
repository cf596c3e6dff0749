//! Score command implementation.

use anyhow::{Result, bail};
use fundscore_av::AlphaVantageClient;
use fundscore_batch::{BatchConfig, BatchRunner, MemorySink, Universe, UniverseFilter};
use fundscore_combine::WeightedSumScorer;
use fundscore_metrics::{EarningsBasis, EngineConfig, MetricEngine};
use fundscore_traits::{OutputRow, RowSink};

/// Options for the score command.
#[derive(Debug)]
pub(crate) struct ScoreOptions {
    pub(crate) breakdown: bool,
    pub(crate) eps_min_quarters: usize,
    pub(crate) annual_eps: bool,
    pub(crate) format: String,
    pub(crate) delay_ms: u64,
}

impl ScoreOptions {
    fn engine(&self) -> MetricEngine {
        let basis = if self.annual_eps {
            EarningsBasis::Annual
        } else {
            EarningsBasis::Quarterly
        };
        MetricEngine::new(
            EngineConfig::default()
                .with_eps_min_quarters(self.eps_min_quarters)
                .with_earnings_basis(basis),
        )
    }

    /// Symbols named on the command line are scored whatever their listing.
    fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            delay_ms: self.delay_ms,
            filter: UniverseFilter::any(),
            limit: None,
        }
    }
}

/// Fetch, evaluate and score each symbol, then print the results.
pub(crate) async fn show_scores(symbols: &[String], options: &ScoreOptions) -> Result<()> {
    let json = match options.format.as_str() {
        "text" => false,
        "json" => true,
        other => bail!("Unknown format '{other}' (expected text or json)"),
    };

    let client = AlphaVantageClient::from_env()?;
    let universe = Universe::from_symbols(symbols);
    let scorer = WeightedSumScorer::default();

    if !json {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                      Composite Scores                        ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Fetching statements for {} symbol(s)...\n", universe.len());
    }

    let runner = BatchRunner::new(client, scorer.clone(), options.batch_config())
        .with_engine(options.engine());
    let mut sink = MemorySink::new();
    let report = runner.run(&universe, &mut sink).await;

    for failure in &report.failures {
        eprintln!("Skipping {}: {}", failure.symbol, failure.reason);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(sink.rows())?);
        return Ok(());
    }

    if sink.rows_written() == 0 {
        println!("No symbols could be scored.\n");
        return Ok(());
    }

    if options.breakdown {
        for row in sink.rows() {
            print_breakdown(&scorer, row);
        }
    }

    print_ranked(&sink)?;
    Ok(())
}

fn print_breakdown(scorer: &WeightedSumScorer, row: &OutputRow) {
    println!("{} ({})", row.ticker, row.name);
    println!("{}", "-".repeat(60));
    println!(
        "  {:<32} {:>12} {:>7} {:>12}",
        "Component", "Value", "Weight", "Contrib."
    );
    for component in scorer.components(&row.metrics) {
        println!(
            "  {:<32} {:>12.4} {:>7} {:>12.4}",
            component.name,
            component.value,
            component.weight,
            component.contribution()
        );
    }
    println!("  {:<32} {:>33.2}", "Composite score", row.composite_score);
    println!();
}

/// Print sink rows as a table, highest composite score first.
pub(crate) fn print_ranked(sink: &MemorySink) -> Result<()> {
    let ranked = sink.ranked_frame()?;

    let tickers: Vec<&str> = ranked
        .column("ticker")
        .map_err(|e| anyhow::anyhow!("Missing ticker column: {e}"))?
        .as_materialized_series()
        .str()
        .map_err(|e| anyhow::anyhow!("Ticker column error: {e}"))?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();

    let names: Vec<&str> = ranked
        .column("name")
        .map_err(|e| anyhow::anyhow!("Missing name column: {e}"))?
        .as_materialized_series()
        .str()
        .map_err(|e| anyhow::anyhow!("Name column error: {e}"))?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();

    let scores: Vec<f64> = ranked
        .column("composite_score")
        .map_err(|e| anyhow::anyhow!("Missing score column: {e}"))?
        .as_materialized_series()
        .f64()
        .map_err(|e| anyhow::anyhow!("Score column error: {e}"))?
        .into_iter()
        .map(|s| s.unwrap_or(f64::NAN))
        .collect();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("RANKING ({} symbols)", ranked.height());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("{:<4} {:<10} {:<32} {:>12}", "#", "Symbol", "Name", "Score");
    println!("{}", "─".repeat(60));
    for (rank, ((ticker, name), score)) in tickers.iter().zip(&names).zip(&scores).enumerate() {
        let name: String = name.chars().take(32).collect();
        println!("{:<4} {:<10} {:<32} {:>12.2}", rank + 1, ticker, name, score);
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(delay_ms: u64) -> ScoreOptions {
        ScoreOptions {
            breakdown: false,
            eps_min_quarters: 12,
            annual_eps: false,
            format: "text".to_string(),
            delay_ms,
        }
    }

    #[test]
    fn test_batch_config_paces_requests() {
        let config = options(15_000).batch_config();
        assert_eq!(config.delay_ms, 15_000);
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_batch_config_accepts_any_listing() {
        let config = options(0).batch_config();
        let universe = Universe::from_symbols(["ibm", " aapl ", ""]);
        assert_eq!(universe.filtered(&config.filter).len(), 2);
    }

    #[test]
    fn test_annual_eps_engine() {
        let mut opts = options(0);
        opts.annual_eps = true;
        assert_eq!(opts.engine().config().earnings_basis, EarningsBasis::Annual);
    }
}
