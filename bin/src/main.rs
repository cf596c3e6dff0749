//! fundscore CLI binary.
//!
//! Provides a command-line interface for fundamental screening: list the
//! metrics, score a handful of tickers, or run a full universe batch.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fundscore")]
#[command(about = "Fundamental metrics and composite scores for listed equities", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available metrics
    Metrics {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute metrics and composite scores for symbols
    Score {
        /// Ticker symbols
        #[arg(value_delimiter = ',', required = true)]
        symbols: Vec<String>,

        /// Show the weighted components of each score
        #[arg(short, long)]
        breakdown: bool,

        /// Quarters of EPS history required before EPS years are counted
        #[arg(long, default_value = "12")]
        eps_min_quarters: usize,

        /// Count positive EPS years from annual reports
        #[arg(long)]
        annual_eps: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Pause between tickers in milliseconds
        #[arg(long, default_value = "5000")]
        delay_ms: u64,
    },

    /// Score every listing in a universe
    Run {
        /// Listing-status CSV (defaults to the provider's listing)
        #[arg(short, long, conflicts_with = "symbols")]
        universe: Option<PathBuf>,

        /// Explicit ticker symbols instead of a listing
        #[arg(short, long, value_delimiter = ',')]
        symbols: Vec<String>,

        /// CSV file to append rows to (prints a ranked table when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pause between tickers in milliseconds
        #[arg(long, default_value = "5000")]
        delay_ms: u64,

        /// Maximum number of tickers to evaluate
        #[arg(short, long)]
        limit: Option<usize>,

        /// Required asset type
        #[arg(long, default_value = "Stock")]
        asset_type: String,

        /// Required listing status
        #[arg(long, default_value = "Active")]
        status: String,

        /// Evaluate every listing regardless of asset type and status
        #[arg(long)]
        all: bool,

        /// Quarters of EPS history required before EPS years are counted
        #[arg(long, default_value = "12")]
        eps_min_quarters: usize,
    },
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: info).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Metrics { category, verbose } => {
            cmd::metrics::list_metrics(category, verbose)?;
        }
        Commands::Score {
            symbols,
            breakdown,
            eps_min_quarters,
            annual_eps,
            format,
            delay_ms,
        } => {
            let options = cmd::score::ScoreOptions {
                breakdown,
                eps_min_quarters,
                annual_eps,
                format,
                delay_ms,
            };
            cmd::score::show_scores(&symbols, &options).await?;
        }
        Commands::Run {
            universe,
            symbols,
            output,
            delay_ms,
            limit,
            asset_type,
            status,
            all,
            eps_min_quarters,
        } => {
            let options = cmd::run::RunOptions {
                universe,
                symbols,
                output,
                delay_ms,
                limit,
                asset_type,
                status,
                all,
                eps_min_quarters,
            };
            cmd::run::run_batch(options).await?;
        }
    }

    Ok(())
}
