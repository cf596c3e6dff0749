//! Metric listing command implementation.

use anyhow::{Result, bail};
use fundscore_combine::COMPONENT_COUNT;
use fundscore_metrics::registry::{available_categories, metrics_by_category};

/// List available metrics, optionally filtered by category.
pub(crate) fn list_metrics(category: Option<String>, verbose: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Metrics                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let categories: Vec<_> = available_categories()
        .into_iter()
        .filter(|cat| {
            category.as_ref().is_none_or(|filter| {
                format!("{cat:?}")
                    .to_lowercase()
                    .contains(&filter.to_lowercase())
            })
        })
        .collect();

    if categories.is_empty() {
        bail!(
            "No metric category matches '{}'",
            category.unwrap_or_default()
        );
    }

    for cat in categories {
        println!("{cat:?}: {}", cat.description());
        println!("{}", "-".repeat(60));

        for info in metrics_by_category(&cat) {
            if verbose {
                println!(
                    "  {:32} - {} ({:?}, {}, min quarters: {})",
                    info.name, info.description, info.kind, info.source, info.min_quarters
                );
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if verbose {
        println!("The composite score is a weighted sum of {COMPONENT_COUNT} components.");
        println!();
    } else {
        println!("Use --verbose for detailed metric descriptions.\n");
    }

    Ok(())
}
