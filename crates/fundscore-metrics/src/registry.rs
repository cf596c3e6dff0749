//! Metric registry for discovering and categorizing the computed metrics.
//!
//! The registry lists every metric the engine produces, in output-column
//! order, with the history each one needs.

use serde::{Deserialize, Serialize};

/// Metric category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    /// Price and overview metrics
    Market,
    /// Trailing income and margin metrics
    Profitability,
    /// Return on capital metrics
    Returns,
    /// Balance-sheet leverage metrics
    Leverage,
    /// Multi-year growth metrics
    Growth,
    /// Earnings-per-share metrics
    Earnings,
}

impl MetricCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Market => "Price, valuation and share-count data from the overview",
            Self::Profitability => "Trailing-twelve-month income and margins",
            Self::Returns => "Net income relative to equity and assets",
            Self::Leverage => "Balance-sheet leverage",
            Self::Growth => "Year-over-year book value, revenue and income growth",
            Self::Earnings => "Earnings-per-share consistency",
        }
    }

    /// Parse a category name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        available_categories()
            .into_iter()
            .find(|c| format!("{c:?}").eq_ignore_ascii_case(name.trim()))
    }
}

/// Value kind of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Currency amount
    Amount,
    /// Dimensionless ratio
    Ratio,
    /// Percentage
    Percent,
    /// Count of years or quarters
    Count,
    /// Boolean predicate
    Flag,
}

/// Metadata about a metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricInfo {
    /// Unique identifier, also the output column name
    pub name: &'static str,

    /// Category classification
    pub category: MetricCategory,

    /// Value kind
    pub kind: MetricKind,

    /// Human-readable description
    pub description: &'static str,

    /// Quarterly history required to resolve (0 when not history-based)
    pub min_quarters: usize,

    /// Source statement(s) the metric reads
    pub source: &'static str,
}

/// Get information about all available metrics, in output-column order.
#[must_use]
pub fn available_metrics() -> Vec<MetricInfo> {
    vec![
        // Market
        MetricInfo {
            name: "latest_price",
            category: MetricCategory::Market,
            kind: MetricKind::Amount,
            description: "Close of the most recent daily bar",
            min_quarters: 0,
            source: "daily prices",
        },
        MetricInfo {
            name: "market_cap",
            category: MetricCategory::Market,
            kind: MetricKind::Amount,
            description: "Market capitalization",
            min_quarters: 0,
            source: "overview",
        },
        MetricInfo {
            name: "pe_ratio",
            category: MetricCategory::Market,
            kind: MetricKind::Ratio,
            description: "Price/earnings ratio",
            min_quarters: 0,
            source: "overview",
        },
        // Profitability
        MetricInfo {
            name: "operating_income_ttm",
            category: MetricCategory::Profitability,
            kind: MetricKind::Amount,
            description: "Operating income over the last four quarters",
            min_quarters: 4,
            source: "income statement",
        },
        MetricInfo {
            name: "net_income_ttm",
            category: MetricCategory::Profitability,
            kind: MetricKind::Amount,
            description: "Net income over the last four quarters",
            min_quarters: 4,
            source: "income statement",
        },
        // Returns
        MetricInfo {
            name: "roe_ttm",
            category: MetricCategory::Returns,
            kind: MetricKind::Ratio,
            description: "TTM net income over latest shareholder equity",
            min_quarters: 4,
            source: "income statement, balance sheet",
        },
        MetricInfo {
            name: "roa_ttm",
            category: MetricCategory::Returns,
            kind: MetricKind::Ratio,
            description: "TTM net income over latest total assets",
            min_quarters: 4,
            source: "income statement, balance sheet",
        },
        MetricInfo {
            name: "revenue_ttm",
            category: MetricCategory::Profitability,
            kind: MetricKind::Amount,
            description: "Revenue over the last four quarters",
            min_quarters: 4,
            source: "income statement",
        },
        MetricInfo {
            name: "gross_margin_ttm",
            category: MetricCategory::Profitability,
            kind: MetricKind::Percent,
            description: "TTM gross profit as a percentage of TTM revenue",
            min_quarters: 4,
            source: "income statement",
        },
        // Growth
        MetricInfo {
            name: "book_value_growth_years",
            category: MetricCategory::Growth,
            kind: MetricKind::Count,
            description: "Years of the last 3 in which book value per share grew",
            min_quarters: 16,
            source: "balance sheet",
        },
        MetricInfo {
            name: "revenue_growth_years",
            category: MetricCategory::Growth,
            kind: MetricKind::Count,
            description: "Years of the last 3 in which year-boundary quarterly revenue grew",
            min_quarters: 16,
            source: "income statement",
        },
        MetricInfo {
            name: "quarterly_revenue_growth_count",
            category: MetricCategory::Growth,
            kind: MetricKind::Count,
            description: "Of the last 4 quarters, how many beat the same quarter a year earlier",
            min_quarters: 8,
            source: "income statement",
        },
        MetricInfo {
            name: "revenue_growth_percent",
            category: MetricCategory::Growth,
            kind: MetricKind::Percent,
            description: "TTM revenue growth over three years",
            min_quarters: 16,
            source: "income statement",
        },
        MetricInfo {
            name: "shares_under_500mm",
            category: MetricCategory::Market,
            kind: MetricKind::Flag,
            description: "Shares outstanding below 500 million",
            min_quarters: 0,
            source: "overview",
        },
        // Leverage
        MetricInfo {
            name: "equity_multiplier",
            category: MetricCategory::Leverage,
            kind: MetricKind::Ratio,
            description: "Latest total assets over latest shareholder equity",
            min_quarters: 1,
            source: "balance sheet",
        },
        MetricInfo {
            name: "operating_income_growth_rate",
            category: MetricCategory::Growth,
            kind: MetricKind::Percent,
            description: "TTM operating income growth over one year",
            min_quarters: 8,
            source: "income statement",
        },
        // Earnings
        MetricInfo {
            name: "eps_positive_years",
            category: MetricCategory::Earnings,
            kind: MetricKind::Count,
            description: "Years of the last 3 with positive reported EPS",
            min_quarters: 12,
            source: "earnings",
        },
        MetricInfo {
            name: "current_roe_highest",
            category: MetricCategory::Returns,
            kind: MetricKind::Flag,
            description: "Latest quarterly ROE is the highest of the trailing 4 quarters",
            min_quarters: 1,
            source: "income statement, balance sheet",
        },
    ]
}

/// Get all metrics in a specific category.
#[must_use]
pub fn metrics_by_category(category: &MetricCategory) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific metric by name.
#[must_use]
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics()
        .into_iter()
        .find(|info| info.name == name)
}

/// Get all metric categories with metrics.
#[must_use]
pub fn available_categories() -> Vec<MetricCategory> {
    let mut categories: Vec<_> = available_metrics()
        .into_iter()
        .map(|info| info.category)
        .collect();
    categories.sort_by_key(|c| format!("{c:?}"));
    categories.dedup();
    categories
}
