//! Output rows handed to sinks.
//!
//! A row is order-significant: `ticker, name`, the 18 metrics in a fixed
//! order, then the composite score. [`OUTPUT_COLUMNS`] names the columns.

use crate::{MetricSet, Result, Symbol};
use derive_more::Display;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Column names of an output row, in order.
pub const OUTPUT_COLUMNS: [&str; 21] = [
    "ticker",
    "name",
    "latest_price",
    "market_cap",
    "pe_ratio",
    "operating_income_ttm",
    "net_income_ttm",
    "roe_ttm",
    "roa_ttm",
    "revenue_ttm",
    "gross_margin_ttm",
    "book_value_growth_years",
    "revenue_growth_years",
    "quarterly_revenue_growth_count",
    "revenue_growth_percent",
    "shares_under_500mm",
    "equity_multiplier",
    "operating_income_growth_rate",
    "eps_positive_years",
    "current_roe_highest",
    "composite_score",
];

/// A single output cell.
#[derive(Debug, Clone, PartialEq, Display, Serialize, Deserialize)]
pub enum Cell {
    /// Free text (ticker, name).
    #[display("{_0}")]
    Text(String),
    /// A numeric metric.
    #[display("{_0}")]
    Number(f64),
    /// A growth or year count.
    #[display("{_0}")]
    Count(u32),
    /// A predicate.
    #[display("{_0}")]
    Flag(bool),
    /// A metric that did not resolve.
    #[display("")]
    Empty,
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }
}

impl From<Option<u32>> for Cell {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Empty, Self::Count)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// One ticker's result: identity, metrics and composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Ticker symbol.
    pub ticker: Symbol,
    /// Company name.
    pub name: String,
    /// Computed metrics.
    pub metrics: MetricSet,
    /// Composite score.
    pub composite_score: f64,
}

impl OutputRow {
    /// Create a row.
    #[must_use]
    pub fn new(
        ticker: impl Into<Symbol>,
        name: impl Into<String>,
        metrics: MetricSet,
        composite_score: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            metrics,
            composite_score,
        }
    }

    /// The row's cells, in [`OUTPUT_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        let m = &self.metrics;
        vec![
            Cell::Text(self.ticker.clone()),
            Cell::Text(self.name.clone()),
            m.latest_price.into(),
            m.market_cap.into(),
            m.pe_ratio.into(),
            m.operating_income_ttm.into(),
            m.net_income_ttm.into(),
            m.roe_ttm.into(),
            m.roa_ttm.into(),
            m.revenue_ttm.into(),
            m.gross_margin_ttm.into(),
            m.book_value_growth_years.into(),
            m.revenue_growth_years.into(),
            m.quarterly_revenue_growth_count.into(),
            m.revenue_growth_percent.into(),
            m.shares_under_500mm.into(),
            m.equity_multiplier.into(),
            m.operating_income_growth_rate.into(),
            m.eps_positive_years.into(),
            m.current_roe_highest.into(),
            Cell::Number(self.composite_score),
        ]
    }
}

/// Build a DataFrame with one row per [`OutputRow`], columns in
/// [`OUTPUT_COLUMNS`] order. Unresolved metrics become nulls.
///
/// # Errors
///
/// Returns an error if Polars fails to assemble the frame.
pub fn rows_to_frame(rows: &[OutputRow]) -> Result<DataFrame> {
    let number = |f: fn(&MetricSet) -> Option<f64>| -> Vec<Option<f64>> {
        rows.iter().map(|r| f(&r.metrics)).collect()
    };
    let count = |f: fn(&MetricSet) -> Option<u32>| -> Vec<Option<i64>> {
        rows.iter().map(|r| f(&r.metrics).map(i64::from)).collect()
    };
    let flag = |f: fn(&MetricSet) -> bool| -> Vec<bool> {
        rows.iter().map(|r| f(&r.metrics)).collect()
    };

    let df = df! {
        OUTPUT_COLUMNS[0] => rows.iter().map(|r| r.ticker.as_str()).collect::<Vec<_>>(),
        OUTPUT_COLUMNS[1] => rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        OUTPUT_COLUMNS[2] => number(|m| m.latest_price),
        OUTPUT_COLUMNS[3] => number(|m| m.market_cap),
        OUTPUT_COLUMNS[4] => number(|m| m.pe_ratio),
        OUTPUT_COLUMNS[5] => number(|m| m.operating_income_ttm),
        OUTPUT_COLUMNS[6] => number(|m| m.net_income_ttm),
        OUTPUT_COLUMNS[7] => number(|m| m.roe_ttm),
        OUTPUT_COLUMNS[8] => number(|m| m.roa_ttm),
        OUTPUT_COLUMNS[9] => number(|m| m.revenue_ttm),
        OUTPUT_COLUMNS[10] => number(|m| m.gross_margin_ttm),
        OUTPUT_COLUMNS[11] => count(|m| m.book_value_growth_years),
        OUTPUT_COLUMNS[12] => count(|m| m.revenue_growth_years),
        OUTPUT_COLUMNS[13] => count(|m| m.quarterly_revenue_growth_count),
        OUTPUT_COLUMNS[14] => number(|m| m.revenue_growth_percent),
        OUTPUT_COLUMNS[15] => flag(|m| m.shares_under_500mm),
        OUTPUT_COLUMNS[16] => number(|m| m.equity_multiplier),
        OUTPUT_COLUMNS[17] => number(|m| m.operating_income_growth_rate),
        OUTPUT_COLUMNS[18] => count(|m| m.eps_positive_years),
        OUTPUT_COLUMNS[19] => flag(|m| m.current_roe_highest),
        OUTPUT_COLUMNS[20] => rows.iter().map(|r| r.composite_score).collect::<Vec<_>>(),
    }?;

    Ok(df)
}
