//! The metric set produced for one ticker.

use serde::{Deserialize, Serialize};

/// The 18 derived metrics for one ticker.
///
/// Every numeric field is independently nullable: `None` means the metric
/// could not be computed (insufficient history, zero denominator, missing
/// source field). The two predicates are plain booleans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    /// Close of the most recent daily bar.
    pub latest_price: Option<f64>,
    /// Market capitalization from the overview.
    pub market_cap: Option<f64>,
    /// Price/earnings ratio from the overview.
    pub pe_ratio: Option<f64>,
    /// Operating income over the trailing four quarters.
    pub operating_income_ttm: Option<f64>,
    /// Net income over the trailing four quarters.
    pub net_income_ttm: Option<f64>,
    /// Trailing net income over latest shareholder equity.
    pub roe_ttm: Option<f64>,
    /// Trailing net income over latest total assets.
    pub roa_ttm: Option<f64>,
    /// Revenue over the trailing four quarters.
    pub revenue_ttm: Option<f64>,
    /// Trailing gross profit as a percentage of trailing revenue.
    pub gross_margin_ttm: Option<f64>,
    /// Years (of the last 3) in which book value per share grew.
    pub book_value_growth_years: Option<u32>,
    /// Years (of the last 3) in which year-boundary quarterly revenue grew.
    pub revenue_growth_years: Option<u32>,
    /// Of the last 4 quarters, how many beat the same quarter a year earlier.
    pub quarterly_revenue_growth_count: Option<u32>,
    /// Trailing revenue growth over three years, in percent.
    pub revenue_growth_percent: Option<f64>,
    /// Whether overview shares outstanding is below 500 million.
    pub shares_under_500mm: bool,
    /// Latest total assets over latest shareholder equity.
    pub equity_multiplier: Option<f64>,
    /// Trailing operating income growth over one year, in percent.
    pub operating_income_growth_rate: Option<f64>,
    /// Years (of the last 3) with positive EPS.
    pub eps_positive_years: Option<u32>,
    /// Whether the latest quarterly ROE is the highest of the trailing periods.
    pub current_roe_highest: bool,
}

impl MetricSet {
    /// Number of metrics that resolved to a value.
    ///
    /// Predicates always count as resolved.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        let numbers = [
            self.latest_price,
            self.market_cap,
            self.pe_ratio,
            self.operating_income_ttm,
            self.net_income_ttm,
            self.roe_ttm,
            self.roa_ttm,
            self.revenue_ttm,
            self.gross_margin_ttm,
            self.revenue_growth_percent,
            self.equity_multiplier,
            self.operating_income_growth_rate,
        ];
        let counts = [
            self.book_value_growth_years,
            self.revenue_growth_years,
            self.quarterly_revenue_growth_count,
            self.eps_positive_years,
        ];
        numbers.iter().filter(|v| v.is_some()).count()
            + counts.iter().filter(|v| v.is_some()).count()
            + 2
    }
}
