//! Growth metrics over multi-year quarterly history.
//!
//! Year-over-year comparisons pair a quarter with the quarter four
//! positions older.

use crate::align::{
    QUARTERS_PER_YEAR, count_growth, percent_change, quarter_value, ttm, year_boundaries,
};
use fundscore_traits::{Balance, Flow, PeriodReport, RawBundle};

/// Fiscal years compared by the year-boundary growth counts.
pub const GROWTH_YEARS: usize = 4;

fn book_value_per_share(report: &PeriodReport) -> f64 {
    let equity = report.balance(Balance::ShareholderEquity).unwrap_or(0.0);
    let shares = report.balance(Balance::SharesOutstanding).unwrap_or(0.0);
    if shares == 0.0 {
        return 0.0;
    }
    let bvps = equity / shares;
    if bvps.is_finite() { bvps } else { 0.0 }
}

/// Years, of the last three, in which book value per share grew.
///
/// Reads the balance-sheet snapshots at quarters 0, 4, 8 and 12; requires
/// sixteen quarters of history.
#[must_use]
pub fn book_value_growth_years(bundle: &RawBundle) -> Option<u32> {
    let snapshots = year_boundaries(&bundle.balance_sheet.quarterly, GROWTH_YEARS)?;
    let bvps: Vec<f64> = snapshots.into_iter().map(book_value_per_share).collect();
    Some(count_growth(&bvps))
}

/// Years, of the last three, in which single-quarter revenue grew.
///
/// Compares the revenue of quarters 0, 4, 8 and 12 (not TTM); requires
/// sixteen quarters of history.
#[must_use]
pub fn revenue_growth_years(bundle: &RawBundle) -> Option<u32> {
    let snapshots = year_boundaries(&bundle.income_statement.quarterly, GROWTH_YEARS)?;
    let revenue: Vec<f64> = snapshots
        .into_iter()
        .map(|r| r.flow(Flow::Revenue).unwrap_or(0.0))
        .collect();
    Some(count_growth(&revenue))
}

/// Of the latest four quarters, how many beat the same quarter a year
/// earlier. Requires eight quarters.
#[must_use]
pub fn quarterly_revenue_growth_count(bundle: &RawBundle) -> Option<u32> {
    let quarters = &bundle.income_statement.quarterly;
    if quarters.len() < 2 * QUARTERS_PER_YEAR {
        return None;
    }
    let mut count = 0;
    for i in 0..QUARTERS_PER_YEAR {
        let now = quarter_value(quarters, i, Flow::Revenue)?;
        let year_ago = quarter_value(quarters, i + QUARTERS_PER_YEAR, Flow::Revenue)?;
        if now > year_ago {
            count += 1;
        }
    }
    Some(count)
}

/// Percentage change of TTM revenue against TTM revenue three years
/// earlier (quarters 12..16).
#[must_use]
pub fn revenue_growth_percent(bundle: &RawBundle) -> Option<f64> {
    let quarters = &bundle.income_statement.quarterly;
    let now = ttm(quarters, 0, Flow::Revenue)?;
    let before = ttm(quarters, 3 * QUARTERS_PER_YEAR, Flow::Revenue)?;
    percent_change(now, before)
}

/// Percentage change of TTM operating income against the prior TTM
/// (quarters 4..8).
#[must_use]
pub fn operating_income_growth_rate(bundle: &RawBundle) -> Option<f64> {
    let quarters = &bundle.income_statement.quarterly;
    let now = ttm(quarters, 0, Flow::OperatingIncome)?;
    let before = ttm(quarters, QUARTERS_PER_YEAR, Flow::OperatingIncome)?;
    percent_change(now, before)
}
