//! Trailing-twelve-month profitability metrics.

use crate::align::{QUARTERS_PER_YEAR, safe_ratio, ttm};
use fundscore_traits::{Flow, RawBundle};

/// Operating income summed over the latest four quarters.
#[must_use]
pub fn operating_income_ttm(bundle: &RawBundle) -> Option<f64> {
    ttm(&bundle.income_statement.quarterly, 0, Flow::OperatingIncome)
}

/// Net income summed over the latest four quarters.
#[must_use]
pub fn net_income_ttm(bundle: &RawBundle) -> Option<f64> {
    ttm(&bundle.income_statement.quarterly, 0, Flow::NetIncome)
}

/// Revenue summed over the latest four quarters.
#[must_use]
pub fn revenue_ttm(bundle: &RawBundle) -> Option<f64> {
    ttm(&bundle.income_statement.quarterly, 0, Flow::Revenue)
}

/// Trailing gross profit as a percentage of trailing revenue.
///
/// `None` when revenue is missing or not positive, or when no quarter
/// reports gross profit.
#[must_use]
pub fn gross_margin_ttm(bundle: &RawBundle) -> Option<f64> {
    let quarters = &bundle.income_statement.quarterly;
    let window = quarters.get(..QUARTERS_PER_YEAR)?;
    if window.iter().all(|r| r.flow(Flow::GrossProfit).is_none()) {
        return None;
    }
    let revenue = revenue_ttm(bundle).filter(|r| *r > 0.0)?;
    let gross = ttm(quarters, 0, Flow::GrossProfit)?;
    safe_ratio(gross, revenue).map(|r| r * 100.0)
}
