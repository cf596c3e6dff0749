//! Period alignment helpers.
//!
//! Quarterly sequences are most-recent-first, so index 0 is the latest
//! quarter and index `4 * n` is the same fiscal quarter `n` years earlier.
//!
//! Flow items are aggregated with [`ttm`] / [`flow_sum`]; balance items are
//! read with [`snapshot`] and never summed.

use fundscore_traits::{Balance, Flow, PeriodReport};

/// Quarters in a fiscal year.
pub const QUARTERS_PER_YEAR: usize = 4;

/// Sum of a flow item over `count` quarters starting at `offset`.
///
/// Returns `None` only when the window extends past the available history.
/// Periods that omit the item contribute 0.
#[must_use]
pub fn flow_sum(
    reports: &[PeriodReport],
    offset: usize,
    count: usize,
    item: Flow,
) -> Option<f64> {
    let window = reports.get(offset..offset.checked_add(count)?)?;
    Some(window.iter().map(|r| r.flow(item).unwrap_or(0.0)).sum())
}

/// Trailing-twelve-month total of a flow item, starting `offset` quarters
/// back.
#[must_use]
pub fn ttm(reports: &[PeriodReport], offset: usize, item: Flow) -> Option<f64> {
    flow_sum(reports, offset, QUARTERS_PER_YEAR, item)
}

/// Flow value of a single quarter, 0 when the quarter omits it.
///
/// Returns `None` only when the quarter itself is absent.
#[must_use]
pub fn quarter_value(reports: &[PeriodReport], index: usize, item: Flow) -> Option<f64> {
    reports.get(index).map(|r| r.flow(item).unwrap_or(0.0))
}

/// Balance item at one snapshot period.
#[must_use]
pub fn snapshot(reports: &[PeriodReport], index: usize, item: Balance) -> Option<f64> {
    reports.get(index)?.balance(item)
}

/// One period per fiscal year: indices `0, 4, 8, ...` for `years` years.
///
/// Returns `None` unless a full `years * 4` quarters of history exist.
#[must_use]
pub fn year_boundaries(reports: &[PeriodReport], years: usize) -> Option<Vec<&PeriodReport>> {
    if reports.len() < years * QUARTERS_PER_YEAR {
        return None;
    }
    Some(
        reports
            .iter()
            .step_by(QUARTERS_PER_YEAR)
            .take(years)
            .collect(),
    )
}

/// Count consecutive pairs where the newer value exceeds the older one.
///
/// `values` is most-recent-first; the result lies in `[0, len - 1]`.
#[must_use]
pub fn count_growth(values: &[f64]) -> u32 {
    values.windows(2).filter(|pair| pair[0] > pair[1]).count() as u32
}

/// `numerator / denominator`, `None` for a zero denominator or a non-finite
/// result.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|r| r.is_finite())
}

/// Percentage change from `base` to `current`.
#[must_use]
pub fn percent_change(current: f64, base: f64) -> Option<f64> {
    safe_ratio(current - base, base).map(|r| r * 100.0)
}
