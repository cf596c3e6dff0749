//! Earnings-per-share consistency.

use crate::align::{QUARTERS_PER_YEAR, flow_sum};
use crate::engine::{EarningsBasis, EngineConfig};
use fundscore_traits::{Flow, PeriodReport, RawBundle};

/// Years of EPS history inspected.
pub const EPS_YEARS: usize = 3;

/// Years, of the last three, with positive EPS.
///
/// On the quarterly basis each year is a complete group of four quarters
/// whose reported EPS is summed; at least `config.eps_min_quarters()`
/// quarters are required. On the annual basis up to three annual entries
/// are read directly.
#[must_use]
pub fn eps_positive_years(bundle: &RawBundle, config: &EngineConfig) -> Option<u32> {
    match config.earnings_basis {
        EarningsBasis::Quarterly => {
            quarterly_positive_years(&bundle.earnings.quarterly, config.eps_min_quarters())
        }
        EarningsBasis::Annual => annual_positive_years(&bundle.earnings.annual),
    }
}

fn quarterly_positive_years(quarters: &[PeriodReport], min_quarters: usize) -> Option<u32> {
    if quarters.len() < min_quarters {
        return None;
    }
    let groups = (quarters.len() / QUARTERS_PER_YEAR).min(EPS_YEARS);
    let positive = (0..groups)
        .filter_map(|year| {
            flow_sum(
                quarters,
                year * QUARTERS_PER_YEAR,
                QUARTERS_PER_YEAR,
                Flow::ReportedEps,
            )
        })
        .filter(|eps| *eps > 0.0)
        .count();
    Some(positive as u32)
}

fn annual_positive_years(years: &[PeriodReport]) -> Option<u32> {
    if years.is_empty() {
        return None;
    }
    let positive = years
        .iter()
        .take(EPS_YEARS)
        .filter(|r| r.flow(Flow::ReportedEps).is_some_and(|eps| eps > 0.0))
        .count();
    Some(positive as u32)
}
