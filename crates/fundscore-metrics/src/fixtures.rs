//! Bundle builders shared by the metric tests.

use fundscore_traits::{Balance, Flow, PeriodReport, RawBundle, StatementSeries};

/// Quarterly reports carrying only revenue, most recent first.
pub(crate) fn quarters_with_revenue(revenue: &[f64]) -> Vec<PeriodReport> {
    quarters_with(Flow::Revenue, revenue)
}

/// Quarterly reports carrying one flow item, most recent first.
pub(crate) fn quarters_with(item: Flow, values: &[f64]) -> Vec<PeriodReport> {
    values
        .iter()
        .map(|&v| PeriodReport::default().with_flow(item, v))
        .collect()
}

/// Balance-sheet quarters from `(total_assets, equity, shares)` triples.
pub(crate) fn balance_quarters(rows: &[(f64, f64, f64)]) -> Vec<PeriodReport> {
    rows.iter()
        .map(|&(assets, equity, shares)| {
            PeriodReport::default()
                .with_balance(Balance::TotalAssets, assets)
                .with_balance(Balance::ShareholderEquity, equity)
                .with_balance(Balance::SharesOutstanding, shares)
        })
        .collect()
}

/// Income-statement quarters from `(revenue, operating_income, net_income)`.
pub(crate) fn income_quarters(rows: &[(f64, f64, f64)]) -> Vec<PeriodReport> {
    rows.iter()
        .map(|&(revenue, operating, net)| {
            PeriodReport::default()
                .with_flow(Flow::Revenue, revenue)
                .with_flow(Flow::OperatingIncome, operating)
                .with_flow(Flow::NetIncome, net)
        })
        .collect()
}

/// A bundle with the given quarterly income and balance statements.
pub(crate) fn bundle(income: Vec<PeriodReport>, balance: Vec<PeriodReport>) -> RawBundle {
    RawBundle {
        income_statement: StatementSeries::from_quarterly(income),
        balance_sheet: StatementSeries::from_quarterly(balance),
        ..RawBundle::new("TEST")
    }
}
