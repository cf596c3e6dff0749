//! Return and leverage metrics.
//!
//! All balance items come from the latest balance-sheet quarter; they are
//! never aggregated.

use crate::align::{QUARTERS_PER_YEAR, safe_ratio, snapshot};
use crate::profitability::net_income_ttm;
use fundscore_traits::{Balance, Flow, RawBundle};

/// Trailing net income over the latest shareholder equity.
#[must_use]
pub fn roe_ttm(bundle: &RawBundle) -> Option<f64> {
    let net = net_income_ttm(bundle)?;
    let equity = snapshot(&bundle.balance_sheet.quarterly, 0, Balance::ShareholderEquity)?;
    safe_ratio(net, equity)
}

/// Trailing net income over the latest total assets.
///
/// `None` when the latest quarter reports zero equity, whatever its assets.
#[must_use]
pub fn roa_ttm(bundle: &RawBundle) -> Option<f64> {
    let quarters = &bundle.balance_sheet.quarterly;
    if snapshot(quarters, 0, Balance::ShareholderEquity) == Some(0.0) {
        return None;
    }
    let net = net_income_ttm(bundle)?;
    let assets = snapshot(quarters, 0, Balance::TotalAssets)?;
    safe_ratio(net, assets)
}

/// Latest total assets over latest shareholder equity.
///
/// Missing assets count as 0; missing or zero equity yields `None`.
#[must_use]
pub fn equity_multiplier(bundle: &RawBundle) -> Option<f64> {
    let latest = bundle.balance_sheet.quarterly.first()?;
    let equity = latest.balance(Balance::ShareholderEquity)?;
    let assets = latest.balance(Balance::TotalAssets).unwrap_or(0.0);
    safe_ratio(assets, equity)
}

/// Whether the latest quarterly ROE is the highest of the trailing periods.
///
/// Compares up to four periods present in both statements. Periods with
/// zero or missing equity are skipped, and the first remaining period is
/// taken as current. False when every period is skipped.
#[must_use]
pub fn current_roe_highest(bundle: &RawBundle) -> bool {
    let income = &bundle.income_statement.quarterly;
    let balance = &bundle.balance_sheet.quarterly;
    let periods = income.len().min(balance.len()).min(QUARTERS_PER_YEAR);

    let roe: Vec<Option<f64>> = income
        .iter()
        .zip(balance)
        .take(periods)
        .map(|(is, bs)| {
            let net = is.flow(Flow::NetIncome).unwrap_or(0.0);
            safe_ratio(net, bs.balance(Balance::ShareholderEquity)?)
        })
        .collect();

    let mut computed = roe.into_iter().flatten();
    let Some(current) = computed.next() else {
        return false;
    };
    computed.all(|other| current >= other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{balance_quarters, bundle, income_quarters};
    use approx::assert_relative_eq;

    #[test]
    fn test_roe_roa() {
        let b = bundle(
            income_quarters(&[(100.0, 20.0, 10.0); 4]),
            balance_quarters(&[(400.0, 200.0, 10.0)]),
        );
        assert_relative_eq!(roe_ttm(&b).unwrap(), 0.2);
        assert_relative_eq!(roa_ttm(&b).unwrap(), 0.1);
        assert_relative_eq!(equity_multiplier(&b).unwrap(), 2.0);
    }

    #[test]
    fn test_zero_equity_yields_none() {
        let b = bundle(
            income_quarters(&[(100.0, 20.0, 10.0); 4]),
            balance_quarters(&[(0.0, 0.0, 10.0)]),
        );
        assert_eq!(roe_ttm(&b), None);
        assert_eq!(roa_ttm(&b), None);
        assert_eq!(equity_multiplier(&b), None);
    }

    #[test]
    fn test_zero_equity_with_assets() {
        let b = bundle(
            income_quarters(&[(100.0, 20.0, 10.0); 4]),
            balance_quarters(&[(400.0, 0.0, 10.0)]),
        );
        assert_eq!(roe_ttm(&b), None);
        assert_eq!(roa_ttm(&b), None);
        assert_eq!(equity_multiplier(&b), None);
    }

    #[test]
    fn test_uses_latest_snapshot_not_sum() {
        let b = bundle(
            income_quarters(&[(100.0, 20.0, 10.0); 4]),
            balance_quarters(&[(400.0, 100.0, 1.0), (400.0, 100.0, 1.0)]),
        );
        assert_relative_eq!(roe_ttm(&b).unwrap(), 0.4);
        assert_relative_eq!(equity_multiplier(&b).unwrap(), 4.0);
    }

    #[test]
    fn test_missing_balance_sheet() {
        let b = bundle(income_quarters(&[(100.0, 20.0, 10.0); 4]), vec![]);
        assert_eq!(roe_ttm(&b), None);
        assert_eq!(roa_ttm(&b), None);
        assert_eq!(equity_multiplier(&b), None);
        assert!(!current_roe_highest(&b));
    }

    #[test]
    fn test_roe_requires_net_income_ttm() {
        let b = bundle(
            income_quarters(&[(100.0, 20.0, 10.0); 2]),
            balance_quarters(&[(400.0, 200.0, 10.0)]),
        );
        assert_eq!(roe_ttm(&b), None);
        assert_eq!(roa_ttm(&b), None);
        assert_relative_eq!(equity_multiplier(&b).unwrap(), 2.0);
    }

    #[test]
    fn test_equity_multiplier_missing_assets() {
        let mut balance = balance_quarters(&[(0.0, 50.0, 1.0)]);
        balance[0].total_assets = None;
        let b = bundle(vec![], balance);
        assert_relative_eq!(equity_multiplier(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_current_roe_highest() {
        let balance = balance_quarters(&[(1.0, 100.0, 1.0); 4]);

        let rising = income_quarters(&[(0.0, 0.0, 12.0), (0.0, 0.0, 10.0), (0.0, 0.0, 8.0), (0.0, 0.0, 6.0)]);
        assert!(current_roe_highest(&bundle(rising, balance.clone())));

        let falling = income_quarters(&[(0.0, 0.0, 6.0), (0.0, 0.0, 8.0), (0.0, 0.0, 10.0), (0.0, 0.0, 12.0)]);
        assert!(!current_roe_highest(&bundle(falling, balance.clone())));

        let tied = income_quarters(&[(0.0, 0.0, 10.0); 4]);
        assert!(current_roe_highest(&bundle(tied, balance)));
    }

    #[test]
    fn test_current_roe_highest_zero_equity() {
        let income = income_quarters(&[(0.0, 0.0, 10.0); 4]);

        // latest skipped: 10/100 leads 10/150 and 10/200
        let latest_zero = balance_quarters(&[
            (1.0, 0.0, 1.0),
            (1.0, 100.0, 1.0),
            (1.0, 150.0, 1.0),
            (1.0, 200.0, 1.0),
        ]);
        assert!(current_roe_highest(&bundle(income.clone(), latest_zero)));

        let latest_zero_lower = balance_quarters(&[(1.0, 0.0, 1.0), (1.0, 200.0, 1.0), (1.0, 100.0, 1.0)]);
        assert!(!current_roe_highest(&bundle(income.clone(), latest_zero_lower)));

        let older_zero = balance_quarters(&[(1.0, 100.0, 1.0), (1.0, 0.0, 1.0), (1.0, 200.0, 1.0)]);
        assert!(current_roe_highest(&bundle(income.clone(), older_zero)));

        let all_zero = balance_quarters(&[(1.0, 0.0, 1.0); 4]);
        assert!(!current_roe_highest(&bundle(income, all_zero)));
    }

    #[test]
    fn test_current_roe_highest_only_four_periods() {
        let income = income_quarters(&[
            (0.0, 0.0, 10.0),
            (0.0, 0.0, 9.0),
            (0.0, 0.0, 9.0),
            (0.0, 0.0, 9.0),
            (0.0, 0.0, 50.0),
        ]);
        let balance = balance_quarters(&[(1.0, 100.0, 1.0); 5]);
        assert!(current_roe_highest(&bundle(income, balance)));
    }
}
