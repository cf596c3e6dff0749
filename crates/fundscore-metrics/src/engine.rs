//! The metric engine: evaluates all 18 metrics for one bundle.

use crate::{earnings, growth, market, profitability, returns};
use fundscore_traits::{MetricSet, RawBundle};
use serde::{Deserialize, Serialize};

/// Lower bound applied to [`EngineConfig::eps_min_quarters`].
pub const MIN_EPS_QUARTERS: usize = 8;

/// Which earnings sequence feeds the EPS consistency metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EarningsBasis {
    /// Sum reported EPS over complete groups of four quarters.
    #[default]
    Quarterly,
    /// Read annual reported EPS directly.
    Annual,
}

/// Configuration for the metric engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum quarterly earnings history for the EPS metric
    /// (default: 12, never below 8)
    pub eps_min_quarters: usize,

    /// Earnings sequence used for the EPS metric (default: Quarterly)
    pub earnings_basis: EarningsBasis,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            eps_min_quarters: 12,
            earnings_basis: EarningsBasis::Quarterly,
        }
    }
}

impl EngineConfig {
    /// Set the minimum quarterly earnings history.
    #[must_use]
    pub const fn with_eps_min_quarters(mut self, quarters: usize) -> Self {
        self.eps_min_quarters = quarters;
        self
    }

    /// Set the earnings basis.
    #[must_use]
    pub const fn with_earnings_basis(mut self, basis: EarningsBasis) -> Self {
        self.earnings_basis = basis;
        self
    }

    /// Effective minimum quarterly earnings history, clamped to
    /// [`MIN_EPS_QUARTERS`].
    #[must_use]
    pub const fn eps_min_quarters(&self) -> usize {
        if self.eps_min_quarters < MIN_EPS_QUARTERS {
            MIN_EPS_QUARTERS
        } else {
            self.eps_min_quarters
        }
    }
}

/// Computes a [`MetricSet`] from a [`RawBundle`].
///
/// Evaluation is pure and total: every metric either resolves or is left
/// unset, and the bundle is only borrowed.
///
/// # Example
///
/// ```
/// use fundscore_metrics::MetricEngine;
/// use fundscore_traits::RawBundle;
///
/// let engine = MetricEngine::default();
/// let metrics = engine.evaluate(&RawBundle::new("IBM"));
/// assert_eq!(metrics.revenue_ttm, None);
/// assert!(!metrics.current_roe_highest);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricEngine {
    config: EngineConfig,
}

impl MetricEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate all metrics for one bundle.
    #[must_use]
    pub fn evaluate(&self, bundle: &RawBundle) -> MetricSet {
        MetricSet {
            latest_price: market::latest_price(bundle),
            market_cap: market::market_cap(bundle),
            pe_ratio: market::pe_ratio(bundle),
            operating_income_ttm: profitability::operating_income_ttm(bundle),
            net_income_ttm: profitability::net_income_ttm(bundle),
            roe_ttm: returns::roe_ttm(bundle),
            roa_ttm: returns::roa_ttm(bundle),
            revenue_ttm: profitability::revenue_ttm(bundle),
            gross_margin_ttm: profitability::gross_margin_ttm(bundle),
            book_value_growth_years: growth::book_value_growth_years(bundle),
            revenue_growth_years: growth::revenue_growth_years(bundle),
            quarterly_revenue_growth_count: growth::quarterly_revenue_growth_count(bundle),
            revenue_growth_percent: growth::revenue_growth_percent(bundle),
            shares_under_500mm: market::shares_under_500mm(bundle),
            equity_multiplier: returns::equity_multiplier(bundle),
            operating_income_growth_rate: growth::operating_income_growth_rate(bundle),
            eps_positive_years: earnings::eps_positive_years(bundle, &self.config),
            current_roe_highest: returns::current_roe_highest(bundle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{balance_quarters, bundle, income_quarters, quarters_with};
    use approx::assert_relative_eq;
    use fundscore_traits::{Flow, StatementSeries};

    fn full_bundle() -> RawBundle {
        let income: Vec<(f64, f64, f64)> = (0..16)
            .map(|i| {
                let revenue = 200.0 - f64::from(i) * 5.0;
                (revenue, revenue / 10.0, revenue / 20.0)
            })
            .collect();
        let balance: Vec<(f64, f64, f64)> = (0..16)
            .map(|i| (1000.0, 500.0 - f64::from(i) * 10.0, 10.0))
            .collect();

        let mut b = bundle(income_quarters(&income), balance_quarters(&balance));
        b.overview = [
            ("Name", "Test Corp"),
            ("MarketCapitalization", "150000000000"),
            ("PERatio", "18.2"),
            ("SharesOutstanding", "400000000"),
        ]
        .into_iter()
        .collect();
        b.earnings = StatementSeries::from_quarterly(quarters_with(Flow::ReportedEps, &[1.0; 12]));
        b
    }

    #[test]
    fn test_empty_bundle() {
        let metrics = MetricEngine::default().evaluate(&RawBundle::new("NONE"));
        assert_eq!(metrics, MetricSet::default());
    }

    #[test]
    fn test_full_bundle_resolves_everything() {
        let metrics = MetricEngine::default().evaluate(&full_bundle());

        assert_relative_eq!(metrics.market_cap.unwrap(), 1.5e11);
        assert_relative_eq!(metrics.pe_ratio.unwrap(), 18.2);
        assert!(metrics.shares_under_500mm);
        assert_relative_eq!(metrics.revenue_ttm.unwrap(), 770.0);
        assert_relative_eq!(metrics.operating_income_ttm.unwrap(), 77.0);
        assert_relative_eq!(metrics.net_income_ttm.unwrap(), 38.5);
        assert_relative_eq!(metrics.roe_ttm.unwrap(), 38.5 / 500.0);
        assert_relative_eq!(metrics.roa_ttm.unwrap(), 38.5 / 1000.0);
        assert_relative_eq!(metrics.equity_multiplier.unwrap(), 2.0);
        assert_eq!(metrics.book_value_growth_years, Some(3));
        assert_eq!(metrics.revenue_growth_years, Some(3));
        assert_eq!(metrics.quarterly_revenue_growth_count, Some(4));
        assert_eq!(metrics.eps_positive_years, Some(3));
        assert!(metrics.current_roe_highest);
        assert!(metrics.revenue_growth_percent.unwrap() > 0.0);
        assert!(metrics.operating_income_growth_rate.unwrap() > 0.0);
        assert_eq!(metrics.gross_margin_ttm, None);
        assert_eq!(metrics.latest_price, None);
    }

    #[test]
    fn test_short_history_leaves_ttm_unset() {
        let b = bundle(
            income_quarters(&[(100.0, 10.0, 5.0); 3]),
            balance_quarters(&[(100.0, 50.0, 10.0); 3]),
        );
        let metrics = MetricEngine::default().evaluate(&b);
        assert_eq!(metrics.operating_income_ttm, None);
        assert_eq!(metrics.net_income_ttm, None);
        assert_eq!(metrics.revenue_ttm, None);
        assert_eq!(metrics.gross_margin_ttm, None);
        assert_eq!(metrics.roe_ttm, None);
        assert_eq!(metrics.roa_ttm, None);
        assert_eq!(metrics.revenue_growth_percent, None);
        assert_eq!(metrics.operating_income_growth_rate, None);
        assert_relative_eq!(metrics.equity_multiplier.unwrap(), 2.0);
    }

    #[test]
    fn test_no_non_finite_values() {
        let b = bundle(
            income_quarters(&[(0.0, 0.0, 0.0); 16]),
            balance_quarters(&[(0.0, 0.0, 0.0); 16]),
        );
        let metrics = MetricEngine::default().evaluate(&b);
        let values = [
            metrics.roe_ttm,
            metrics.roa_ttm,
            metrics.gross_margin_ttm,
            metrics.revenue_growth_percent,
            metrics.equity_multiplier,
            metrics.operating_income_growth_rate,
        ];
        assert!(values.iter().all(Option::is_none));
        assert_eq!(metrics.book_value_growth_years, Some(0));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let engine = MetricEngine::default();
        let b = full_bundle();
        assert_eq!(engine.evaluate(&b), engine.evaluate(&b));
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.eps_min_quarters(), 12);
        assert_eq!(config.earnings_basis, EarningsBasis::Quarterly);

        let engine = MetricEngine::new(config.clone().with_eps_min_quarters(20));
        assert_eq!(engine.config().eps_min_quarters(), 20);
    }

    #[test]
    fn test_config_serde() {
        let json = r#"{"eps_min_quarters": 8, "earnings_basis": "Annual"}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.eps_min_quarters(), 8);
        assert_eq!(config.earnings_basis, EarningsBasis::Annual);
    }
}
