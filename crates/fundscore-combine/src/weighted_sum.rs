//! Fixed-weight composite scoring strategy.

use fundscore_traits::{MetricSet, Scorer};
use serde::{Deserialize, Serialize};

use crate::components::{ScoreComponent, component_weights, components, divided_values};

/// Configuration for the weighted-sum scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedSumConfig {
    /// Decimal places the final score is rounded to (default: 2)
    pub decimals: u32,
}

impl Default for WeightedSumConfig {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

/// Scores a metric set as a weighted sum of its components.
///
/// ```text
/// score = book_value_growth_years + revenue_growth_years
///       + quarterly_revenue_growth_count + revenue_growth_percent
///       + [market_cap > 1e11] + gross_margin_ttm / 10
///       + 10 * operating_income_ttm / revenue_ttm
///       + 10 * net_income_ttm / revenue_ttm
///       + [shares_under_500mm] + [current_roe_highest]
///       - equity_multiplier + 10 * roa_ttm + 10 * roe_ttm
///       + operating_income_growth_rate / 10 + eps_positive_years
/// ```
///
/// Unresolved metrics count as 0. The result is rounded half away from
/// zero to [`WeightedSumConfig::decimals`] places.
#[derive(Debug, Clone, Default)]
pub struct WeightedSumScorer {
    config: WeightedSumConfig,
}

impl WeightedSumScorer {
    /// Create a new weighted-sum scorer with the given configuration.
    #[must_use]
    pub const fn new(config: WeightedSumConfig) -> Self {
        Self { config }
    }

    /// Decimal places of the rounded score.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.config.decimals
    }

    /// Unrounded weighted sum.
    #[must_use]
    pub fn raw_score(&self, metrics: &MetricSet) -> f64 {
        divided_values(metrics).dot(&component_weights())
    }

    /// The named terms that make up the score.
    #[must_use]
    pub fn components(&self, metrics: &MetricSet) -> Vec<ScoreComponent> {
        components(metrics)
    }

    fn round(&self, value: f64) -> f64 {
        let scale = 10_f64.powi(self.config.decimals.min(15) as i32);
        (value * scale).round() / scale
    }
}

impl Scorer for WeightedSumScorer {
    fn score(&self, metrics: &MetricSet) -> f64 {
        self.round(self.raw_score(metrics))
    }

    fn name(&self) -> &str {
        "weighted_sum"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> MetricSet {
        MetricSet {
            latest_price: Some(150.0),
            market_cap: Some(2.0e11),
            pe_ratio: Some(25.0),
            operating_income_ttm: Some(30.0),
            net_income_ttm: Some(20.0),
            roe_ttm: Some(0.25),
            roa_ttm: Some(0.1),
            revenue_ttm: Some(100.0),
            gross_margin_ttm: Some(45.0),
            book_value_growth_years: Some(3),
            revenue_growth_years: Some(2),
            quarterly_revenue_growth_count: Some(4),
            revenue_growth_percent: Some(12.5),
            shares_under_500mm: false,
            equity_multiplier: Some(2.5),
            operating_income_growth_rate: Some(8.0),
            eps_positive_years: Some(3),
            current_roe_highest: true,
        }
    }

    #[test]
    fn test_weighted_sum_formula() {
        let scorer = WeightedSumScorer::default();
        // 3 + 2 + 4 + 12.5 + 1 + 4.5 + 3 + 2 + 0 + 1 - 2.5 + 1 + 2.5 + 0.8 + 3
        assert_relative_eq!(scorer.score(&sample()), 37.8);
    }

    #[test]
    fn test_empty_metrics_score_zero() {
        let scorer = WeightedSumScorer::default();
        assert_relative_eq!(scorer.score(&MetricSet::default()), 0.0);
    }

    #[test]
    fn test_rounding() {
        let scorer = WeightedSumScorer::default();
        let metrics = MetricSet {
            revenue_growth_percent: Some(1.23456),
            ..Default::default()
        };
        assert_relative_eq!(scorer.score(&metrics), 1.23);
        assert_relative_eq!(scorer.raw_score(&metrics), 1.23456);

        let coarse = WeightedSumScorer::new(WeightedSumConfig { decimals: 0 });
        assert_relative_eq!(coarse.score(&metrics), 1.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = WeightedSumScorer::default();
        let metrics = sample();
        let first = scorer.score(&metrics);
        for _ in 0..10 {
            assert_eq!(scorer.score(&metrics).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_components_sum_to_raw_score() {
        let scorer = WeightedSumScorer::default();
        let metrics = sample();
        let total: f64 = scorer
            .components(&metrics)
            .iter()
            .map(ScoreComponent::contribution)
            .sum();
        assert_relative_eq!(total, scorer.raw_score(&metrics), epsilon = 1e-9);
    }

    #[test]
    fn test_name_and_config() {
        let scorer = WeightedSumScorer::default();
        assert_eq!(scorer.name(), "weighted_sum");
        assert_eq!(scorer.decimals(), 2);

        let config: WeightedSumConfig = serde_json::from_str(r#"{"decimals": 4}"#).unwrap();
        assert_eq!(WeightedSumScorer::new(config).decimals(), 4);
    }
}
