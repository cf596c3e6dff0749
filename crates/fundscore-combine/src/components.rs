//! Score components: the per-metric terms of the composite score.

use fundscore_traits::MetricSet;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of terms in the composite score.
pub const COMPONENT_COUNT: usize = 15;

/// Market capitalization above which a company counts as large-cap.
pub(crate) const LARGE_CAP_THRESHOLD: f64 = 100_000_000_000.0;

/// How a component value is weighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Weight {
    /// Multiply by the factor
    Times(f64),
    /// Divide by the divisor
    Per(f64),
}

impl Weight {
    /// Weighted value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Times(factor) => value * factor,
            Self::Per(divisor) => value / divisor,
        }
    }

    /// Multiplier applied after any division.
    const fn factor(self) -> f64 {
        match self {
            Self::Times(factor) => factor,
            Self::Per(_) => 1.0,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Times(factor) => f.pad(&format!("{factor}")),
            Self::Per(divisor) => f.pad(&format!("/{divisor}")),
        }
    }
}

/// Component names and weights, in evaluation order.
const TERMS: [(&str, Weight); COMPONENT_COUNT] = [
    ("book_value_growth_years", Weight::Times(1.0)),
    ("revenue_growth_years", Weight::Times(1.0)),
    ("quarterly_revenue_growth_count", Weight::Times(1.0)),
    ("revenue_growth_percent", Weight::Times(1.0)),
    ("large_cap", Weight::Times(1.0)),
    ("gross_margin_ttm", Weight::Per(10.0)),
    ("operating_margin_ttm", Weight::Times(10.0)),
    ("net_margin_ttm", Weight::Times(10.0)),
    ("shares_under_500mm", Weight::Times(1.0)),
    ("current_roe_highest", Weight::Times(1.0)),
    ("equity_multiplier", Weight::Times(-1.0)),
    ("roa_ttm", Weight::Times(10.0)),
    ("roe_ttm", Weight::Times(10.0)),
    ("operating_income_growth_rate", Weight::Per(10.0)),
    ("eps_positive_years", Weight::Times(1.0)),
];

/// One named term of the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    /// Component name
    pub name: &'static str,

    /// Input value derived from the metric set
    pub value: f64,

    /// Weight applied to the value
    pub weight: Weight,
}

impl ScoreComponent {
    /// Weighted contribution to the composite score.
    #[must_use]
    pub fn contribution(&self) -> f64 {
        self.weight.apply(self.value)
    }
}

fn number(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn count(value: Option<u32>) -> f64 {
    value.map_or(0.0, f64::from)
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Share of trailing revenue, 0 when revenue is zero or unknown.
fn margin(numerator: Option<f64>, revenue: Option<f64>) -> f64 {
    let revenue = number(revenue);
    if revenue == 0.0 {
        return 0.0;
    }
    let ratio = number(numerator) / revenue;
    if ratio.is_finite() { ratio } else { 0.0 }
}

/// Component input values, in evaluation order.
///
/// Unresolved metrics contribute 0.
#[must_use]
pub fn component_values(metrics: &MetricSet) -> Array1<f64> {
    let large_cap = metrics
        .market_cap
        .is_some_and(|cap| cap > LARGE_CAP_THRESHOLD);

    Array1::from_vec(vec![
        count(metrics.book_value_growth_years),
        count(metrics.revenue_growth_years),
        count(metrics.quarterly_revenue_growth_count),
        number(metrics.revenue_growth_percent),
        flag(large_cap),
        number(metrics.gross_margin_ttm),
        margin(metrics.operating_income_ttm, metrics.revenue_ttm),
        margin(metrics.net_income_ttm, metrics.revenue_ttm),
        flag(metrics.shares_under_500mm),
        flag(metrics.current_roe_highest),
        number(metrics.equity_multiplier),
        number(metrics.roa_ttm),
        number(metrics.roe_ttm),
        number(metrics.operating_income_growth_rate),
        count(metrics.eps_positive_years),
    ])
}

/// Component values with every divisor already applied, in the same order
/// as [`component_weights`].
///
/// Dividing first keeps the `/10` terms exact instead of multiplying by an
/// inexact `0.1`.
#[must_use]
pub fn divided_values(metrics: &MetricSet) -> Array1<f64> {
    let mut values = component_values(metrics);
    for (value, (_, weight)) in values.iter_mut().zip(TERMS) {
        if let Weight::Per(divisor) = weight {
            *value /= divisor;
        }
    }
    values
}

/// Multipliers for [`divided_values`].
#[must_use]
pub fn component_weights() -> Array1<f64> {
    TERMS.iter().map(|(_, weight)| weight.factor()).collect()
}

/// Named components for a metric set.
pub(crate) fn components(metrics: &MetricSet) -> Vec<ScoreComponent> {
    let values = component_values(metrics);
    TERMS
        .iter()
        .zip(values.iter().copied())
        .map(|(&(name, weight), value)| ScoreComponent {
            name,
            value,
            weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_metrics_are_zero() {
        let values = component_values(&MetricSet::default());
        assert_eq!(values.len(), COMPONENT_COUNT);
        assert!(values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_weights_shape() {
        let weights = component_weights();
        assert_eq!(weights.len(), COMPONENT_COUNT);
        assert_relative_eq!(weights[10], -1.0);
        assert_relative_eq!(weights[5], 1.0);
    }

    #[test]
    fn test_tenths_are_exact_division() {
        let metrics = MetricSet {
            gross_margin_ttm: Some(3.0),
            operating_income_growth_rate: Some(7.0),
            ..Default::default()
        };
        let divided = divided_values(&metrics);
        // 3.0 * 0.1 differs from 3.0 / 10.0 in the last bit
        assert_eq!(divided[5].to_bits(), (3.0_f64 / 10.0).to_bits());
        assert_eq!(divided[13].to_bits(), (7.0_f64 / 10.0).to_bits());

        let parts = components(&metrics);
        assert_eq!(parts[5].value, 3.0);
        assert_eq!(parts[5].contribution().to_bits(), (3.0_f64 / 10.0).to_bits());
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::Per(10.0).to_string(), "/10");
        assert_eq!(Weight::Times(-1.0).to_string(), "-1");
        assert_eq!(format!("{:>5}", Weight::Times(10.0)), "   10");
    }

    #[test]
    fn test_margins_need_revenue() {
        let metrics = MetricSet {
            operating_income_ttm: Some(50.0),
            net_income_ttm: Some(25.0),
            revenue_ttm: Some(0.0),
            ..Default::default()
        };
        let values = component_values(&metrics);
        assert_relative_eq!(values[6], 0.0);
        assert_relative_eq!(values[7], 0.0);

        let metrics = MetricSet {
            revenue_ttm: Some(200.0),
            ..metrics
        };
        let values = component_values(&metrics);
        assert_relative_eq!(values[6], 0.25);
        assert_relative_eq!(values[7], 0.125);
    }

    #[test]
    fn test_large_cap_threshold_is_exclusive() {
        let at = MetricSet {
            market_cap: Some(LARGE_CAP_THRESHOLD),
            ..Default::default()
        };
        assert_relative_eq!(component_values(&at)[4], 0.0);

        let above = MetricSet {
            market_cap: Some(LARGE_CAP_THRESHOLD + 1.0),
            ..Default::default()
        };
        assert_relative_eq!(component_values(&above)[4], 1.0);
    }

    #[test]
    fn test_non_finite_inputs_are_zeroed() {
        let metrics = MetricSet {
            roe_ttm: Some(f64::NAN),
            equity_multiplier: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(component_values(&metrics).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_components_carry_names() {
        let metrics = MetricSet {
            equity_multiplier: Some(3.0),
            ..Default::default()
        };
        let parts = components(&metrics);
        let leverage = parts
            .iter()
            .find(|c| c.name == "equity_multiplier")
            .unwrap();
        assert_relative_eq!(leverage.contribution(), -3.0);
    }
}
