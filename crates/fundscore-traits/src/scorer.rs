//! Scorer trait for folding a metric set into one composite number.

use crate::MetricSet;

/// Combines a [`MetricSet`] into a single composite score.
///
/// Implementations must be pure: the same metric set always yields the same
/// score, with no side effects.
///
/// # Example
///
/// ```
/// use fundscore_traits::{MetricSet, Scorer};
///
/// struct PriceOnly;
///
/// impl Scorer for PriceOnly {
///     fn score(&self, metrics: &MetricSet) -> f64 {
///         metrics.latest_price.unwrap_or(0.0)
///     }
///
///     fn name(&self) -> &str {
///         "price_only"
///     }
/// }
///
/// let metrics = MetricSet { latest_price: Some(3.0), ..Default::default() };
/// assert_eq!(PriceOnly.score(&metrics), 3.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Compute the composite score.
    fn score(&self, metrics: &MetricSet) -> f64;

    /// Name of this scoring strategy.
    fn name(&self) -> &str;
}
