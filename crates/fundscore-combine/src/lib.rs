//! Composite scoring for fundscore metric sets.
//!
//! This crate folds the 18 metrics of a [`MetricSet`](fundscore_traits::MetricSet)
//! into a single ranking score. The default strategy, [`WeightedSumScorer`],
//! maps each metric to a component value and takes the dot product with a
//! fixed weight vector.
//!
//! # Examples
//!
//! ```rust
//! use fundscore_combine::WeightedSumScorer;
//! use fundscore_traits::{MetricSet, Scorer};
//!
//! let scorer = WeightedSumScorer::default();
//! let metrics = MetricSet {
//!     revenue_growth_years: Some(3),
//!     shares_under_500mm: true,
//!     ..Default::default()
//! };
//!
//! assert_eq!(scorer.score(&metrics), 4.0);
//! ```

mod components;
mod weighted_sum;

// Re-export main types
pub use components::{
    COMPONENT_COUNT, ScoreComponent, Weight, component_values, component_weights, divided_values,
};
pub use weighted_sum::{WeightedSumConfig, WeightedSumScorer};
