//! Trading signals service module.
//!
//! Computes technical indicators from a price series, classifies each one
//! into a directional signal and aggregates them into an overall call.

pub mod aggregator;
pub mod classifier;
pub mod indicators;
pub mod log;
pub mod targets;

pub use aggregator::{aggregate, SignalTally};
pub use classifier::classify;
pub use indicators::IndicatorEngine;
pub use log::SignalLog;
pub use targets::trade_targets;

/// Trait for implementing technical indicators.
pub trait Indicator: Send + Sync {
    /// Value produced by the indicator.
    type Output;

    /// Unique identifier for this indicator.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Minimum number of price samples required for calculation.
    fn min_periods(&self) -> usize;

    /// Calculate the indicator from a price series, oldest first.
    /// Returns None if the series is too short.
    fn calculate(&self, prices: &[f64]) -> Option<Self::Output>;
}
