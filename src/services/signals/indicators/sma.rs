//! Simple Moving Average (SMA) indicator.

use crate::services::signals::Indicator;

/// Arithmetic mean of the last `period` prices.
///
/// With fewer than `period` prices the mean of all available prices is
/// returned. None for an empty series or a zero period.
pub fn sma(prices: &[f64], period: usize) -> Option<f64> {
    if prices.is_empty() || period == 0 {
        return None;
    }

    let window = &prices[prices.len().saturating_sub(period)..];
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// SMA (Simple Moving Average) indicator.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }
}

impl Default for Sma {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn id(&self) -> &str {
        "sma"
    }

    fn name(&self) -> &str {
        "SMA"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, prices: &[f64]) -> Option<f64> {
        sma(prices, self.period)
    }
}
