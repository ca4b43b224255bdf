//! Relative Strength Index (RSI) indicator.

use crate::services::signals::Indicator;

/// RSI over the most recent `period` price changes.
///
/// Gains and losses are plain sums divided by `period` (no Wilder smoothing).
/// When there are no losses `rs` becomes infinite and the result is exactly
/// 100. A completely flat window yields NaN. Needs `period + 1` prices.
pub fn rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let n = prices.len();
    let mut gains = 0.0;
    let mut losses = 0.0;

    for i in 1..=period {
        let change = prices[n - i] - prices[n - i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;
    let rs = avg_gain / avg_loss;

    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    /// A zero period is treated as 1.
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn id(&self) -> &str {
        "rsi"
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn calculate(&self, prices: &[f64]) -> Option<f64> {
        rsi(prices, self.period)
    }
}
