//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::ema;
use crate::services::signals::Indicator;
use crate::types::MacdValue;

/// MACD from two whole-series EMAs.
///
/// The signal line is a fixed fraction of the MACD line rather than an EMA of
/// its history, so the histogram always carries the sign of the line.
pub fn macd(prices: &[f64], fast: usize, slow: usize, signal_ratio: f64) -> Option<MacdValue> {
    let line = ema(prices, fast)? - ema(prices, slow)?;
    let signal = line * signal_ratio;

    Some(MacdValue {
        line,
        signal,
        histogram: line - signal,
    })
}

/// MACD indicator.
///
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = 0.8 * MACD Line
/// - Histogram = MACD Line - Signal Line
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_ratio: f64,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_ratio: 0.8,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_ratio: f64) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_ratio,
        }
    }
}

impl Indicator for Macd {
    type Output = MacdValue;

    fn id(&self) -> &str {
        "macd"
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn min_periods(&self) -> usize {
        self.slow_period
    }

    fn calculate(&self, prices: &[f64]) -> Option<MacdValue> {
        macd(prices, self.fast_period, self.slow_period, self.signal_ratio)
    }
}
