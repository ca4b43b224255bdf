use serde::{Deserialize, Serialize};

/// Bollinger Bands envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerValue {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerValue {
    /// Distance between the upper and lower band.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// MACD line, signal reference and histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValue {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Snapshot of every indicator computed from one price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma: f64,
    pub ema: f64,
    pub rsi: f64,
    pub bollinger: BollingerValue,
    pub macd: MacdValue,
}
