//! Bollinger Bands indicator.

use super::sma::sma;
use crate::services::signals::Indicator;
use crate::types::BollingerValue;

/// Bollinger Bands over the last `period` prices.
///
/// The squared deviations are always divided by `period`, even when fewer
/// prices are available.
pub fn bollinger(prices: &[f64], period: usize, std_dev_multiplier: f64) -> Option<BollingerValue> {
    let middle = sma(prices, period)?;
    let window = &prices[prices.len().saturating_sub(period)..];

    let variance = window.iter().map(|p| (p - middle).powi(2)).sum::<f64>() / period as f64;
    let std_dev = variance.sqrt();

    Some(BollingerValue {
        upper: middle + std_dev * std_dev_multiplier,
        middle,
        lower: middle - std_dev * std_dev_multiplier,
    })
}

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(20)
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            period: period.max(1),
            std_dev_multiplier,
        }
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerValue;

    fn id(&self) -> &str {
        "bb"
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, prices: &[f64]) -> Option<BollingerValue> {
        bollinger(prices, self.period, self.std_dev_multiplier)
    }
}
