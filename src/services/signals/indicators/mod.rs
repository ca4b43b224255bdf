//! Technical indicator implementations.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{bollinger, BollingerBands};
pub use ema::{ema, Ema};
pub use macd::{macd, Macd};
pub use rsi::{rsi, Rsi};
pub use sma::{sma, Sma};

use super::Indicator;
use crate::config::IndicatorConfig;
use crate::error::{Result, SignalError};
use crate::types::IndicatorSet;

/// Minimum history regardless of configured periods.
pub const MIN_SAMPLES: usize = 26;

/// Computes the full indicator set from a price series.
pub struct IndicatorEngine {
    sma: Sma,
    ema: Ema,
    rsi: Rsi,
    bollinger: BollingerBands,
    macd: Macd,
}

impl IndicatorEngine {
    pub fn new(config: &IndicatorConfig) -> Self {
        Self {
            sma: Sma::new(config.sma_period),
            ema: Ema::new(config.ema_period),
            rsi: Rsi::new(config.rsi_period),
            bollinger: BollingerBands::new(config.bb_period, config.bb_std_dev),
            macd: Macd::new(config.macd_fast, config.macd_slow, config.macd_signal_ratio),
        }
    }

    /// Number of samples needed before `compute_all` succeeds.
    pub fn required_samples(&self) -> usize {
        [
            MIN_SAMPLES,
            self.sma.min_periods(),
            self.ema.min_periods(),
            self.rsi.min_periods(),
            self.bollinger.min_periods(),
            self.macd.min_periods(),
        ]
        .into_iter()
        .max()
        .unwrap_or(MIN_SAMPLES)
    }

    /// Compute every indicator, or none of them.
    pub fn compute_all(&self, prices: &[f64]) -> Result<IndicatorSet> {
        let required = self.required_samples();
        let insufficient = || SignalError::InsufficientData {
            required,
            available: prices.len(),
        };

        if prices.len() < required {
            return Err(insufficient());
        }

        Ok(IndicatorSet {
            sma: self.sma.calculate(prices).ok_or_else(insufficient)?,
            ema: self.ema.calculate(prices).ok_or_else(insufficient)?,
            rsi: self.rsi.calculate(prices).ok_or_else(insufficient)?,
            bollinger: self.bollinger.calculate(prices).ok_or_else(insufficient)?,
            macd: self.macd.calculate(prices).ok_or_else(insufficient)?,
        })
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(&IndicatorConfig::default())
    }
}
