//! Evaluation cycle: price in, overall call out.

use crate::config::{Config, TargetConfig};
use crate::error::Result;
use crate::services::signals::{aggregate, classify, trade_targets, IndicatorEngine, SignalLog};
use crate::services::PriceSeries;
use crate::types::{IndicatorSet, OverallSignal, SignalBundle, TradeTargets};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything produced by one evaluated cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    pub price: f64,
    /// Unix timestamp (milliseconds) of the evaluation.
    pub timestamp: i64,
    pub indicators: IndicatorSet,
    pub signals: SignalBundle,
    pub overall: OverallSignal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<TradeTargets>,
}

/// Result of feeding one price into the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Indicators were computed and the call was logged.
    Evaluated(Box<CycleReport>),
    /// Not enough history yet; the price was stored but nothing evaluated.
    Skipped { required: usize, available: usize },
}

impl CycleOutcome {
    pub fn report(&self) -> Option<&CycleReport> {
        match self {
            CycleOutcome::Evaluated(report) => Some(&**report),
            CycleOutcome::Skipped { .. } => None,
        }
    }
}

/// Owns the price history and signal log for one asset.
///
/// Cycles are meant to run one at a time; callers with concurrent feeds
/// should funnel prices through a single task.
pub struct SignalPipeline {
    series: PriceSeries,
    log: SignalLog,
    engine: IndicatorEngine,
    targets: TargetConfig,
}

impl SignalPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            series: PriceSeries::new(config.price_history_capacity),
            log: SignalLog::new(config.signal_log_capacity),
            engine: IndicatorEngine::new(&config.indicators),
            targets: config.targets.clone(),
        }
    }

    /// Append a price and, when enough history exists, evaluate and log a call.
    ///
    /// An invalid price is an error and leaves all state untouched.
    pub fn run_cycle(&mut self, price: f64, timestamp: i64) -> Result<CycleOutcome> {
        self.series.append(price)?;

        let required = self.engine.required_samples();
        if !self.series.is_ready(required) {
            debug!(
                "Skipping evaluation: {} of {} samples",
                self.series.len(),
                required
            );
            return Ok(CycleOutcome::Skipped {
                required,
                available: self.series.len(),
            });
        }

        let indicators = self.engine.compute_all(&self.series.snapshot())?;
        let report = self.evaluate(price, indicators, timestamp);
        Ok(CycleOutcome::Evaluated(Box::new(report)))
    }

    /// Classify, aggregate and log a given indicator set without touching the
    /// price series. Used for hand-entered indicator values.
    pub fn evaluate(&mut self, price: f64, indicators: IndicatorSet, timestamp: i64) -> CycleReport {
        let signals = classify(price, &indicators);
        let overall = aggregate(&signals);
        let targets = trade_targets(overall.call, price, &self.targets);

        self.log.record(&overall, price, timestamp);

        info!(
            "{} ({} confidence) at {:.2} | bb {} ema {} rsi {} macd {}",
            overall.call,
            overall.confidence,
            price,
            signals.bb.direction,
            signals.ema.direction,
            signals.rsi.direction,
            signals.macd.direction
        );

        CycleReport {
            price,
            timestamp,
            indicators,
            signals,
            overall,
            targets,
        }
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// Mutable access for seeding history outside the cycle.
    pub fn series_mut(&mut self) -> &mut PriceSeries {
        &mut self.series
    }

    pub fn log(&self) -> &SignalLog {
        &self.log
    }

    pub fn required_samples(&self) -> usize {
        self.engine.required_samples()
    }

    /// False when the history buffer can never hold enough samples to evaluate.
    pub fn can_evaluate(&self) -> bool {
        self.series.capacity() >= self.required_samples()
    }
}

impl Default for SignalPipeline {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
