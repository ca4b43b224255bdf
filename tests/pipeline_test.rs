//! Full evaluation cycles through `SignalPipeline`.

use omen::config::{Config, SimulationConfig};
use omen::services::report;
use omen::sources::{PriceSource, SimulatedSource};
use omen::*;

fn uptrend(count: usize) -> Vec<f64> {
    (0..count).map(|i| 140.0 + i as f64 * 0.5).collect()
}

#[test]
fn test_uptrend_feed_produces_calls() {
    let mut pipeline = SignalPipeline::default();
    let mut last = None;
    for (i, price) in uptrend(40).into_iter().enumerate() {
        last = Some(pipeline.run_cycle(price, i as i64 * 1000).unwrap());
    }

    let outcome = last.unwrap();
    let cycle = outcome.report().unwrap();

    // Steady climb: price above EMA, all-gain RSI, positive MACD.
    assert_eq!(cycle.indicators.rsi, 100.0);
    assert_eq!(cycle.signals.rsi.direction, SignalDirection::Bearish);
    assert_eq!(cycle.signals.ema.direction, SignalDirection::Bullish);
    assert_eq!(cycle.signals.macd.direction, SignalDirection::Bullish);
    // Two strong bullish against two strong bearish (RSI and upper band).
    assert_eq!(cycle.signals.bb.direction, SignalDirection::Bearish);
    assert_eq!(cycle.overall.call, TradeCall::Hold);
    assert_eq!(cycle.overall.confidence, Confidence::Neutral);
    assert!(cycle.targets.is_none());

    // 40 prices, evaluation from the 26th onward.
    assert_eq!(pipeline.log().total_recorded(), 15);
    assert_eq!(pipeline.log().len(), 10);
    assert_eq!(pipeline.log().latest().map(|e| e.timestamp), Some(39_000));
}

#[test]
fn test_history_capacity_after_fifteen_records() {
    let mut pipeline = SignalPipeline::default();
    let indicators = IndicatorSet {
        sma: 100.0,
        ema: 100.0,
        rsi: 50.0,
        bollinger: BollingerValue {
            upper: 101.0,
            middle: 100.0,
            lower: 99.0,
        },
        macd: MacdValue {
            line: 0.1,
            signal: 0.08,
            histogram: 0.02,
        },
    };

    for i in 0..15 {
        pipeline.evaluate(100.0 + i as f64, indicators, i);
    }

    let entries: Vec<_> = pipeline.log().entries().collect();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].timestamp, 14);
    assert_eq!(entries[9].timestamp, 5);
    assert!(entries.iter().all(|e| e.timestamp >= 5));
}

#[test]
fn test_invalid_prices_are_dropped() {
    let mut pipeline = SignalPipeline::default();
    pipeline.run_cycle(150.0, 0).unwrap();

    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = pipeline.run_cycle(bad, 1).unwrap_err();
        assert!(matches!(err, SignalError::InvalidSample(_)));
    }

    assert_eq!(pipeline.series().snapshot(), vec![150.0]);
    assert!(pipeline.log().is_empty());
}

#[test]
fn test_simulated_feed_drives_pipeline() {
    let config = Config {
        simulation: SimulationConfig {
            seed: Some(2024),
            ..SimulationConfig::default()
        },
        ..Config::default()
    };
    let mut pipeline = SignalPipeline::new(&config);
    let mut source = SimulatedSource::new(&config.simulation);
    source.warm_up(pipeline.series_mut());
    assert!(pipeline.series().len() >= pipeline.required_samples());

    for tick in 0..30 {
        let price = source.next_price().unwrap();
        let outcome = pipeline.run_cycle(price, tick).unwrap();
        let cycle = outcome.report().unwrap();
        assert_eq!(cycle.price, price);

        let text = report::render_text(cycle, pipeline.log());
        assert!(text.contains(cycle.overall.call.label()));
    }

    assert_eq!(pipeline.series().len(), 50);
    assert_eq!(pipeline.log().len(), 10);
    assert_eq!(pipeline.log().total_recorded(), 30);
}
