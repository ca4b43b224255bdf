//! Per-indicator signal classification.
//!
//! Each indicator has its own threshold ladder, evaluated top to bottom.

use crate::types::{
    BollingerValue, IndicatorSet, IndicatorSignal, MacdValue, SignalBundle, SignalStrength,
};

/// Classify every indicator against the current price.
pub fn classify(price: f64, indicators: &IndicatorSet) -> SignalBundle {
    SignalBundle {
        bb: classify_bollinger(price, &indicators.bollinger),
        ema: classify_ema(price, indicators.ema),
        rsi: classify_rsi(indicators.rsi),
        macd: classify_macd(&indicators.macd),
    }
}

/// Position of `price` within the bands: 0 at the lower band, 1 at the upper.
///
/// None when the bands have zero width.
pub fn band_position(price: f64, bands: &BollingerValue) -> Option<f64> {
    let width = bands.width();
    if width == 0.0 {
        return None;
    }
    Some((price - bands.lower) / width)
}

/// Percentage deviation of `price` from the EMA.
pub fn ema_deviation_pct(price: f64, ema: f64) -> f64 {
    (price - ema) / ema * 100.0
}

pub fn classify_bollinger(price: f64, bands: &BollingerValue) -> IndicatorSignal {
    let Some(position) = band_position(price, bands) else {
        return IndicatorSignal::neutral("Bands collapsed (no volatility)");
    };

    if position > 0.8 {
        IndicatorSignal::bearish(SignalStrength::Strong, "Near upper band (overbought)")
    } else if position < 0.2 {
        IndicatorSignal::bullish(SignalStrength::Strong, "Near lower band (oversold)")
    } else if position > 0.6 {
        IndicatorSignal::bearish(SignalStrength::Weak, "Above middle, approaching upper")
    } else if position < 0.4 {
        IndicatorSignal::bullish(SignalStrength::Weak, "Below middle, approaching lower")
    } else {
        IndicatorSignal::neutral("In middle range")
    }
}

pub fn classify_ema(price: f64, ema: f64) -> IndicatorSignal {
    let diff = ema_deviation_pct(price, ema);

    if diff > 0.2 {
        IndicatorSignal::bullish(SignalStrength::Strong, format!("{:.2}% above EMA", diff))
    } else if diff < -0.2 {
        IndicatorSignal::bearish(SignalStrength::Strong, format!("{:.2}% below EMA", diff.abs()))
    } else if diff > 0.0 {
        IndicatorSignal::bullish(SignalStrength::Weak, format!("{:.2}% above EMA", diff))
    } else if diff < 0.0 {
        IndicatorSignal::bearish(SignalStrength::Weak, format!("{:.2}% below EMA", diff.abs()))
    } else {
        IndicatorSignal::neutral("At EMA level")
    }
}

/// Extremes read as reversals; the 60/40 zones read as momentum.
pub fn classify_rsi(rsi: f64) -> IndicatorSignal {
    if rsi > 70.0 {
        IndicatorSignal::bearish(SignalStrength::Strong, format!("RSI {:.1} - Overbought", rsi))
    } else if rsi < 30.0 {
        IndicatorSignal::bullish(SignalStrength::Strong, format!("RSI {:.1} - Oversold", rsi))
    } else if rsi > 60.0 {
        IndicatorSignal::bullish(SignalStrength::Weak, format!("RSI {:.1} - Bullish momentum", rsi))
    } else if rsi < 40.0 {
        IndicatorSignal::bearish(SignalStrength::Weak, format!("RSI {:.1} - Bearish momentum", rsi))
    } else {
        IndicatorSignal::neutral(format!("RSI {:.1} - Neutral zone", rsi))
    }
}

pub fn classify_macd(macd: &MacdValue) -> IndicatorSignal {
    let MacdValue {
        line,
        signal,
        histogram,
    } = *macd;

    if line > signal && histogram > 0.0 {
        IndicatorSignal::bullish(SignalStrength::Strong, "MACD above signal with positive histogram")
    } else if line < signal && histogram < 0.0 {
        IndicatorSignal::bearish(SignalStrength::Strong, "MACD below signal with negative histogram")
    } else if line > signal {
        IndicatorSignal::bullish(SignalStrength::Weak, "MACD above signal line")
    } else if line < signal {
        IndicatorSignal::bearish(SignalStrength::Weak, "MACD below signal line")
    } else {
        IndicatorSignal::neutral("MACD near signal line")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SignalDirection;

    fn bands() -> BollingerValue {
        BollingerValue {
            upper: 110.0,
            middle: 100.0,
            lower: 90.0,
        }
    }

    #[test]
    fn test_bollinger_ladder() {
        let cases = [
            (108.0, SignalDirection::Bearish, SignalStrength::Strong),
            (92.0, SignalDirection::Bullish, SignalStrength::Strong),
            (104.0, SignalDirection::Bearish, SignalStrength::Weak),
            (96.0, SignalDirection::Bullish, SignalStrength::Weak),
            (100.0, SignalDirection::Neutral, SignalStrength::Neutral),
        ];
        for (price, direction, strength) in cases {
            let signal = classify_bollinger(price, &bands());
            assert_eq!(signal.direction, direction, "price {}", price);
            assert_eq!(signal.strength, strength, "price {}", price);
        }
    }

    #[test]
    fn test_bollinger_collapsed_bands_are_neutral() {
        let flat = BollingerValue {
            upper: 100.0,
            middle: 100.0,
            lower: 100.0,
        };
        assert!(band_position(100.0, &flat).is_none());
        let signal = classify_bollinger(101.0, &flat);
        assert_eq!(signal.direction, SignalDirection::Neutral);
        assert_eq!(signal.strength, SignalStrength::Neutral);
    }

    #[test]
    fn test_bollinger_never_jumps_bullish_to_bearish() {
        let mut last = SignalDirection::Bullish;
        let mut price = 80.0;
        while price < 120.0 {
            let current = classify_bollinger(price, &bands()).direction;
            if last == SignalDirection::Bullish {
                assert_ne!(current, SignalDirection::Bearish, "jump at {}", price);
            }
            last = current;
            price += 0.05;
        }
    }

    #[test]
    fn test_ema_ladder_and_reasons() {
        let strong_up = classify_ema(100.5, 100.0);
        assert_eq!(strong_up.direction, SignalDirection::Bullish);
        assert_eq!(strong_up.strength, SignalStrength::Strong);
        assert_eq!(strong_up.reason, "0.50% above EMA");

        let strong_down = classify_ema(99.5, 100.0);
        assert_eq!(strong_down.direction, SignalDirection::Bearish);
        assert_eq!(strong_down.reason, "0.50% below EMA");

        let weak_up = classify_ema(100.1, 100.0);
        assert_eq!(weak_up.strength, SignalStrength::Weak);
        assert_eq!(weak_up.direction, SignalDirection::Bullish);

        let weak_down = classify_ema(99.9, 100.0);
        assert_eq!(weak_down.strength, SignalStrength::Weak);
        assert_eq!(weak_down.direction, SignalDirection::Bearish);

        let flat = classify_ema(100.0, 100.0);
        assert_eq!(flat.direction, SignalDirection::Neutral);
        assert_eq!(flat.reason, "At EMA level");
    }

    #[test]
    fn test_rsi_ladder() {
        let cases = [
            (75.0, SignalDirection::Bearish, SignalStrength::Strong),
            (25.0, SignalDirection::Bullish, SignalStrength::Strong),
            (65.0, SignalDirection::Bullish, SignalStrength::Weak),
            (35.0, SignalDirection::Bearish, SignalStrength::Weak),
            (50.0, SignalDirection::Neutral, SignalStrength::Neutral),
            (70.0, SignalDirection::Bullish, SignalStrength::Weak),
            (30.0, SignalDirection::Bearish, SignalStrength::Weak),
            (60.0, SignalDirection::Neutral, SignalStrength::Neutral),
        ];
        for (rsi, direction, strength) in cases {
            let signal = classify_rsi(rsi);
            assert_eq!(signal.direction, direction, "rsi {}", rsi);
            assert_eq!(signal.strength, strength, "rsi {}", rsi);
        }
        assert_eq!(classify_rsi(64.69).reason, "RSI 64.7 - Bullish momentum");
    }

    #[test]
    fn test_rsi_nan_is_neutral() {
        let signal = classify_rsi(f64::NAN);
        assert_eq!(signal.direction, SignalDirection::Neutral);
    }

    #[test]
    fn test_macd_ladder() {
        let strong_up = classify_macd(&MacdValue {
            line: 0.2,
            signal: 0.1,
            histogram: 0.1,
        });
        assert_eq!(strong_up.direction, SignalDirection::Bullish);
        assert_eq!(strong_up.strength, SignalStrength::Strong);

        let weak_up = classify_macd(&MacdValue {
            line: 0.2,
            signal: 0.1,
            histogram: -0.1,
        });
        assert_eq!(weak_up.strength, SignalStrength::Weak);
        assert_eq!(weak_up.direction, SignalDirection::Bullish);

        let strong_down = classify_macd(&MacdValue {
            line: -0.2,
            signal: -0.16,
            histogram: -0.04,
        });
        assert_eq!(strong_down.direction, SignalDirection::Bearish);
        assert_eq!(strong_down.strength, SignalStrength::Strong);

        let weak_down = classify_macd(&MacdValue {
            line: -0.2,
            signal: -0.16,
            histogram: 0.01,
        });
        assert_eq!(weak_down.direction, SignalDirection::Bearish);
        assert_eq!(weak_down.strength, SignalStrength::Weak);

        let flat = classify_macd(&MacdValue {
            line: 0.0,
            signal: 0.0,
            histogram: 0.0,
        });
        assert_eq!(flat.direction, SignalDirection::Neutral);
    }
}
