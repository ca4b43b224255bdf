use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional reading of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalDirection {
    Bullish,
    Bearish,
    Neutral,
}

impl SignalDirection {
    /// Get display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            SignalDirection::Bullish => "BULLISH",
            SignalDirection::Bearish => "BEARISH",
            SignalDirection::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How far past its threshold an indicator reading is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStrength {
    Strong,
    Weak,
    Neutral,
}

impl SignalStrength {
    pub fn label(&self) -> &'static str {
        match self {
            SignalStrength::Strong => "STRONG",
            SignalStrength::Weak => "WEAK",
            SignalStrength::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classified output of one indicator for one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSignal {
    pub direction: SignalDirection,
    pub strength: SignalStrength,
    /// Human-readable explanation, embedding the value at display precision.
    pub reason: String,
}

impl IndicatorSignal {
    pub fn new(direction: SignalDirection, strength: SignalStrength, reason: impl Into<String>) -> Self {
        Self {
            direction,
            strength,
            reason: reason.into(),
        }
    }

    pub fn bullish(strength: SignalStrength, reason: impl Into<String>) -> Self {
        Self::new(SignalDirection::Bullish, strength, reason)
    }

    pub fn bearish(strength: SignalStrength, reason: impl Into<String>) -> Self {
        Self::new(SignalDirection::Bearish, strength, reason)
    }

    pub fn neutral(reason: impl Into<String>) -> Self {
        Self::new(SignalDirection::Neutral, SignalStrength::Neutral, reason)
    }

    pub fn is_strong(&self) -> bool {
        self.strength == SignalStrength::Strong
    }
}

/// Which indicator a bundle entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Bb,
    Ema,
    Rsi,
    Macd,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 4] = [
        IndicatorKind::Bb,
        IndicatorKind::Ema,
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
    ];

    /// Short key (bb, ema, rsi, macd).
    pub fn id(&self) -> &'static str {
        match self {
            IndicatorKind::Bb => "bb",
            IndicatorKind::Ema => "ema",
            IndicatorKind::Rsi => "rsi",
            IndicatorKind::Macd => "macd",
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Bb => "Bollinger Bands",
            IndicatorKind::Ema => "EMA",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
        }
    }
}

/// One classified signal per indicator. Keys are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalBundle {
    pub bb: IndicatorSignal,
    pub ema: IndicatorSignal,
    pub rsi: IndicatorSignal,
    pub macd: IndicatorSignal,
}

impl SignalBundle {
    pub fn get(&self, kind: IndicatorKind) -> &IndicatorSignal {
        match kind {
            IndicatorKind::Bb => &self.bb,
            IndicatorKind::Ema => &self.ema,
            IndicatorKind::Rsi => &self.rsi,
            IndicatorKind::Macd => &self.macd,
        }
    }

    /// Iterate entries as `(kind, signal)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorKind, &IndicatorSignal)> {
        IndicatorKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

/// Overall recommendation produced by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeCall {
    StrongBuy,
    Buy,
    WeakBuy,
    Hold,
    WeakSell,
    Sell,
    StrongSell,
}

impl TradeCall {
    /// Get display label for this call.
    pub fn label(&self) -> &'static str {
        match self {
            TradeCall::StrongBuy => "STRONG BUY",
            TradeCall::Buy => "BUY",
            TradeCall::WeakBuy => "WEAK BUY",
            TradeCall::Hold => "HOLD / WAIT",
            TradeCall::WeakSell => "WEAK SELL",
            TradeCall::Sell => "SELL",
            TradeCall::StrongSell => "STRONG SELL",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, TradeCall::StrongBuy | TradeCall::Buy | TradeCall::WeakBuy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, TradeCall::StrongSell | TradeCall::Sell | TradeCall::WeakSell)
    }
}

impl fmt::Display for TradeCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Agreement level across indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Neutral,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
            Confidence::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregated call with its confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSignal {
    pub call: TradeCall,
    pub confidence: Confidence,
}

/// Take-profit and stop-loss levels for a directional call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeTargets {
    pub target_price: f64,
    pub stop_price: f64,
}
