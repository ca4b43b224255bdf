//! Vote counting across classified indicator signals.

use crate::types::{Confidence, OverallSignal, SignalBundle, SignalDirection, TradeCall};
use serde::{Deserialize, Serialize};

/// Directional vote counts for one bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalTally {
    pub bullish: u8,
    pub bearish: u8,
    pub strong_bullish: u8,
    pub strong_bearish: u8,
}

impl SignalTally {
    pub fn from_bundle(bundle: &SignalBundle) -> Self {
        bundle.iter().fold(Self::default(), |mut tally, (_, signal)| {
            match signal.direction {
                SignalDirection::Bullish => {
                    tally.bullish += 1;
                    if signal.is_strong() {
                        tally.strong_bullish += 1;
                    }
                }
                SignalDirection::Bearish => {
                    tally.bearish += 1;
                    if signal.is_strong() {
                        tally.strong_bearish += 1;
                    }
                }
                SignalDirection::Neutral => {}
            }
            tally
        })
    }

    /// Map the tally to a call. Conditions overlap, so the order is significant.
    pub fn overall(&self) -> OverallSignal {
        let (call, confidence) = if self.strong_bullish >= 2 && self.bullish >= 3 {
            (TradeCall::StrongBuy, Confidence::High)
        } else if self.strong_bearish >= 2 && self.bearish >= 3 {
            (TradeCall::StrongSell, Confidence::High)
        } else if self.bullish >= 3 {
            (TradeCall::Buy, Confidence::Medium)
        } else if self.bearish >= 3 {
            (TradeCall::Sell, Confidence::Medium)
        } else if self.bullish > self.bearish {
            (TradeCall::WeakBuy, Confidence::Low)
        } else if self.bearish > self.bullish {
            (TradeCall::WeakSell, Confidence::Low)
        } else {
            (TradeCall::Hold, Confidence::Neutral)
        };

        OverallSignal { call, confidence }
    }
}

/// Combine a bundle into one overall call.
pub fn aggregate(bundle: &SignalBundle) -> OverallSignal {
    SignalTally::from_bundle(bundle).overall()
}
