//! Take-profit / stop-loss levels for a call.

use crate::config::TargetConfig;
use crate::types::{TradeCall, TradeTargets};

/// Levels for a directional call. `Hold` has none.
pub fn trade_targets(call: TradeCall, price: f64, config: &TargetConfig) -> Option<TradeTargets> {
    let target = config.target_move_pct / 100.0;
    let stop = config.stop_move_pct / 100.0;

    if call.is_buy() {
        Some(TradeTargets {
            target_price: price * (1.0 + target),
            stop_price: price * (1.0 - stop),
        })
    } else if call.is_sell() {
        Some(TradeTargets {
            target_price: price * (1.0 - target),
            stop_price: price * (1.0 + stop),
        })
    } else {
        None
    }
}
