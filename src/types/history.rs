use serde::{Deserialize, Serialize};

use super::TradeCall;

/// A recorded overall call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unix timestamp (milliseconds) when recorded.
    pub timestamp: i64,
    pub call: TradeCall,
    /// Price the call was made at.
    pub price: f64,
}
