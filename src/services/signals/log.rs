//! Bounded history of overall calls.

use crate::types::{HistoryEntry, OverallSignal};
use std::collections::VecDeque;

/// Default number of retained entries.
pub const DEFAULT_LOG_CAPACITY: usize = 10;

/// Newest-first log of recorded calls. Oldest entries fall off the tail.
#[derive(Debug, Clone)]
pub struct SignalLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    total_recorded: u64,
}

impl SignalLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            total_recorded: 0,
        }
    }

    /// Prepend an entry, dropping whatever falls past capacity.
    pub fn record(&mut self, signal: &OverallSignal, price: f64, timestamp: i64) {
        self.entries.push_front(HistoryEntry {
            timestamp,
            call: signal.call,
            price,
        });
        self.entries.truncate(self.capacity);
        self.total_recorded += 1;
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Number of calls recorded since creation, including evicted ones.
    pub fn total_recorded(&self) -> u64 {
        self.total_recorded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SignalLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
