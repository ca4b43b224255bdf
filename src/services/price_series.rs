//! Bounded price history buffer.

use crate::error::{Result, SignalError};
use std::collections::VecDeque;
use tracing::warn;

/// Default number of retained samples.
pub const DEFAULT_PRICE_CAPACITY: usize = 50;

/// Ordered, capacity-bounded series of price samples.
///
/// Samples are kept in arrival order. Once the series is full, each append
/// evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    samples: VecDeque<f64>,
    capacity: usize,
}

/// A price is usable when it is finite and strictly positive.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

impl PriceSeries {
    /// Create an empty series. A zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Create a series pre-filled with `samples`. Invalid samples are skipped.
    pub fn with_samples(capacity: usize, samples: impl IntoIterator<Item = f64>) -> Self {
        let mut series = Self::new(capacity);
        for sample in samples {
            let _ = series.append(sample);
        }
        series
    }

    /// Append a sample at the tail, evicting from the head when over capacity.
    ///
    /// Non-finite or non-positive samples are rejected and the series is left
    /// untouched.
    pub fn append(&mut self, sample: f64) -> Result<()> {
        if !is_valid_price(sample) {
            warn!("Rejected price sample {}", sample);
            return Err(SignalError::InvalidSample(sample));
        }

        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        Ok(())
    }

    /// Owned copy of the samples, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    /// Whether at least `min_length` samples are available.
    pub fn is_ready(&self, min_length: usize) -> bool {
        self.samples.len() >= min_length
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PriceSeries {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_CAPACITY)
    }
}
