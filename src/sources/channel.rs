use super::PriceSource;
use crate::services::is_valid_price;
use tokio::sync::mpsc;
use tracing::warn;

/// Prices pushed from another task (e.g. a browser-extension bridge).
///
/// Invalid prices are dropped on receipt.
pub struct ChannelSource {
    rx: mpsc::Receiver<f64>,
    dropped: u64,
}

impl ChannelSource {
    pub fn new(rx: mpsc::Receiver<f64>) -> Self {
        Self { rx, dropped: 0 }
    }

    /// Create a bounded channel and the source reading from it.
    pub fn channel(buffer: usize) -> (mpsc::Sender<f64>, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self::new(rx))
    }

    /// Wait for the next valid price. None once every sender is gone.
    pub async fn recv(&mut self) -> Option<f64> {
        while let Some(price) = self.rx.recv().await {
            if self.accept(price) {
                return Some(price);
            }
        }
        None
    }

    /// Number of prices discarded as invalid.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn accept(&mut self, price: f64) -> bool {
        if is_valid_price(price) {
            true
        } else {
            self.dropped += 1;
            warn!("Dropping invalid bridged price {}", price);
            false
        }
    }
}

impl PriceSource for ChannelSource {
    fn name(&self) -> &str {
        "channel"
    }

    fn next_price(&mut self) -> Option<f64> {
        while let Ok(price) = self.rx.try_recv() {
            if self.accept(price) {
                return Some(price);
            }
        }
        None
    }
}
