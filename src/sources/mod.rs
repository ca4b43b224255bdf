//! Price feeds. Sources only emit prices that pass `is_valid_price`.

pub mod channel;
pub mod simulated;

pub use channel::ChannelSource;
pub use simulated::SimulatedSource;

/// A feed of observed prices for a single asset.
pub trait PriceSource: Send {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Next available price, or None when nothing usable is available.
    fn next_price(&mut self) -> Option<f64>;
}
