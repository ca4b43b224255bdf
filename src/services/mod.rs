pub mod pipeline;
pub mod price_series;
pub mod report;
pub mod signals;

pub use pipeline::{CycleOutcome, CycleReport, SignalPipeline};
pub use price_series::{is_valid_price, PriceSeries};
pub use signals::{IndicatorEngine, SignalLog};
