//! Omen - technical indicator trading signal calculator

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SignalError};
pub use services::{CycleOutcome, CycleReport, PriceSeries, SignalLog, SignalPipeline};
pub use types::*;
