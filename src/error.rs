use thiserror::Error;

/// Errors raised by the signal pipeline.
///
/// None of these are fatal: an invalid sample is dropped and an
/// insufficient-data condition skips the current evaluation cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Insufficient data: need {required} samples, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid price sample: {0}")]
    InvalidSample(f64),
}

pub type Result<T> = std::result::Result<T, SignalError>;
