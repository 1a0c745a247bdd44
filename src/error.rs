use ndarray_stats::errors::MinMaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("could not find {time} in data (timestamps span {min} to {max})")]
    TimeOutOfRange { time: f64, min: f64, max: f64 },

    #[error("Table holds no samples")]
    NoSamples,

    #[error("Timestamp column has no defined range: {0}")]
    Timestamps(#[from] MinMaxError),
}

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Signal has no defined extrema: {0}")]
    Extrema(#[from] MinMaxError),

    #[error("Invalid sampling rate: {0}")]
    InvalidSamplingRate(f64),

    #[error("Filter order must be at least 1")]
    InvalidOrder,

    #[error("Filter design failed: {0}")]
    FilterDesign(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T, E = TableError> = std::result::Result<T, E>;
