//! Sample tables and signal utilities for physiological recordings.
//!
//! [`table`] wraps a recorded `[rows, channels]` matrix indexed by its
//! `Timestamp` column, with EEG and ECG flavoured views on top.
//! [`signal`] holds the stateless transforms applied to single channels:
//! normalization, energy and band-pass filtering.

pub mod config;
pub mod error;
pub mod log;
pub mod signal;
pub mod table;

pub use config::EmotivConfig;
pub use error::{ConfigError, SignalError, TableError};
pub use table::{EcgTable, EegTable, Table, TableOptions};
