use std::fmt;
use std::ops::Deref;

use ndarray::{Array2, ArrayView1};

use crate::config::EmotivConfig;
use crate::table::Table;

/// Prefix turning an EEG channel name into its contact quality column.
pub const QUALITY_PREFIX: &str = "Q";

/// EEG recording: a [`Table`] plus the channel names that carry EEG samples.
#[derive(Debug)]
pub struct EegTable {
    table: Table,
    eeg_fields: Vec<String>,
}

impl EegTable {
    pub fn new(table: Table, eeg_fields: Vec<String>) -> Self {
        Self { table, eeg_fields }
    }

    pub fn from_config(table: Table, config: &EmotivConfig) -> Self {
        Self::new(table, config.eeg_fields.clone())
    }

    pub fn eeg_fields(&self) -> &[String] {
        &self.eeg_fields
    }

    pub fn into_inner(self) -> Table {
        self.table
    }

    /// Header entries that are EEG channels, in header order.
    pub fn get_eeg_header(&self) -> Vec<&str> {
        self.table
            .get_header()
            .iter()
            .filter(|head| self.eeg_fields.iter().any(|field| field == *head))
            .map(String::as_str)
            .collect()
    }

    /// One row per EEG channel.
    pub fn get_eeg_data(&self) -> Option<Array2<f64>> {
        self.table.get_columns(self.get_eeg_header().as_slice())
    }

    /// One row per EEG channel's quality column, same order as the EEG data.
    pub fn get_quality_data(&self) -> Option<Array2<f64>> {
        let quality_fields: Vec<String> = self
            .get_eeg_header()
            .iter()
            .map(|head| format!("{QUALITY_PREFIX}{head}"))
            .collect();
        self.table.get_columns(quality_fields.as_slice())
    }

    /// A single quality column, addressed by its full name (e.g. `QF3`).
    pub fn get_quality(&self, quality_field: &str) -> Option<ArrayView1<'_, f64>> {
        self.table.column(quality_field)
    }
}

impl Deref for EegTable {
    type Target = Table;

    fn deref(&self) -> &Table {
        &self.table
    }
}

impl fmt::Display for EegTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.describe(f, "EEGTable")
    }
}
