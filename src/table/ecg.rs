use std::fmt;
use std::ops::Deref;

use ndarray::{Array2, Axis};

use crate::table::Table;

/// Column carrying the ECG channel.
pub const ECG_COLUMN: &str = "ECG";

/// ECG recording laid out as `Timestamp, ECG, ...`.
#[derive(Debug)]
pub struct EcgTable {
    table: Table,
}

impl EcgTable {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn into_inner(self) -> Table {
        self.table
    }

    /// Second header entry, where recordings place the ECG channel.
    pub fn get_ecg_header(&self) -> Option<&str> {
        self.table.get_header().get(1).map(String::as_str)
    }

    /// The ECG column as a single-row matrix.
    pub fn get_ecg_data(&self) -> Option<Array2<f64>> {
        self.table
            .column(ECG_COLUMN)
            .map(|column| column.insert_axis(Axis(0)).to_owned())
    }
}

impl Deref for EcgTable {
    type Target = Table;

    fn deref(&self) -> &Table {
        &self.table
    }
}

impl fmt::Display for EcgTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.describe(f, "ECGTable")
    }
}
