//! Column and time indexed access to recorded sample tables.
//!
//! A [`Table`] owns a `[rows, columns]` matrix where each row is one time
//! step and each column a named channel. The `Timestamp` column is expected
//! to be non-decreasing; every time based lookup scans it in row order and
//! returns unspecified results when it is not.

use std::fmt;

use ndarray::{s, Array2, ArrayView1};
use ndarray_stats::QuantileExt;
use slog::{debug, Logger};

use crate::error::{Result, TableError};
use crate::log::recording_logger;

pub mod ecg;
pub mod eeg;

pub use ecg::{EcgTable, ECG_COLUMN};
pub use eeg::{EegTable, QUALITY_PREFIX};

/// Column holding the unix timestamp of every row.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

/// Optional construction parameters.
///
/// ```
/// use vvtable::table::{Table, TableOptions};
/// use ndarray::array;
///
/// let table = Table::with_options(
///     vec!["Timestamp".into(), "ECG".into()],
///     array![[0.0, 1.0], [0.5, 2.0]],
///     TableOptions {
///         sampling_rate: Some(2.0),
///         ..TableOptions::default()
///     },
/// );
/// assert_eq!(table.get_sampling_rate(), 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Where the data was read from, only used for display.
    pub file_path: String,
    /// Fixed sampling rate; derived from the timestamps when `None`.
    pub sampling_rate: Option<f64>,
    pub logger: Option<Logger>,
}

#[derive(Debug)]
pub struct Table {
    header: Vec<String>,
    data: Array2<f64>,
    file_path: String,
    len: usize,
    sampling_rate: f64,
    log: Logger,
}

impl Table {
    pub fn new(header: Vec<String>, data: Array2<f64>) -> Self {
        Self::with_options(header, data, TableOptions::default())
    }

    pub fn with_options(header: Vec<String>, data: Array2<f64>, options: TableOptions) -> Self {
        let log = recording_logger(options.logger, &options.file_path);

        let mut table = Self {
            header,
            len: data.nrows(),
            data,
            file_path: options.file_path,
            sampling_rate: 0.0,
            log,
        };
        table.set_sampling_rate(options.sampling_rate);
        table
    }

    pub fn set_header(&mut self, header: Vec<String>) {
        self.header = header;
    }

    /// Replaces the samples. The sampling rate is left as it was; call
    /// [`Table::set_sampling_rate`] with `None` to derive it again.
    pub fn set_data(&mut self, data: Array2<f64>) {
        self.len = data.nrows();
        self.data = data;
    }

    pub fn set_sampling_rate(&mut self, sampling_rate: Option<f64>) {
        self.sampling_rate = match sampling_rate {
            Some(rate) => rate,
            None => self.calc_sampling_rate(),
        };
    }

    pub fn get_header(&self) -> &[String] {
        &self.header
    }

    pub fn get_data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn get_sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// Rows of column `name` in `[offset, end)`, without copying.
    ///
    /// `end` is `limit` when given, otherwise `offset + length`, otherwise the
    /// row count; `length` is ignored whenever `limit` is set. Both bounds
    /// are clamped to the available rows. Returns `None` for unknown columns.
    pub fn get_column(
        &self,
        name: &str,
        offset: usize,
        limit: Option<usize>,
        length: Option<usize>,
    ) -> Option<ArrayView1<'_, f64>> {
        let index = self.column_index(name)?;

        let end = match (limit, length) {
            (Some(limit), _) => limit,
            (None, Some(length)) => offset.saturating_add(length),
            (None, None) => self.len,
        };
        let end = end.min(self.len);
        let start = offset.min(end);

        Some(self.data.slice(s![start..end, index]))
    }

    /// The whole column `name`.
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.get_column(name, 0, None, None)
    }

    pub fn get_time(
        &self,
        offset: usize,
        limit: Option<usize>,
        length: Option<usize>,
    ) -> Option<ArrayView1<'_, f64>> {
        self.get_column(TIMESTAMP_COLUMN, offset, limit, length)
    }

    /// Index of the first row stamped at or after `from_time`.
    pub fn get_time_index(&self, from_time: f64) -> Result<usize> {
        let times = self.timestamps()?;
        let bounds = time_bounds(&times)?;
        ensure_in_range(from_time, bounds)?;

        times
            .iter()
            .position(|&time| time >= from_time)
            .ok_or(TableError::TimeOutOfRange {
                time: from_time,
                min: bounds.0,
                max: bounds.1,
            })
    }

    /// Rows of column `name` stamped in `[from_time, to_time)`.
    ///
    /// Reversed bounds are swapped. The end is the first row at or after
    /// `to_time`, so that row is excluded. `Ok(None)` for unknown columns.
    pub fn get_column_by_time(
        &self,
        name: &str,
        from_time: f64,
        to_time: f64,
    ) -> Result<Option<ArrayView1<'_, f64>>> {
        let (from_time, to_time) = if from_time > to_time {
            (to_time, from_time)
        } else {
            (from_time, to_time)
        };

        let times = self.timestamps()?;
        let bounds = time_bounds(&times)?;
        ensure_in_range(from_time, bounds)?;
        ensure_in_range(to_time, bounds)?;

        let mut from_index = None;
        let mut to_index = None;
        for (i, &time) in times.iter().enumerate() {
            if from_index.is_none() && time >= from_time {
                from_index = Some(i);
            }
            if time >= to_time {
                to_index = Some(i);
                break;
            }
        }

        let to_index = to_index.unwrap_or(self.len);
        let from_index = from_index.unwrap_or(to_index);
        Ok(self.get_column(name, from_index, Some(to_index), None))
    }

    pub fn get_duration(&self) -> Result<f64> {
        Ok(self.get_end_time()? - self.get_start_time()?)
    }

    pub fn get_start_time(&self) -> Result<f64> {
        let times = self.timestamps()?;
        times.get(0).copied().ok_or(TableError::NoSamples)
    }

    pub fn get_end_time(&self) -> Result<f64> {
        let times = self.timestamps()?;
        let last = self.len.checked_sub(1).ok_or(TableError::NoSamples)?;
        times.get(last).copied().ok_or(TableError::NoSamples)
    }

    /// Number of values in the first column of the header.
    pub fn get_value_count(&self) -> usize {
        self.header
            .first()
            .and_then(|name| self.column(name))
            .map_or(0, |column| column.len())
    }

    /// Stacks the named columns, one row per name in the order given.
    /// `None` as soon as one of them is unknown.
    pub fn get_columns<S: AsRef<str>>(&self, names: &[S]) -> Option<Array2<f64>> {
        let mut stacked = Array2::zeros((names.len(), self.len));
        for (mut row, name) in stacked.rows_mut().into_iter().zip(names) {
            row.assign(&self.column(name.as_ref())?);
        }
        Some(stacked)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        let index = self.header.iter().position(|head| head == name)?;
        if index >= self.data.ncols() {
            debug!(self.log, "header entry has no data column";
                "column" => name, "index" => index, "width" => self.data.ncols());
            return None;
        }
        Some(index)
    }

    fn timestamps(&self) -> Result<ArrayView1<'_, f64>> {
        self.column(TIMESTAMP_COLUMN)
            .ok_or_else(|| TableError::ColumnNotFound(TIMESTAMP_COLUMN.to_string()))
    }

    fn calc_sampling_rate(&self) -> f64 {
        match self.get_duration() {
            Ok(duration) if duration != 0.0 => self.len as f64 / duration,
            Ok(_) => {
                debug!(self.log, "zero duration, sampling rate defaults to 0"; "rows" => self.len);
                0.0
            }
            Err(e) => {
                debug!(self.log, "could not derive sampling rate, defaulting to 0"; "error" => %e);
                0.0
            }
        }
    }

    pub(crate) fn describe(&self, f: &mut fmt::Formatter<'_>, kind: &str) -> fmt::Result {
        write!(
            f,
            "{} from '{}' shape {:?}\nheader {:?}",
            kind,
            self.file_path,
            self.data.dim(),
            self.header
        )
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f, "Table")
    }
}

fn time_bounds(times: &ArrayView1<f64>) -> Result<(f64, f64)> {
    Ok((*times.min()?, *times.max()?))
}

fn ensure_in_range(time: f64, (min, max): (f64, f64)) -> Result<()> {
    if min <= time && time <= max {
        Ok(())
    } else {
        Err(TableError::TimeOutOfRange { time, min, max })
    }
}
