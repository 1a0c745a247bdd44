//! Stateless transforms over one-dimensional signals.

use ndarray::{Array1, ArrayView1};
use ndarray_stats::QuantileExt;

use crate::error::SignalError;

mod filter;

pub use filter::{
    apply_bandpass_filter, design_bandpass_filter, BandpassFilter, DEFAULT_FILTER_ORDER,
};

/// Scales `data` into `[-1, 1]` by its largest magnitude, `max(max, |min|)`.
///
/// An all-zero signal comes back unchanged.
pub fn normalize(data: ArrayView1<f64>) -> Result<Array1<f64>, SignalError> {
    let extreme = (*data.max()?).max(data.min()?.abs());
    if extreme == 0.0 {
        return Ok(data.to_owned());
    }
    Ok(data.mapv(|x| x / extreme))
}

/// Signal energy, `E = sum(x^2)`.
pub fn energy(data: ArrayView1<f64>) -> f64 {
    data.iter().map(|x| x * x).sum()
}
