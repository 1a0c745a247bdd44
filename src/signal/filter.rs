use std::f64::consts::PI;

use biquad::{Biquad, Coefficients, DirectForm1, Hertz, ToHertz, Type};
use ndarray::{Array1, ArrayView1, Axis};

use crate::error::SignalError;

pub const DEFAULT_FILTER_ORDER: usize = 5;

/// Butterworth band-pass built as a cascade of high-pass and low-pass sections.
///
/// `low` and `high` are the band edges normalized to the Nyquist frequency,
/// after clamping. An edge sitting on `0.0` or `1.0` leaves that side of the
/// band open, so no sections are generated for it.
#[derive(Debug, Clone)]
pub struct BandpassFilter {
    low: f64,
    high: f64,
    order: usize,
    sections: Vec<Coefficients<f64>>,
}

impl BandpassFilter {
    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn sections(&self) -> &[Coefficients<f64>] {
        &self.sections
    }

    /// Causal single pass over `data`, filter state starting at rest.
    pub fn apply(&self, data: ArrayView1<f64>) -> Array1<f64> {
        let mut stages: Vec<DirectForm1<f64>> = self
            .sections
            .iter()
            .map(|coeff| DirectForm1::<f64>::new(*coeff))
            .collect();

        data.iter()
            .map(|&sample| stages.iter_mut().fold(sample, |acc, stage| stage.run(acc)))
            .collect()
    }

    /// Forward pass, then a second pass over the reversed output.
    /// Cancels the phase shift and squares the magnitude response.
    pub fn apply_zero_phase(&self, data: ArrayView1<f64>) -> Array1<f64> {
        let mut processed = self.apply(data);
        processed.invert_axis(Axis(0));

        let mut processed = self.apply(processed.view());
        processed.invert_axis(Axis(0));
        processed.as_standard_layout().into_owned()
    }
}

/// Designs a band-pass of the given order between `lowcut` and `highcut` Hz.
///
/// `highcut` is clamped to Nyquist, `lowcut` to `[0, Nyquist]`; out of range
/// cutoffs never fail. Only the sampling rate and the order are validated.
pub fn design_bandpass_filter(
    lowcut: f64,
    highcut: f64,
    sampling_rate: f64,
    order: usize,
) -> Result<BandpassFilter, SignalError> {
    if !(sampling_rate.is_finite() && sampling_rate > 0.0) {
        return Err(SignalError::InvalidSamplingRate(sampling_rate));
    }
    if order == 0 {
        return Err(SignalError::InvalidOrder);
    }

    let nyquist = sampling_rate / 2.0;
    let highcut = highcut.min(nyquist);
    let lowcut = lowcut.max(0.0).min(nyquist);

    let low = lowcut / nyquist;
    let high = highcut / nyquist;

    let mut sections = Vec::with_capacity(2 * order);
    if low > 0.0 {
        sections.extend(butterworth_sections(Side::HighPass, sampling_rate, lowcut, order)?);
    }
    if high < 1.0 {
        sections.extend(butterworth_sections(Side::LowPass, sampling_rate, highcut, order)?);
    }

    Ok(BandpassFilter {
        low,
        high,
        order,
        sections,
    })
}

/// Designs the band-pass and runs it causally over `data`.
pub fn apply_bandpass_filter(
    data: ArrayView1<f64>,
    lowcut: f64,
    highcut: f64,
    sampling_rate: f64,
    order: usize,
) -> Result<Array1<f64>, SignalError> {
    let filter = design_bandpass_filter(lowcut, highcut, sampling_rate, order)?;
    Ok(filter.apply(data))
}

#[derive(Debug, Clone, Copy)]
enum Side {
    HighPass,
    LowPass,
}

impl Side {
    fn second_order_section(
        self,
        fs: Hertz<f64>,
        cutoff: Hertz<f64>,
        q: f64,
    ) -> Result<Coefficients<f64>, SignalError> {
        let coeff = match self {
            Side::HighPass => Coefficients::<f64>::from_params(Type::HighPass, fs, cutoff, q),
            Side::LowPass => Coefficients::<f64>::from_params(Type::LowPass, fs, cutoff, q),
        };
        coeff.map_err(|e| SignalError::FilterDesign(format!("{:?}", e)))
    }

    /// Real pole of odd orders. biquad has no single-pole high-pass, so that
    /// side is the bilinear transform with prewarping, mirroring
    /// `SinglePoleLowPass`.
    fn first_order_section(
        self,
        fs: Hertz<f64>,
        cutoff: Hertz<f64>,
    ) -> Result<Coefficients<f64>, SignalError> {
        match self {
            Side::LowPass => {
                Coefficients::<f64>::from_params(Type::SinglePoleLowPass, fs, cutoff, 0.0)
                    .map_err(|e| SignalError::FilterDesign(format!("{:?}", e)))
            }
            Side::HighPass => {
                let k = (PI * cutoff.hz() / fs.hz()).tan();
                let norm = 1.0 / (1.0 + k);
                Ok(Coefficients {
                    b0: norm,
                    b1: -norm,
                    b2: 0.0,
                    a1: (k - 1.0) * norm,
                    a2: 0.0,
                })
            }
        }
    }
}

fn butterworth_sections(
    side: Side,
    fs: f64,
    cutoff: f64,
    order: usize,
) -> Result<Vec<Coefficients<f64>>, SignalError> {
    let fs_hz = to_hertz(fs)?;
    let cutoff_hz = to_hertz(cutoff)?;

    let mut sections = Vec::with_capacity(order / 2 + 1);
    for pair in 0..order / 2 {
        sections.push(side.second_order_section(fs_hz, cutoff_hz, butterworth_q(order, pair))?);
    }

    if order % 2 == 1 {
        sections.push(side.first_order_section(fs_hz, cutoff_hz)?);
    }

    Ok(sections)
}

// Pole pairs of an order-n Butterworth sit at (n - 1 - 2k) * pi / 2n from the
// negative real axis.
fn butterworth_q(order: usize, pair: usize) -> f64 {
    let n = order as f64;
    let theta = (n - 1.0 - 2.0 * pair as f64) * PI / (2.0 * n);
    1.0 / (2.0 * theta.cos())
}

fn to_hertz(value: f64) -> Result<Hertz<f64>, SignalError> {
    if value > 0.0 {
        Ok(value.hz())
    } else {
        Err(SignalError::FilterDesign(format!("frequency must be positive, got {value}")))
    }
}
