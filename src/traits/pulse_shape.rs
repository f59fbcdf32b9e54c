//! PulseShape trait - Spectral shaping / ISI control
//!
//! Defines the pulse shaping filter used to build oversampled test
//! streams. The same filter type serves as TX shaping and RX matched filter.

use crate::common::IqSample;

/// Pulse shaping filter trait
pub trait PulseShape: Send + Sync {
    /// Length of the filter in samples
    fn filter_len(&self) -> usize;

    /// Get the filter coefficients
    fn coefficients(&self) -> &[f64];

    /// Filter span in symbols (each side of center)
    fn span_symbols(&self) -> usize;

    /// Delay from input impulse to pulse peak, in samples
    fn group_delay(&self) -> usize {
        (self.filter_len() - 1) / 2
    }

    /// Full convolution of `input` with the filter
    ///
    /// Output length is `input.len() + filter_len() - 1`.
    fn apply(&self, input: &[IqSample]) -> Vec<IqSample> {
        if input.is_empty() {
            return Vec::new();
        }
        convolve(input, self.coefficients())
    }
}

/// Full linear convolution of complex samples with real taps
pub(crate) fn convolve(input: &[IqSample], taps: &[f64]) -> Vec<IqSample> {
    if input.is_empty() || taps.is_empty() {
        return Vec::new();
    }

    let mut out = vec![IqSample::new(0.0, 0.0); input.len() + taps.len() - 1];
    for (i, &x) in input.iter().enumerate() {
        // Upsampled streams are mostly zeros
        if x.re == 0.0 && x.im == 0.0 {
            continue;
        }
        for (j, &h) in taps.iter().enumerate() {
            out[i + j] += x * h;
        }
    }
    out
}
