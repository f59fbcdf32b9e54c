//! Raised Cosine (RC) pulse shaping filter
//!
//! Nyquist pulse: crosses zero at every nonzero multiple of the symbol
//! period, so a single RC filter at the transmitter gives ISI-free
//! symbol-spaced samples. Coefficients are peak-normalized (center tap 1).

use crate::traits::PulseShape;
use crate::utils::sinc;
use std::f64::consts::PI;

/// Raised Cosine filter
#[derive(Debug, Clone)]
pub struct RaisedCosine {
    coeffs: Vec<f64>,
    samples_per_symbol: usize,
}

impl RaisedCosine {
    /// Create a new RC filter
    ///
    /// # Arguments
    /// * `samples_per_symbol` - Number of samples per symbol period
    /// * `beta` - Roll-off factor, 0..=1
    /// * `num_taps` - Filter length; even lengths are bumped to the next odd
    ///
    /// # Panics
    /// Panics if `samples_per_symbol` is zero
    pub fn new(samples_per_symbol: usize, beta: f64, num_taps: usize) -> Self {
        assert!(samples_per_symbol > 0, "samples_per_symbol must be nonzero");
        let num_taps = if num_taps % 2 == 0 { num_taps + 1 } else { num_taps };

        Self {
            coeffs: generate_rc_coefficients(samples_per_symbol, beta, num_taps),
            samples_per_symbol,
        }
    }

    /// Create with default parameters (β=0.35, 101 taps)
    pub fn default_for_sps(samples_per_symbol: usize) -> Self {
        Self::new(samples_per_symbol, super::DEFAULT_ALPHA, super::DEFAULT_RC_TAPS)
    }
}

impl PulseShape for RaisedCosine {
    fn filter_len(&self) -> usize {
        self.coeffs.len()
    }

    fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    fn span_symbols(&self) -> usize {
        (self.coeffs.len() - 1) / 2 / self.samples_per_symbol
    }
}

fn generate_rc_coefficients(samples_per_symbol: usize, beta: f64, num_taps: usize) -> Vec<f64> {
    let center = (num_taps - 1) as f64 / 2.0;

    (0..num_taps)
        .map(|i| {
            // t in symbol periods
            let t = (i as f64 - center) / samples_per_symbol as f64;
            let denom = 1.0 - (2.0 * beta * t).powi(2);
            if denom.abs() < 1e-10 {
                // t = ±T/(2β)
                PI / 4.0 * sinc(1.0 / (2.0 * beta))
            } else {
                sinc(t) * (PI * beta * t).cos() / denom
            }
        })
        .collect()
}
