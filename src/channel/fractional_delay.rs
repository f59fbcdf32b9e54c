//! Fractional sample delay
//!
//! Hamming-windowed sinc FIR with unity DC gain. An odd number of taps
//! gives an integer bulk delay of `(num_taps - 1) / 2` on top of the
//! requested fraction, so the total group delay is `(num_taps - 1) / 2 + delay`.

use std::f64::consts::PI;

use crate::common::IqSample;
use crate::error::{RecoveryError, Result};
use crate::traits::convolve;
use crate::utils::sinc;

/// Default interpolator length
pub const DEFAULT_DELAY_TAPS: usize = 21;

/// Windowed-sinc fractional delay filter
#[derive(Debug, Clone)]
pub struct FractionalDelay {
    coeffs: Vec<f64>,
    history: Vec<IqSample>,
    write_idx: usize,
    delay: f64,
}

impl FractionalDelay {
    /// Create a delay of `delay` samples (plus the bulk delay)
    ///
    /// # Arguments
    /// * `delay` - Fractional delay, 0 <= delay < 1
    /// * `num_taps` - Odd filter length, at least 3
    pub fn new(delay: f64, num_taps: usize) -> Result<Self> {
        if !(0.0..1.0).contains(&delay) {
            return Err(RecoveryError::InvalidChannel(format!(
                "fractional delay must be in [0, 1), got {}",
                delay
            )));
        }
        if num_taps < 3 || num_taps % 2 == 0 {
            return Err(RecoveryError::InvalidChannel(format!(
                "delay filter needs an odd tap count >= 3, got {}",
                num_taps
            )));
        }

        let center = (num_taps - 1) as f64 / 2.0;
        let mut coeffs: Vec<f64> = (0..num_taps)
            .map(|i| {
                let window = 0.54 - 0.46 * (2.0 * PI * i as f64 / (num_taps - 1) as f64).cos();
                sinc(i as f64 - center - delay) * window
            })
            .collect();

        // Normalize for unity DC gain
        let sum: f64 = coeffs.iter().sum();
        for c in &mut coeffs {
            *c /= sum;
        }

        Ok(Self {
            coeffs,
            history: vec![IqSample::new(0.0, 0.0); num_taps],
            write_idx: 0,
            delay,
        })
    }

    /// Fractional part of the delay
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Total delay in samples (bulk + fraction)
    pub fn group_delay(&self) -> f64 {
        (self.coeffs.len() - 1) as f64 / 2.0 + self.delay
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Process one sample through the filter
    pub fn process(&mut self, x: IqSample) -> IqSample {
        self.history[self.write_idx] = x;

        let len = self.coeffs.len();
        let mut sum = IqSample::new(0.0, 0.0);
        for (i, &c) in self.coeffs.iter().enumerate() {
            sum += self.history[(self.write_idx + len - i) % len] * c;
        }

        self.write_idx = (self.write_idx + 1) % len;
        sum
    }

    /// Full convolution of a block (output is `num_taps - 1` samples longer)
    pub fn apply(&self, input: &[IqSample]) -> Vec<IqSample> {
        convolve(input, &self.coeffs)
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.history.fill(IqSample::new(0.0, 0.0));
        self.write_idx = 0;
    }
}
