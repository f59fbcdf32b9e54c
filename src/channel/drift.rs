//! Sample clock drift
//!
//! Models a receiver whose ADC runs `ppm` parts per million fast relative
//! to the transmitter: output sample `n` is the input waveform evaluated at
//! `n · (1 + ppm·1e-6)`, reconstructed by windowed-sinc interpolation.
//! The apparent samples-per-symbol becomes `sps / (1 + ppm·1e-6)`.

use std::f64::consts::PI;

use crate::common::IqSample;
use crate::error::{RecoveryError, Result};
use crate::utils::sinc;

/// Interpolator half-width in input samples
const HALF_WIDTH: usize = 10;

/// Sample-rate offset resampler
#[derive(Debug, Clone, Copy)]
pub struct ClockDrift {
    ratio: f64,
}

impl ClockDrift {
    pub fn new(ppm: f64) -> Result<Self> {
        let ratio = 1.0 + ppm * 1e-6;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(RecoveryError::InvalidChannel(format!(
                "clock offset of {} ppm leaves no usable sample rate",
                ppm
            )));
        }
        Ok(Self { ratio })
    }

    /// Input samples advanced per output sample
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Resample a block, stopping where the interpolator runs out of input
    pub fn apply(&self, input: &[IqSample]) -> Vec<IqSample> {
        let half = HALF_WIDTH as isize;
        let mut out = Vec::with_capacity((input.len() as f64 / self.ratio) as usize);

        for n in 0.. {
            let t = n as f64 * self.ratio;
            let center = t.floor() as isize;
            if center + half + 1 >= input.len() as isize {
                break;
            }

            let mut acc = IqSample::new(0.0, 0.0);
            for i in (center - half + 1).max(0)..=center + half {
                let u = t - i as f64;
                let window = 0.54 + 0.46 * (PI * u / HALF_WIDTH as f64).cos();
                acc += input[i as usize] * (sinc(u) * window);
            }
            out.push(acc);
        }

        out
    }
}
