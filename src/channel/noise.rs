//! Complex additive white Gaussian noise
//!
//! Box-Muller on a seeded ChaCha8 stream, one Gaussian per axis.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

use crate::common::IqSample;
use crate::error::{RecoveryError, Result};
use crate::utils::db_to_power_ratio;

/// AWGN generator with a fixed per-axis standard deviation
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    /// Standard deviation of each of I and Q
    sigma: f64,
    rng: ChaCha8Rng,
    /// Second Box-Muller output, unscaled
    cached: Option<f64>,
}

impl NoiseGenerator {
    /// Noise with per-axis standard deviation `sigma`
    pub fn new(sigma: f64, seed: u64) -> Result<Self> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(RecoveryError::InvalidChannel(format!(
                "noise sigma must be finite and non-negative, got {}",
                sigma
            )));
        }
        Ok(Self {
            sigma,
            rng: ChaCha8Rng::seed_from_u64(seed),
            cached: None,
        })
    }

    /// Noise at `snr_db` below a signal of mean power `signal_power`
    ///
    /// Total complex noise power is split evenly between I and Q.
    pub fn from_snr_db(snr_db: f64, signal_power: f64, seed: u64) -> Result<Self> {
        if !snr_db.is_finite() {
            return Err(RecoveryError::InvalidChannel(format!("SNR must be finite, got {}", snr_db)));
        }
        let noise_power = signal_power / db_to_power_ratio(snr_db);
        Self::new((noise_power / 2.0).sqrt(), seed)
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// One Box-Muller draw: two independent unit Gaussians
    fn unit_pair(&mut self) -> (f64, f64) {
        // Keep u1 off zero so the log stays finite
        let u1 = self.rng.gen::<f64>().max(1e-10);
        let theta = 2.0 * PI * self.rng.gen::<f64>();
        let r = (-2.0 * u1.ln()).sqrt();
        (r * theta.cos(), r * theta.sin())
    }

    /// Next real Gaussian sample with standard deviation `sigma`
    ///
    /// Alternates between the two halves of each draw.
    pub fn next_sample(&mut self) -> f64 {
        let z = match self.cached.take() {
            Some(z) => z,
            None => {
                let (z0, z1) = self.unit_pair();
                self.cached = Some(z1);
                z0
            }
        };
        z * self.sigma
    }

    /// Next complex noise sample
    ///
    /// A fresh draw supplies I and Q together; a half left over from
    /// `next_sample` is spent on I first so no draw is wasted.
    pub fn next_iq(&mut self) -> IqSample {
        let (re, im) = match self.cached.take() {
            Some(z) => {
                let (z0, z1) = self.unit_pair();
                self.cached = Some(z1);
                (z, z0)
            }
            None => self.unit_pair(),
        };
        IqSample::new(re * self.sigma, im * self.sigma)
    }

    /// Add noise to every sample in place
    pub fn add_to(&mut self, samples: &mut [IqSample]) {
        for s in samples.iter_mut() {
            *s += self.next_iq();
        }
    }
}
