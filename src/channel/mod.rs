//! Test-channel impairments
//!
//! Builds realistic inputs for the timing loop: a fractional sampling
//! offset, a sample clock running off-nominal, and additive noise, applied
//! in that order.

mod drift;
mod fractional_delay;
mod noise;

pub use drift::ClockDrift;
pub use fractional_delay::{FractionalDelay, DEFAULT_DELAY_TAPS};
pub use noise::NoiseGenerator;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::IqSample;
use crate::error::Result;
use crate::utils::mean_power;

/// Impairments to apply; `None` skips a stage
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelParams {
    /// Fractional delay in `[0, 1)` samples
    pub delay: Option<f64>,
    /// Interpolator length for the delay stage
    pub delay_taps: usize,
    /// Receive clock offset in parts per million
    pub drift_ppm: Option<f64>,
    /// SNR in dB, measured against the impaired signal's mean power
    pub snr_db: Option<f64>,
    pub seed: u64,
}

impl Default for ChannelParams {
    fn default() -> Self {
        Self {
            delay: None,
            delay_taps: DEFAULT_DELAY_TAPS,
            drift_ppm: None,
            snr_db: None,
            seed: 0,
        }
    }
}

impl ChannelParams {
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_drift_ppm(mut self, ppm: f64) -> Self {
        self.drift_ppm = Some(ppm);
        self
    }

    pub fn with_snr_db(mut self, snr_db: f64) -> Self {
        self.snr_db = Some(snr_db);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Delay -> drift -> noise impairment chain
pub struct Channel {
    params: ChannelParams,
    delay: Option<FractionalDelay>,
    drift: Option<ClockDrift>,
    /// Seeds one noise generator per block
    seed_rng: ChaCha8Rng,
}

impl Channel {
    /// Build the chain, validating every enabled stage
    pub fn new(params: ChannelParams) -> Result<Self> {
        let delay = params
            .delay
            .map(|d| FractionalDelay::new(d, params.delay_taps))
            .transpose()?;
        let drift = params.drift_ppm.map(ClockDrift::new).transpose()?;
        if let Some(snr_db) = params.snr_db {
            // Signal power is only known per block; check the SNR itself now
            NoiseGenerator::from_snr_db(snr_db, 1.0, 0)?;
        }

        Ok(Self {
            seed_rng: ChaCha8Rng::seed_from_u64(params.seed),
            params,
            delay,
            drift,
        })
    }

    pub fn params(&self) -> &ChannelParams {
        &self.params
    }

    /// Samples from input to output introduced by the delay stage
    pub fn group_delay(&self) -> f64 {
        self.delay.as_ref().map_or(0.0, FractionalDelay::group_delay)
    }

    /// Run a block through every enabled stage
    pub fn apply(&mut self, input: &[IqSample]) -> Result<Vec<IqSample>> {
        let mut out = match &self.delay {
            Some(delay) => delay.apply(input),
            None => input.to_vec(),
        };

        if let Some(drift) = &self.drift {
            out = drift.apply(&out);
        }

        if let Some(snr_db) = self.params.snr_db {
            let signal_power = mean_power(&out);
            let mut noise = NoiseGenerator::from_snr_db(snr_db, signal_power, self.seed_rng.gen())?;
            noise.add_to(&mut out);
        }

        debug!(
            "channel: {} -> {} samples (delay {:?}, drift {:?} ppm, snr {:?} dB)",
            input.len(),
            out.len(),
            self.params.delay,
            self.params.drift_ppm,
            self.params.snr_db
        );

        Ok(out)
    }
}
