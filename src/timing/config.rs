//! Loop configuration
//!
//! Every tuning constant of the loop lives here. Defaults are empirical
//! values for 8 samples per symbol.

use super::{DEFAULT_GAIN, DEFAULT_LOOKAHEAD_MARGIN, DEFAULT_SAMPLES_PER_SYMBOL};
use crate::error::{RecoveryError, Result};

/// Float values at or above this cannot become a sample index
const INDEX_LIMIT: f64 = usize::MAX as f64;

/// Mueller-Muller loop configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MmConfig {
    /// Input samples per transmitted symbol; must match the upstream shaping filter
    pub sps: f64,
    /// Loop gain applied to the timing error (lock speed vs. jitter)
    pub gain: f64,
    /// Samples that must remain past the read cursor before another symbol is taken
    pub lookahead_margin: usize,
    /// Starting fractional offset; whole samples are folded into `initial_index`
    pub initial_mu: f64,
    /// Starting input index (e.g. a known preamble offset)
    pub initial_index: usize,
}

impl Default for MmConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES_PER_SYMBOL)
    }
}

impl MmConfig {
    /// Canonical configuration for the given oversampling ratio
    pub fn new(sps: f64) -> Self {
        Self {
            sps,
            gain: DEFAULT_GAIN,
            lookahead_margin: DEFAULT_LOOKAHEAD_MARGIN,
            initial_mu: 0.0,
            initial_index: 0,
        }
    }

    /// Aggressive gain: locks within a handful of symbols, tracks more noise
    pub fn fast_acquisition(sps: f64) -> Self {
        Self::new(sps).with_gain(0.6)
    }

    /// Gentle gain for long, noisy captures where lock time matters less
    pub fn low_jitter(sps: f64) -> Self {
        Self::new(sps).with_gain(0.1)
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    pub fn with_lookahead_margin(mut self, margin: usize) -> Self {
        self.lookahead_margin = margin;
        self
    }

    pub fn with_initial_mu(mut self, mu: f64) -> Self {
        self.initial_mu = mu;
        self
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Check every field; called by the loop constructor before any work
    ///
    /// Besides per-field ranges, the index sums the loop relies on
    /// (two symbols plus the margin, start position plus the margin) must
    /// fit in `usize`.
    pub fn validate(&self) -> Result<()> {
        if !self.sps.is_finite() || self.sps < 1.0 || 2.0 * self.sps >= INDEX_LIMIT {
            return Err(RecoveryError::InvalidSamplesPerSymbol(self.sps));
        }
        if !self.gain.is_finite() || self.gain < 0.0 {
            return Err(RecoveryError::InvalidGain(self.gain));
        }
        if !self.initial_mu.is_finite() || self.initial_mu < 0.0 || self.initial_mu >= INDEX_LIMIT {
            return Err(RecoveryError::InvalidInitialMu(self.initial_mu));
        }
        if self.two_symbol_span().checked_add(self.lookahead_margin).is_none() {
            return Err(RecoveryError::InvalidLookaheadMargin(
                i64::try_from(self.lookahead_margin).unwrap_or(i64::MAX),
            ));
        }
        let start_fits = self
            .initial_index
            .checked_add(self.initial_mu.floor() as usize)
            .and_then(|start| start.checked_add(self.lookahead_margin))
            .is_some();
        if !start_fits {
            return Err(RecoveryError::InvalidInitialIndex(self.initial_index));
        }
        Ok(())
    }

    /// Largest timing correction applied in one update (half a symbol)
    pub fn max_correction(&self) -> f64 {
        self.sps / 2.0
    }

    fn two_symbol_span(&self) -> usize {
        (2.0 * self.sps).ceil() as usize
    }

    /// Shortest stream that lets the loop complete two full iterations
    ///
    /// Saturates at `usize::MAX` for configurations `validate` rejects.
    pub fn min_input_len(&self) -> usize {
        self.two_symbol_span().saturating_add(self.lookahead_margin)
    }

    /// Starting `(input_index, mu)` with whole samples of `initial_mu` folded in
    pub(crate) fn start_position(&self) -> (usize, f64) {
        let whole = self.initial_mu.floor();
        (self.initial_index.saturating_add(whole as usize), self.initial_mu - whole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MmConfig::default();
        assert_eq!(config.sps, 8.0);
        assert_eq!(config.gain, 0.3);
        assert_eq!(config.lookahead_margin, 16);
        assert_eq!(config.initial_mu, 0.0);
        assert_eq!(config.initial_index, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = MmConfig::new(4.0)
            .with_gain(0.05)
            .with_lookahead_margin(24)
            .with_initial_mu(0.5)
            .with_initial_index(100);
        assert_eq!(config.sps, 4.0);
        assert_eq!(config.gain, 0.05);
        assert_eq!(config.lookahead_margin, 24);
        assert_eq!(config.start_position(), (100, 0.5));
    }

    #[test]
    fn test_presets_order_gains() {
        let fast = MmConfig::fast_acquisition(8.0);
        let slow = MmConfig::low_jitter(8.0);
        assert!(fast.gain > MmConfig::new(8.0).gain);
        assert!(slow.gain < MmConfig::new(8.0).gain);
    }

    #[test]
    fn test_rejects_sps_below_one() {
        assert_eq!(
            MmConfig::new(0.5).validate(),
            Err(RecoveryError::InvalidSamplesPerSymbol(0.5))
        );
        assert!(MmConfig::new(f64::NAN).validate().is_err());
        assert!(MmConfig::new(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_gain() {
        assert_eq!(
            MmConfig::new(8.0).with_gain(-0.1).validate(),
            Err(RecoveryError::InvalidGain(-0.1))
        );
        assert!(MmConfig::new(8.0).with_gain(f64::INFINITY).validate().is_err());
        assert!(MmConfig::new(8.0).with_gain(0.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_initial_mu() {
        assert_eq!(
            MmConfig::new(8.0).with_initial_mu(-0.25).validate(),
            Err(RecoveryError::InvalidInitialMu(-0.25))
        );
    }

    #[test]
    fn test_whole_initial_mu_folds_into_index() {
        let config = MmConfig::new(8.0).with_initial_mu(2.75).with_initial_index(3);
        assert_eq!(config.start_position(), (5, 0.75));
    }

    #[test]
    fn test_rejects_sps_too_large_to_index() {
        assert_eq!(
            MmConfig::new(1e20).validate(),
            Err(RecoveryError::InvalidSamplesPerSymbol(1e20))
        );
        assert!(MmConfig::new(1e6).validate().is_ok());
    }

    #[test]
    fn test_rejects_margin_that_overflows_span() {
        assert_eq!(
            MmConfig::new(8.0).with_lookahead_margin(usize::MAX).validate(),
            Err(RecoveryError::InvalidLookaheadMargin(i64::MAX))
        );
        assert_eq!(
            MmConfig::new(8.0).with_lookahead_margin(usize::MAX - 16).validate(),
            Ok(())
        );
    }

    #[test]
    fn test_rejects_initial_mu_too_large_to_index() {
        assert_eq!(
            MmConfig::new(8.0).with_initial_mu(1e300).validate(),
            Err(RecoveryError::InvalidInitialMu(1e300))
        );
    }

    #[test]
    fn test_rejects_start_position_past_index_range() {
        let config = MmConfig::new(8.0).with_initial_index(usize::MAX - 4);
        assert_eq!(
            config.validate(),
            Err(RecoveryError::InvalidInitialIndex(usize::MAX - 4))
        );

        let config = MmConfig::new(8.0)
            .with_initial_index(usize::MAX - 20)
            .with_initial_mu(10.0);
        assert_eq!(
            config.validate(),
            Err(RecoveryError::InvalidInitialIndex(usize::MAX - 20))
        );
        assert!(MmConfig::new(8.0).with_initial_index(usize::MAX - 16).validate().is_ok());
    }

    #[test]
    fn test_index_helpers_saturate_on_unvalidated_config() {
        assert_eq!(MmConfig::new(1e20).min_input_len(), usize::MAX);
        assert_eq!(MmConfig::new(8.0).with_lookahead_margin(usize::MAX).min_input_len(), usize::MAX);
        assert_eq!(
            MmConfig::new(8.0).with_initial_index(usize::MAX).with_initial_mu(3.5).start_position(),
            (usize::MAX, 0.5)
        );
    }

    #[test]
    fn test_min_input_len() {
        assert_eq!(MmConfig::new(8.0).min_input_len(), 32);
        assert_eq!(MmConfig::new(2.5).with_lookahead_margin(0).min_input_len(), 5);
    }
}
