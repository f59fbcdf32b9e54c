//! Mueller-Muller clock recovery loop
//!
//! A fractional-rate decimator steered by closed-loop feedback. Each
//! iteration picks the input sample nearest the current timing estimate,
//! slices it, feeds sample and decision to the detector, and advances the
//! read cursor by one nominal symbol plus `gain · error`.
//!
//! ```text
//! mu  <- mu + sps + gain · e
//! idx <- idx + floor(mu)
//! mu  <- mu - floor(mu)          // back into [0, 1)
//! ```
//!
//! The loop stops when fewer than `lookahead_margin` samples remain past
//! the cursor, or when it has emitted as many symbols as there are input
//! samples. Corrections larger than half a symbol are clamped and counted.

use log::{debug, trace, warn};

use super::config::MmConfig;
use super::detector::{mueller_muller_error, SymbolHistory};
use crate::common::IqSample;
use crate::error::{RecoveryError, Result};
use crate::slicers::BinarySlicer;
use crate::traits::{Slicer, SymbolTiming};

/// Mutable loop state for one recovery session
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryState {
    /// Fractional timing accumulator, in `[0, 1)` between iterations
    pub mu: f64,
    /// Integer read cursor into the input stream
    pub input_index: usize,
    /// Selected samples `k-1`, `k-2`
    pub samples: SymbolHistory,
    /// Decisions `k-1`, `k-2`
    pub decisions: SymbolHistory,
    /// Symbols emitted so far
    pub symbols: usize,
    /// Updates whose correction hit the half-symbol clamp
    pub clamped_updates: usize,
}

impl RecoveryState {
    fn new(config: &MmConfig) -> Self {
        let (input_index, mu) = config.start_position();
        Self {
            mu,
            input_index,
            samples: SymbolHistory::default(),
            decisions: SymbolHistory::default(),
            symbols: 0,
            clamped_updates: 0,
        }
    }
}

/// Result of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Sample emitted for this symbol
    pub sample: IqSample,
    /// Slicer decision for `sample`
    pub decision: IqSample,
    /// Detector output
    pub error: f64,
    /// Correction actually applied (after clamping)
    pub correction: f64,
    /// Cursor after the update
    pub input_index: usize,
    /// Fraction after the update
    pub mu: f64,
}

/// Mueller-Muller symbol timing recovery
///
/// Generic over the slicer so decision regions can be swapped without
/// touching the loop.
#[derive(Debug, Clone)]
pub struct MuellerMuller<S: Slicer = BinarySlicer> {
    config: MmConfig,
    slicer: S,
    state: RecoveryState,
}

impl MuellerMuller<BinarySlicer> {
    /// Create a loop with the ±1 binary slicer
    pub fn new(config: MmConfig) -> Result<Self> {
        Self::with_slicer(config, BinarySlicer)
    }
}

impl<S: Slicer> MuellerMuller<S> {
    /// Create a loop with a custom slicer
    ///
    /// Fails fast on an invalid configuration; no samples are touched.
    pub fn with_slicer(config: MmConfig, slicer: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: RecoveryState::new(&config),
            config,
            slicer,
        })
    }

    pub fn config(&self) -> &MmConfig {
        &self.config
    }

    pub fn state(&self) -> &RecoveryState {
        &self.state
    }

    /// Whether another symbol may be read from a stream of `len` samples
    fn can_step(&self, len: usize) -> bool {
        self.state.symbols.saturating_add(2) < len
            && self.state.input_index.saturating_add(self.config.lookahead_margin) < len
    }

    /// Run one iteration against `input`
    ///
    /// Returns `Ok(None)` once the stream is exhausted (including streams
    /// too short to start). The same `input` must be passed on every call
    /// of a session.
    pub fn step(&mut self, input: &[IqSample]) -> Result<Option<StepOutcome>> {
        if input.len() < self.config.min_input_len() || !self.can_step(input.len()) {
            return Ok(None);
        }

        let state = &mut self.state;
        // mu stays in [0, 1), so the read never passes the lookahead guard
        let read = state.input_index + state.mu.floor() as usize;
        let sample = input[read];
        let decision = self.slicer.decide(sample);
        let error = mueller_muller_error(sample, decision, &state.samples, &state.decisions);

        let limit = self.config.max_correction();
        let raw = self.config.gain * error;
        let correction = raw.clamp(-limit, limit);
        if raw.abs() > limit {
            state.clamped_updates += 1;
            if state.clamped_updates.is_power_of_two() {
                warn!(
                    "timing correction {:.3} clamped to ±{:.3} at symbol {} ({} clamped so far)",
                    raw, limit, state.symbols, state.clamped_updates
                );
            }
        }

        let mu = state.mu + self.config.sps + correction;
        if !mu.is_finite() {
            return Err(RecoveryError::NumericDivergence {
                symbol: state.symbols,
                value: mu,
            });
        }

        let whole = mu.floor();
        state.input_index = state.input_index.saturating_add(whole as usize);
        state.mu = mu - whole;

        state.samples.push(sample);
        state.decisions.push(decision);
        state.symbols += 1;

        trace!(
            "symbol {}: read {} err {:+.4} -> idx {} mu {:.4}",
            state.symbols - 1,
            read,
            error,
            state.input_index,
            state.mu
        );

        Ok(Some(StepOutcome {
            sample,
            decision,
            error,
            correction,
            input_index: state.input_index,
            mu: state.mu,
        }))
    }

    /// Recover one sample per symbol from `input`
    pub fn recover(&mut self, input: &[IqSample]) -> Result<Vec<IqSample>> {
        if input.len() < self.config.min_input_len() {
            debug!(
                "stream of {} samples is shorter than {} (2 symbols + lookahead), nothing to recover",
                input.len(),
                self.config.min_input_len()
            );
            return Ok(Vec::new());
        }

        debug!(
            "recovering from {} samples at {} sps, gain {}, {}-level slicer",
            input.len(),
            self.config.sps,
            self.config.gain,
            self.slicer.levels()
        );

        let clamped_before = self.state.clamped_updates;
        let mut out = Vec::with_capacity(self.max_symbols(input.len()));
        while let Some(outcome) = self.step(input)? {
            out.push(outcome.sample);
        }

        debug!(
            "recovered {} symbols, cursor at {}, mu {:.4}, {} clamped updates",
            out.len(),
            self.state.input_index,
            self.state.mu,
            self.state.clamped_updates - clamped_before
        );

        Ok(out)
    }

    /// Return to the configured starting state
    pub fn reset(&mut self) {
        self.state = RecoveryState::new(&self.config);
    }
}

impl<S: Slicer> SymbolTiming for MuellerMuller<S> {
    fn samples_per_symbol(&self) -> f64 {
        self.config.sps
    }

    fn recover(&mut self, input: &[IqSample]) -> Result<Vec<IqSample>> {
        MuellerMuller::recover(self, input)
    }

    fn reset(&mut self) {
        MuellerMuller::reset(self)
    }
}
