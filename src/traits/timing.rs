//! SymbolTiming trait - Sample/symbol rate relationship
//!
//! Defines how an oversampled stream is reduced to one sample per symbol.
//! Implementations own their loop state; the input stream is only borrowed,
//! so several recoverers can run over the same samples.

use crate::common::IqSample;
use crate::error::Result;

/// Symbol timing recovery trait
///
/// Implementations decide, symbol by symbol, which input sample sits
/// closest to the optimal sampling instant.
pub trait SymbolTiming: Send + Sync {
    /// Nominal samples per symbol period
    fn samples_per_symbol(&self) -> f64;

    /// Recover one sample per symbol from `input`
    ///
    /// Continues from the current loop state; call `reset` first to start
    /// a fresh session.
    fn recover(&mut self, input: &[IqSample]) -> Result<Vec<IqSample>>;

    /// Return to the initial loop state
    fn reset(&mut self);

    /// Upper bound on symbols recoverable from `input_len` samples
    fn max_symbols(&self, input_len: usize) -> usize {
        (input_len as f64 / self.samples_per_symbol()).ceil() as usize
    }
}
