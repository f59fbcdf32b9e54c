//! Symbol timing recovery
//!
//! Mueller-Muller clock recovery: a decision-directed loop that picks one
//! input sample per symbol and steers its own sampling phase.

mod config;
mod detector;
mod mueller_muller;


pub use config::MmConfig;
pub use detector::{mueller_muller_error, SymbolHistory};
pub use mueller_muller::{MuellerMuller, RecoveryState, StepOutcome};

use crate::common::IqSample;
use crate::error::Result;

/// Canonical loop gain, trading lock-in speed against steady-state jitter
pub const DEFAULT_GAIN: f64 = 0.3;

/// Samples that must remain past the read cursor before a symbol is taken
pub const DEFAULT_LOOKAHEAD_MARGIN: usize = 16;

/// Oversampling ratio assumed by `MmConfig::default`
pub const DEFAULT_SAMPLES_PER_SYMBOL: f64 = 8.0;

/// One-shot recovery with the binary slicer
pub fn recover_symbols(input: &[IqSample], config: MmConfig) -> Result<Vec<IqSample>> {
    MuellerMuller::new(config)?.recover(input)
}
