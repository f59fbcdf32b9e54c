//! Error types for timing recovery and test-vector generation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecoveryError {
    #[error("Samples per symbol must be finite and >= 1, got {0}")]
    InvalidSamplesPerSymbol(f64),

    #[error("Loop gain must be finite and non-negative, got {0}")]
    InvalidGain(f64),

    #[error("Lookahead margin must be non-negative, got {0}")]
    InvalidLookaheadMargin(i64),

    #[error("Initial mu must be finite and non-negative, got {0}")]
    InvalidInitialMu(f64),

    #[error("Initial index {0} leaves no room for the lookahead margin")]
    InvalidInitialIndex(usize),

    #[error("Timing accumulator diverged at symbol {symbol}: mu = {value}")]
    NumericDivergence { symbol: usize, value: f64 },

    #[error("Sample buffer of {len} bytes is not a whole number of f32 I/Q pairs")]
    MalformedSamples { len: usize },

    #[error("Invalid channel parameter: {0}")]
    InvalidChannel(String),
}

pub type Result<T> = std::result::Result<T, RecoveryError>;
