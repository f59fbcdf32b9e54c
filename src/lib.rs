//! Clock Recovery - Mueller-Muller symbol timing for MinuteModem
//!
//! Takes an oversampled complex baseband stream and returns one sample per
//! symbol, chosen by a decision-directed timing loop. Pulse shaping and
//! channel impairments are provided for building test streams; framing,
//! carrier recovery and equalization live elsewhere.

pub mod channel;
pub mod common;
pub mod error;
pub mod nif;
pub mod pulse_shapes;
pub mod slicers;
pub mod timing;
pub mod traits;
mod utils;

// Re-export core types for convenience
pub use common::IqSample;
pub use error::{RecoveryError, Result};
pub use slicers::BinarySlicer;
pub use timing::{recover_symbols, MmConfig, MuellerMuller};
pub use traits::{PulseShape, Slicer, SymbolTiming};

rustler::init!("Elixir.MinuteModemCore.DSP.ClockRecovery");
