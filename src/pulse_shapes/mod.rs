//! Pulse shaping filter implementations
//!
//! Used to build oversampled test streams for the timing loop:
//! - Raised Cosine: zero ISI on its own (TX-only shaping)
//! - Root Raised Cosine: zero ISI after a matched RRC at the receiver

mod raised_cosine;
mod rrc;

pub use raised_cosine::RaisedCosine;
pub use rrc::RootRaisedCosine;

use crate::common::IqSample;
use crate::traits::PulseShape;

/// Default roll-off factor
pub const DEFAULT_ALPHA: f64 = 0.35;

/// Default RRC span in symbols (each side)
pub const DEFAULT_SPAN: usize = 6;

/// Default raised-cosine length in taps
pub const DEFAULT_RC_TAPS: usize = 101;

/// Place one impulse per symbol, followed by `sps - 1` zeros
pub fn upsample(symbols: &[IqSample], sps: usize) -> Vec<IqSample> {
    let mut out = vec![IqSample::new(0.0, 0.0); symbols.len() * sps];
    for (slot, &sym) in out.iter_mut().step_by(sps.max(1)).zip(symbols) {
        *slot = sym;
    }
    out
}

/// Upsample and pulse-shape a symbol sequence
///
/// Symbol `n` peaks at sample `n * sps + pulse.group_delay()`.
pub fn shape_symbols<P: PulseShape>(symbols: &[IqSample], sps: usize, pulse: &P) -> Vec<IqSample> {
    pulse.apply(&upsample(symbols, sps))
}
