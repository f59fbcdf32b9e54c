//! Mueller-Muller timing error detector
//!
//! Decision-directed: compares the current sample against the decision two
//! symbols back, cross-weighted by the symbol in between.
//!
//! ```text
//! x = (d[k] - d[k-2]) · conj(y[k-1])
//! z = (y[k] - y[k-2]) · conj(d[k-1])
//! e = Re(z - x)
//! ```
//!
//! `y` are the selected samples and `d` their hard decisions. For a pulse
//! `p(t)` sampled `τ` away from its peak, `E[e] ∝ p(T + τ) - p(τ - T)`: zero
//! at the optimum, negative when sampling late, positive when early.

use crate::common::IqSample;

/// The two most recent entries of a per-symbol sequence
///
/// Slots start at zero; those zeros stand in for the two outputs that
/// precede the first real decision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SymbolHistory {
    /// Entry `k-1`
    pub newest: IqSample,
    /// Entry `k-2`
    pub oldest: IqSample,
}

impl SymbolHistory {
    /// Slide in entry `k`, dropping `k-2`
    #[inline]
    pub fn push(&mut self, value: IqSample) {
        self.oldest = self.newest;
        self.newest = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Timing error for symbol `k`
///
/// # Arguments
/// * `sample` - Selected input sample for symbol `k`
/// * `decision` - Slicer output for `sample`
/// * `samples` - Selected samples `k-1` and `k-2`
/// * `decisions` - Decisions `k-1` and `k-2`
#[inline]
pub fn mueller_muller_error(
    sample: IqSample,
    decision: IqSample,
    samples: &SymbolHistory,
    decisions: &SymbolHistory,
) -> f64 {
    let x = (decision - decisions.oldest) * samples.newest.conj();
    let z = (sample - samples.oldest) * decisions.newest.conj();
    (z - x).re
}
