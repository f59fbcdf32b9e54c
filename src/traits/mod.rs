//! Core DSP traits for the timing recovery engine
//!
//! These traits define mathematical behavior, not waveforms.
//! Each trait represents one orthogonal axis of receiver configuration.

mod pulse_shape;
mod slicer;
mod timing;

pub use pulse_shape::PulseShape;
pub(crate) use pulse_shape::convolve;
pub use slicer::Slicer;
pub use timing::SymbolTiming;
