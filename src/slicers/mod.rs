//! Slicer implementations
//!
//! Only the binary (±1 per axis) slicer is provided. It covers BPSK and
//! QPSK, the four-or-fewer-level systems the timing loop is tuned for.

mod binary;

pub use binary::BinarySlicer;
