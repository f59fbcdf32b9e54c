//! Utility functions for DSP operations

mod math;

pub use math::*;
