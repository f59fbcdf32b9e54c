//! Slicer trait - Hard decisions on I/Q samples
//!
//! Maps a noisy sample to the nearest ideal symbol point. Decision-directed
//! timing loops compare these decisions against the raw samples.

use crate::common::IqSample;

/// Hard-decision trait
pub trait Slicer: Send + Sync {
    /// Nearest ideal symbol point for `sample`
    fn decide(&self, sample: IqSample) -> IqSample;

    /// Number of decision levels per axis
    fn levels(&self) -> usize;
}
