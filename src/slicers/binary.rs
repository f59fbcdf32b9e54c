//! Binary slicer (one bit per axis)
//!
//! I ≥ 0 → +1, I < 0 → -1, and independently for Q.
//! Zero belongs to the +1 region on both axes.

use crate::common::IqSample;
use crate::traits::Slicer;

/// ±1-per-axis hard decision
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySlicer;

impl BinarySlicer {
    #[inline]
    fn rail(x: f64) -> f64 {
        if x >= 0.0 { 1.0 } else { -1.0 }
    }

    /// Bit view of a decision: +1 → 1, -1 → 0, per axis
    pub fn to_bits(decision: IqSample) -> (u8, u8) {
        ((decision.re > 0.0) as u8, (decision.im > 0.0) as u8)
    }
}

impl Slicer for BinarySlicer {
    #[inline]
    fn decide(&self, sample: IqSample) -> IqSample {
        IqSample::new(Self::rail(sample.re), Self::rail(sample.im))
    }

    fn levels(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_slicer_quadrants() {
        let s = BinarySlicer;
        assert_eq!(s.decide(IqSample::new(0.7, 0.2)), IqSample::new(1.0, 1.0));
        assert_eq!(s.decide(IqSample::new(-0.7, 0.2)), IqSample::new(-1.0, 1.0));
        assert_eq!(s.decide(IqSample::new(0.7, -0.2)), IqSample::new(1.0, -1.0));
        assert_eq!(s.decide(IqSample::new(-3.0, -1e-9)), IqSample::new(-1.0, -1.0));
    }

    #[test]
    fn test_zero_maps_to_positive_rail() {
        let s = BinarySlicer;
        assert_eq!(s.decide(IqSample::new(0.0, 0.0)), IqSample::new(1.0, 1.0));
        assert_eq!(s.decide(IqSample::new(-0.0, 0.0)), IqSample::new(1.0, 1.0));
    }

    #[test]
    fn test_bits_view() {
        assert_eq!(BinarySlicer::to_bits(IqSample::new(1.0, -1.0)), (1, 0));
        assert_eq!(BinarySlicer::to_bits(IqSample::new(-1.0, 1.0)), (0, 1));
        assert_eq!(BinarySlicer.levels(), 2);
    }
}
