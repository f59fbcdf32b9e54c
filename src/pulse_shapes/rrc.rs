//! Root Raised Cosine (RRC) pulse shaping filter
//!
//! When convolved with itself (TX then RX matched filter), produces zero
//! ISI at symbol centers.

use crate::traits::PulseShape;
use std::f64::consts::PI;

/// Root Raised Cosine filter
#[derive(Debug, Clone)]
pub struct RootRaisedCosine {
    coeffs: Vec<f64>,
    span: usize,
}

impl RootRaisedCosine {
    /// Create a new RRC filter
    ///
    /// # Arguments
    /// * `samples_per_symbol` - Number of samples per symbol period
    /// * `alpha` - Roll-off factor (excess bandwidth), typically 0.35
    /// * `span` - Filter span in symbols (each side of center)
    ///
    /// # Panics
    /// Panics if `samples_per_symbol` is zero
    pub fn new(samples_per_symbol: usize, alpha: f64, span: usize) -> Self {
        assert!(samples_per_symbol > 0, "samples_per_symbol must be nonzero");
        Self {
            coeffs: generate_rrc_coefficients(samples_per_symbol, alpha, span),
            span,
        }
    }

    /// Create with default parameters (α=0.35, span=6)
    pub fn default_for_sps(samples_per_symbol: usize) -> Self {
        Self::new(samples_per_symbol, super::DEFAULT_ALPHA, super::DEFAULT_SPAN)
    }
}

impl PulseShape for RootRaisedCosine {
    fn filter_len(&self) -> usize {
        self.coeffs.len()
    }

    fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    fn span_symbols(&self) -> usize {
        self.span
    }
}

/// Standard RRC impulse response with the t = 0 and t = ±T/(4α)
/// singularities handled explicitly, normalized to unit energy
fn generate_rrc_coefficients(samples_per_symbol: usize, alpha: f64, span: usize) -> Vec<f64> {
    let filter_len = 2 * span * samples_per_symbol + 1;
    let center = (filter_len - 1) as f64 / 2.0;

    let mut coeffs: Vec<f64> = (0..filter_len)
        .map(|i| {
            // t in symbol periods
            let t = (i as f64 - center) / samples_per_symbol as f64;

            if t.abs() < 1e-10 {
                1.0 + alpha * (4.0 / PI - 1.0)
            } else if (t.abs() - 1.0 / (4.0 * alpha)).abs() < 1e-10 {
                let term1 = (1.0 + 2.0 / PI) * (PI / (4.0 * alpha)).sin();
                let term2 = (1.0 - 2.0 / PI) * (PI / (4.0 * alpha)).cos();
                alpha / 2.0_f64.sqrt() * (term1 + term2)
            } else {
                let num = (PI * t * (1.0 - alpha)).sin()
                    + 4.0 * alpha * t * (PI * t * (1.0 + alpha)).cos();
                let den = PI * t * (1.0 - (4.0 * alpha * t).powi(2));
                num / den
            }
        })
        .collect();

    let norm = coeffs.iter().map(|x| x * x).sum::<f64>().sqrt();
    for c in &mut coeffs {
        *c /= norm;
    }

    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::convolve;
    use crate::common::IqSample;

    #[test]
    fn test_rrc_filter_length() {
        let rrc = RootRaisedCosine::new(4, 0.35, 6);
        // 2 * 6 * 4 + 1 = 49 taps
        assert_eq!(rrc.filter_len(), 49);
        assert_eq!(rrc.group_delay(), 24);
    }

    #[test]
    fn test_rrc_symmetry() {
        let rrc = RootRaisedCosine::new(8, 0.35, 6);
        let coeffs = rrc.coefficients();
        let len = coeffs.len();
        for i in 0..len / 2 {
            assert!(
                (coeffs[i] - coeffs[len - 1 - i]).abs() < 1e-10,
                "Asymmetric at index {}: {} vs {}",
                i,
                coeffs[i],
                coeffs[len - 1 - i]
            );
        }
    }

    #[test]
    fn test_rrc_unit_energy() {
        let rrc = RootRaisedCosine::new(8, 0.35, 6);
        let energy: f64 = rrc.coefficients().iter().map(|x| x * x).sum();
        assert!((energy - 1.0).abs() < 1e-10, "Filter energy: {}", energy);
    }

    #[test]
    fn test_rrc_singularity_taps_are_finite() {
        // α = 0.25 puts t = ±T exactly on a tap
        let rrc = RootRaisedCosine::new(8, 0.25, 4);
        assert!(rrc.coefficients().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_matched_pair_is_nearly_isi_free() {
        let rrc = RootRaisedCosine::new(8, 0.35, 6);
        let impulse = [IqSample::new(1.0, 0.0)];
        let cascade = convolve(&rrc.apply(&impulse), rrc.coefficients());
        let peak_idx = 2 * rrc.group_delay();
        let peak = cascade[peak_idx].re;

        let mut k = 8;
        while peak_idx + k < cascade.len() {
            let ratio = cascade[peak_idx + k].re.abs() / peak;
            assert!(ratio < 0.02, "ISI at +{} samples: {}", k, ratio);
            k += 8;
        }
    }
}
