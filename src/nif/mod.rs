//! NIF interface for Elixir
//!
//! Stateless entry points: every call builds a fresh loop from its
//! arguments, runs it over the whole buffer and returns the symbols.
//! Optional arguments arrive as `nil` and fall back to `MmConfig` defaults.

use rustler::{Binary, Env, NifResult, OwnedBinary};

use crate::common::{pack_iq_into, unpack_iq, IqSample, PACKED_IQ_BYTES};
use crate::error::RecoveryError;
use crate::timing::{recover_symbols, MmConfig};

rustler::atoms! {
    ok,
}

fn to_term_error(e: RecoveryError) -> rustler::Error {
    rustler::Error::Term(Box::new(e.to_string()))
}

/// Assemble a loop configuration from optional NIF arguments
fn build_config(
    sps: f64,
    gain: Option<f64>,
    lookahead: Option<i64>,
    initial_mu: Option<f64>,
    initial_index: Option<u64>,
) -> Result<MmConfig, RecoveryError> {
    let mut config = MmConfig::new(sps);
    if let Some(gain) = gain {
        config = config.with_gain(gain);
    }
    if let Some(margin) = lookahead {
        let margin = usize::try_from(margin).map_err(|_| RecoveryError::InvalidLookaheadMargin(margin))?;
        config = config.with_lookahead_margin(margin);
    }
    if let Some(mu) = initial_mu {
        config = config.with_initial_mu(mu);
    }
    if let Some(index) = initial_index {
        config = config.with_initial_index(index as usize);
    }
    config.validate()?;
    Ok(config)
}

/// Recover symbols from a list of `{re, im}` tuples
#[rustler::nif(schedule = "DirtyCpu")]
pub fn recover(
    samples: Vec<(f64, f64)>,
    sps: f64,
    gain: Option<f64>,
    lookahead: Option<i64>,
    initial_mu: Option<f64>,
    initial_index: Option<u64>,
) -> NifResult<(rustler::Atom, Vec<(f64, f64)>)> {
    let config = build_config(sps, gain, lookahead, initial_mu, initial_index).map_err(to_term_error)?;
    let input: Vec<IqSample> = samples.iter().map(|&(re, im)| IqSample::new(re, im)).collect();

    let symbols = recover_symbols(&input, config).map_err(to_term_error)?;
    Ok((ok(), symbols.iter().map(|s| (s.re, s.im)).collect()))
}

/// Recover symbols from packed f32 I/Q
/// Input and output: interleaved native-endian f32 pairs
#[rustler::nif(schedule = "DirtyCpu")]
pub fn recover_binary<'a>(
    env: Env<'a>,
    iq: Binary,
    sps: f64,
    gain: Option<f64>,
) -> NifResult<(rustler::Atom, Binary<'a>)> {
    let config = build_config(sps, gain, None, None, None).map_err(to_term_error)?;
    let input = unpack_iq(iq.as_slice()).map_err(to_term_error)?;
    let symbols = recover_symbols(&input, config).map_err(to_term_error)?;

    let mut owned = OwnedBinary::new(symbols.len() * PACKED_IQ_BYTES)
        .ok_or_else(|| rustler::Error::Term(Box::new("binary_alloc_failed")))?;
    pack_iq_into(&symbols, owned.as_mut_slice());

    // Release ownership to BEAM garbage collector
    Ok((ok(), owned.release(env)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_arguments_use_defaults() {
        assert_eq!(build_config(8.0, None, None, None, None).unwrap(), MmConfig::new(8.0));
    }

    #[test]
    fn test_overrides_applied() {
        let config = build_config(4.0, Some(0.1), Some(8), Some(0.5), Some(12)).unwrap();
        assert_eq!(
            config,
            MmConfig::new(4.0)
                .with_gain(0.1)
                .with_lookahead_margin(8)
                .with_initial_mu(0.5)
                .with_initial_index(12)
        );
    }

    #[test]
    fn test_negative_lookahead_rejected() {
        assert_eq!(
            build_config(8.0, None, Some(-1), None, None),
            Err(RecoveryError::InvalidLookaheadMargin(-1))
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert_eq!(
            build_config(0.5, None, None, None, None),
            Err(RecoveryError::InvalidSamplesPerSymbol(0.5))
        );
        assert_eq!(
            build_config(8.0, Some(-2.0), None, None, None),
            Err(RecoveryError::InvalidGain(-2.0))
        );
    }

    #[test]
    fn test_huge_initial_index_rejected() {
        assert_eq!(
            build_config(8.0, None, None, None, Some(u64::MAX)),
            Err(RecoveryError::InvalidInitialIndex(u64::MAX as usize))
        );
        assert!(build_config(8.0, None, None, None, Some(1 << 40)).is_ok());
    }

    #[test]
    fn test_error_text_crosses_boundary() {
        let err = to_term_error(RecoveryError::InvalidGain(-2.0));
        assert!(matches!(err, rustler::Error::Term(_)));
    }
}
