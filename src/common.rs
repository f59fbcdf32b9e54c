//! Shared sample types and buffer packing
//!
//! Samples cross the NIF boundary as interleaved native-endian f32 I/Q
//! pairs; everything inside the crate works on `Complex64`.

use num_complex::Complex64;

use crate::error::{RecoveryError, Result};

/// One complex baseband measurement
pub type IqSample = Complex64;

/// Bytes per packed I/Q pair (two f32)
pub const PACKED_IQ_BYTES: usize = 8;

/// Unpack interleaved native-endian f32 I/Q bytes
pub fn unpack_iq(bytes: &[u8]) -> Result<Vec<IqSample>> {
    if bytes.len() % PACKED_IQ_BYTES != 0 {
        return Err(RecoveryError::MalformedSamples { len: bytes.len() });
    }

    let samples = bytes
        .chunks_exact(PACKED_IQ_BYTES)
        .map(|pair| {
            let (re, im) = pair.split_at(4);
            let re = f32::from_ne_bytes([re[0], re[1], re[2], re[3]]);
            let im = f32::from_ne_bytes([im[0], im[1], im[2], im[3]]);
            IqSample::new(re as f64, im as f64)
        })
        .collect();

    Ok(samples)
}

/// Pack samples into `out` as interleaved native-endian f32 I/Q
///
/// `out` must hold exactly `samples.len() * PACKED_IQ_BYTES` bytes.
pub fn pack_iq_into(samples: &[IqSample], out: &mut [u8]) {
    debug_assert_eq!(out.len(), samples.len() * PACKED_IQ_BYTES);
    for (sample, slot) in samples.iter().zip(out.chunks_exact_mut(PACKED_IQ_BYTES)) {
        slot[..4].copy_from_slice(&(sample.re as f32).to_ne_bytes());
        slot[4..].copy_from_slice(&(sample.im as f32).to_ne_bytes());
    }
}

/// Pack samples into a freshly allocated byte vector
pub fn pack_iq(samples: &[IqSample]) -> Vec<u8> {
    let mut out = vec![0u8; samples.len() * PACKED_IQ_BYTES];
    pack_iq_into(samples, &mut out);
    out
}

/// Lift real-valued symbols (e.g. ±1 BPSK) onto the I axis
pub fn real_symbols(values: &[f64]) -> Vec<IqSample> {
    values.iter().map(|&v| IqSample::new(v, 0.0)).collect()
}
