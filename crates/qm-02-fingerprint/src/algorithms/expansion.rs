//! # Payload Expansion
//!
//! Stretches a payload of any length into a deterministic bit stream, then
//! reads the stream two bits at a time.

use sha3::{Digest, Keccak256};
use shared_types::Amplitude;
use std::f64::consts::FRAC_1_SQRT_2;

/// Domain separator prepended to every expansion block.
pub const DOMAIN_TAG: &[u8] = b"mycelium/fingerprint/v1";

const BLOCK_BYTES: usize = 32;

/// Produce exactly `len` bytes derived from `payload`.
///
/// Block `i` is `Keccak256(DOMAIN_TAG || i_be32 || len(payload)_be64 || payload)`.
pub fn expand_payload(payload: &[u8], len: usize) -> Vec<u8> {
    let blocks = len.div_ceil(BLOCK_BYTES);
    let mut out = Vec::with_capacity(blocks * BLOCK_BYTES);

    for counter in 0..blocks as u32 {
        let mut hasher = Keccak256::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(counter.to_be_bytes());
        hasher.update((payload.len() as u64).to_be_bytes());
        hasher.update(payload);
        out.extend_from_slice(&hasher.finalize());
    }

    out.truncate(len);
    out
}

/// Map each consecutive bit pair `(b0, b1)` (MSB first) to `b0/√2 + i·b1/√2`.
///
/// Returns `width` amplitudes; `bytes` must hold at least `width / 4` bytes
/// rounded up, missing bits read as zero.
pub fn bit_pairs_to_amplitudes(bytes: &[u8], width: usize) -> Vec<Amplitude> {
    (0..width)
        .map(|k| {
            let b0 = bit_at(bytes, 2 * k);
            let b1 = bit_at(bytes, 2 * k + 1);
            Amplitude::new(b0 * FRAC_1_SQRT_2, b1 * FRAC_1_SQRT_2)
        })
        .collect()
}

fn bit_at(bytes: &[u8], index: usize) -> f64 {
    match bytes.get(index / 8) {
        Some(byte) if byte & (0x80 >> (index % 8)) != 0 => 1.0,
        _ => 0.0,
    }
}
