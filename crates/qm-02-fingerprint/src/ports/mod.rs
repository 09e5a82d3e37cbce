//! # Ports
//!
//! The fingerprint function as seen by the validator and the runtime.

use shared_types::Fingerprint;

/// Relative tolerance used by [`FingerprintEncoder::verify`].
pub const VERIFY_RTOL: f64 = 1e-5;

/// Deterministic payload encoder.
///
/// Implementations must return a unit-norm vector of even length, and the
/// same payload must always produce the same fingerprint.
pub trait FingerprintEncoder: Send + Sync {
    /// Number of amplitudes in every fingerprint this encoder produces.
    fn width(&self) -> usize;

    /// Encode `payload`.
    fn encode(&self, payload: &[u8]) -> Fingerprint;

    /// Recompute the fingerprint of `payload` and compare it to `fingerprint`.
    fn verify(&self, payload: &[u8], fingerprint: &Fingerprint) -> bool {
        self.encode(payload).approx_eq(fingerprint, VERIFY_RTOL)
    }
}
