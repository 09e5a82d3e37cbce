//! # Spectral Encoder
//!
//! Default fingerprint: Keccak-256 expansion, bit-pair amplitudes, unitary DFT.

use shared_types::{Fingerprint, NetworkError, NetworkResult};
use tracing::{debug, warn};

use crate::algorithms::{bit_pairs_to_amplitudes, expand_payload, unitary_dft};
use crate::ports::FingerprintEncoder;

/// Amplitudes per fingerprint unless configured otherwise.
pub const DEFAULT_WIDTH: usize = 64;

/// Spectral fingerprint encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpectralEncoder {
    width: usize,
}

impl SpectralEncoder {
    /// Build an encoder producing `width` amplitudes.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` unless `width` is even and at least 2.
    pub fn new(width: usize) -> NetworkResult<Self> {
        if width < 2 || width % 2 != 0 {
            return Err(NetworkError::config(format!(
                "fingerprint width must be an even number >= 2, got {width}"
            )));
        }
        Ok(Self { width })
    }
}

impl Default for SpectralEncoder {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl FingerprintEncoder for SpectralEncoder {
    fn width(&self) -> usize {
        self.width
    }

    fn encode(&self, payload: &[u8]) -> Fingerprint {
        // Two bits per amplitude.
        let bytes = expand_payload(payload, self.width.div_ceil(4));
        let spectrum = unitary_dft(&bit_pairs_to_amplitudes(&bytes, self.width));

        match Fingerprint::normalized(spectrum) {
            Some(fingerprint) => {
                debug!(
                    payload_len = payload.len(),
                    width = self.width,
                    "[qm-02] Payload fingerprinted"
                );
                fingerprint
            }
            None => {
                warn!(
                    payload_len = payload.len(),
                    width = self.width,
                    "[qm-02] Degenerate expansion, using uniform fingerprint"
                );
                Fingerprint::uniform(self.width)
            }
        }
    }
}
