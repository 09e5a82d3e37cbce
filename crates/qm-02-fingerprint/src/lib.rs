//! # QM-02 Fingerprint
//!
//! Turns an arbitrary payload into a [`Fingerprint`]: a fixed-width vector of
//! complex amplitudes with unit norm.
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Pipeline
//!
//! ```text
//! payload ──► Keccak-256 expansion ──► bit pairs ──► DFT ──► normalize
//! ```
//!
//! Consumers only depend on the [`FingerprintEncoder`] port; the rest of the
//! network treats fingerprints as opaque.
//!
//! ## Module Structure
//!
//! ```text
//! qm-02-fingerprint/
//! ├── algorithms/  # expansion, bit-pair mapping, unitary DFT
//! ├── ports/       # FingerprintEncoder
//! └── adapters/    # SpectralEncoder
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod ports;

// Re-exports
pub use adapters::{SpectralEncoder, DEFAULT_WIDTH};
pub use ports::{FingerprintEncoder, VERIFY_RTOL};
pub use shared_types::Fingerprint;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
