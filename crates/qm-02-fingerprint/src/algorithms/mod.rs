//! # Algorithms
//!
//! Pure functions composing the spectral fingerprint.

pub mod dft;
pub mod expansion;

pub use dft::unitary_dft;
pub use expansion::{bit_pairs_to_amplitudes, expand_payload, DOMAIN_TAG};
