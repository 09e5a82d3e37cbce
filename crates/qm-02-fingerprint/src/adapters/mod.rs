//! # Adapters
//!
//! Concrete fingerprint encoders.

pub mod spectral;

pub use spectral::{SpectralEncoder, DEFAULT_WIDTH};
