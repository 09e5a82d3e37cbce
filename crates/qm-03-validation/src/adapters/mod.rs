//! # Adapters
//!
//! Default opinion scorer.

pub mod resonance;

pub use resonance::{ResonanceScorer, DEFAULT_NOISE_WEIGHT};
