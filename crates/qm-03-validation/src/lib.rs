//! # QM-03 Validation
//!
//! Polls every node in the registry for an opinion on a payload.
//!
//! **Subsystem ID:** 3
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Flow
//!
//! ```text
//! origin check ──► round seed ──► per-node rng ──► OpinionScorer ──► Opinion
//!                                      │
//!                      rayon when len >= parallel_threshold
//! ```
//!
//! ## Guarantees
//!
//! - exactly one opinion per node present at call time
//! - strength in `[0, 1]`, `accept == (strength >= acceptance_threshold)`
//! - an unknown origin fails before any scoring happens
//! - sequential and parallel collection agree for the same round seed

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{ResonanceScorer, DEFAULT_NOISE_WEIGHT};
pub use domain::{node_seed, ValidatorConfig};
pub use ports::OpinionScorer;
pub use service::Validator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
