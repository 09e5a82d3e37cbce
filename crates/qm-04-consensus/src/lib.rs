//! # QM-04 Consensus
//!
//! Reduces a set of opinions to one accept/reject decision.
//!
//! **Subsystem ID:** 4
//!
//! ## Rule
//!
//! ```text
//! weight     = strength × validation_power
//! confidence = Σ weight(accepting) / Σ weight(all)
//! achieved   = confidence >= confidence_threshold
//! ```
//!
//! An empty set, or one where every weight is zero, yields confidence `0.0`
//! and `achieved = false`.
//!
//! ## Order independence
//!
//! Weights are sorted before they are summed ([`WeightTally`]), so the result
//! is bit-identical for every permutation of the input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod service;

// Re-exports
pub use domain::{validate_confidence_threshold, WeightTally, DEFAULT_CONFIDENCE_THRESHOLD};
pub use service::{aggregate, ConsensusAggregator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
