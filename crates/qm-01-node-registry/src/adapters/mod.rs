//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the [`EntropySource`](crate::ports::EntropySource) port.

mod entropy;

pub use entropy::{OsEntropy, SeededEntropy};
