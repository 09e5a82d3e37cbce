//! # QM-01 Node Registry
//!
//! Holds the population of participating nodes.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Create the initial population with i.i.d. validation power in `[0, 1)`
//! - Grow the population by a factor (append-only, never evicts)
//! - Answer membership queries for origin checks
//!
//! ## Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Never empty after initialization | `Registry::initialize` rejects `count < 1` |
//! | Append-only | no removal API; `grow` only extends |
//! | Stable identity | ids and validation power are never rewritten |
//! | Atomic failure | all checks run before the first mutation |
//!
//! ## Module Structure
//!
//! ```text
//! qm-01-node-registry/
//! ├── domain/    # Node, Registry, growth arithmetic
//! ├── ports/     # EntropySource
//! └── adapters/  # OsEntropy, SeededEntropy
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{OsEntropy, SeededEntropy};
pub use domain::{
    growth_increment, validate_growth_factor, Node, Registry, DEFAULT_GROWTH_FACTOR,
    MIN_INITIAL_NODES,
};
pub use ports::EntropySource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
