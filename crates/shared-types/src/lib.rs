//! # Shared Types Crate
//!
//! Value types exchanged between the Mycelium Network subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a subsystem boundary
//!   (registry → validation → consensus → topology) is defined here.
//! - **Plain values**: nothing in this crate owns shared state. The registry is
//!   the only shared mutable resource and lives in `qm-01-node-registry`.

pub mod entities;
pub mod errors;
pub mod outcomes;

pub use entities::*;
pub use errors::*;
pub use outcomes::*;
