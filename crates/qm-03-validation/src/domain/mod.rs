//! # Domain Module
//!
//! Validator configuration and per-node seed derivation.

pub mod config;
pub mod seed;

pub use config::*;
pub use seed::*;
