//! # Domain Module
//!
//! Core domain types for the Node Registry subsystem.

pub mod growth;
pub mod node;
pub mod registry;

pub use growth::*;
pub use node::*;
pub use registry::*;
