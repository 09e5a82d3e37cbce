//! # Domain Module

pub mod propagation;
pub mod report;
pub mod state;

pub use propagation::*;
pub use report::*;
pub use state::*;

/// Congestion strictly above this triggers growth.
pub const DEFAULT_CONGESTION_THRESHOLD: f64 = 0.7;

/// Pairs scoring strictly below this are linked by the mesh optimizer.
pub const DEFAULT_LINK_THRESHOLD: f64 = 0.5;
