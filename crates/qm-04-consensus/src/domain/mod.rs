//! # Domain Module

pub mod tally;
pub mod threshold;

pub use tally::*;
pub use threshold::*;
