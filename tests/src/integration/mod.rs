//! # Integration Flows
//!
//! Each module drives several subsystems together, either directly through
//! their services or through the assembled `MyceliumNetwork`.

pub mod adaptation;
pub mod concurrency;
pub mod pipeline;
