//! # Network Container
//!
//! Configuration plus the [`MyceliumNetwork`] facade that owns every
//! subsystem instance.

pub mod config;
pub mod network;
pub mod scheduler;

pub use config::{ConfigError, NetworkConfig, NodeConfig, TopologyConfig, ValidationConfig};
pub use network::MyceliumNetwork;
pub use scheduler::run_adaptation_loop;
