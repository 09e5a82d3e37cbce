//! # QM-05 Topology
//!
//! Inspects load metrics and grows the node registry when it is congested.
//!
//! **Subsystem ID:** 5
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine
//!
//! ```text
//!            congestion > threshold
//!   STABLE ─────────────────────────► GROWING
//!     ▲                                  │
//!     └──────── growth + optimize ───────┘
//! ```
//!
//! Growth happens synchronously under exclusive access to the registry, so no
//! caller ever observes a half-grown population.
//!
//! ## Module Structure
//!
//! ```text
//! qm-05-topology/
//! ├── domain/    # TopologyState, AdaptationReport, thresholds, propagation time
//! ├── ports/     # MetricsProvider, PathOptimizer, PathScorer
//! ├── adapters/  # FixedMetrics, NoopOptimizer, MeshPathOptimizer, RandomPathScorer
//! └── service/   # TopologyAdapter
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{FixedMetrics, MeshPathOptimizer, NoopOptimizer, RandomPathScorer};
pub use domain::{
    propagation_time, AdaptationReport, TopologyState, BASE_PROPAGATION_TIME,
    DEFAULT_CONGESTION_THRESHOLD, DEFAULT_LINK_THRESHOLD, SATURATION_LINKS,
};
pub use ports::{MetricsProvider, PathOptimizer, PathScorer};
pub use service::TopologyAdapter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
