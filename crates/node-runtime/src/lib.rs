//! # Node Runtime Library
//!
//! Public surface of the mycelium network. The `mycelium-node` binary is a
//! thin CLI over this library.
//!
//! ## Flow
//!
//! ```text
//! submit_for_validation(payload, origin?)
//!     │
//!     ├─► qm-01 origin check
//!     ├─► qm-02 fingerprint
//!     ├─► qm-03 opinions (one per node)
//!     └─► qm-04 weighted consensus ──► ConsensusResult
//!
//! propagate_signal(payload, origin)
//!     │
//!     ├─► qm-01 origin check
//!     └─► qm-05 propagation time from mesh links ──► f64
//!
//! run_adaptation_cycle()
//!     │
//!     ├─► LoadMetricsProvider (or injected metrics)
//!     └─► qm-05 grow + mesh optimize when congested ──► AdaptationReport
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod container;

pub use adapters::LoadMetricsProvider;
pub use container::{run_adaptation_loop, ConfigError, MyceliumNetwork, NodeConfig};
