//! # Ports
//!
//! Collaborators the topology adapter depends on.

use qm_01_node_registry::{EntropySource, Node, Registry};
use shared_types::NetworkMetrics;

/// Produces a fresh load snapshot for one adaptation cycle.
pub trait MetricsProvider: Send + Sync {
    /// Measure the current load of `registry`.
    fn measure(&self, registry: &Registry) -> NetworkMetrics;
}

/// Re-links the registry after growth.
pub trait PathOptimizer: Send + Sync {
    /// Add connections; returns how many new links were created.
    fn optimize(&self, registry: &mut Registry, entropy: &dyn EntropySource) -> usize;
}

/// Distance-like score between two nodes, in `[0, 1]`. Lower is closer.
pub trait PathScorer: Send + Sync {
    /// Score the pair `(a, b)`.
    fn score(&self, a: &Node, b: &Node) -> f64;
}
