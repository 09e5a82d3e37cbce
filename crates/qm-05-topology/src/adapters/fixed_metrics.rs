//! Injected constant metrics.

use qm_01_node_registry::Registry;
use shared_types::NetworkMetrics;

use crate::ports::MetricsProvider;

/// Always reports the same snapshot. Used to drive adaptation deterministically.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedMetrics(pub NetworkMetrics);

impl FixedMetrics {
    /// Snapshot with the given congestion and nominal efficiency and coherence.
    pub fn congestion(congestion: f64) -> Self {
        Self(NetworkMetrics::new(congestion, 1.0, 1.0))
    }
}

impl MetricsProvider for FixedMetrics {
    fn measure(&self, _registry: &Registry) -> NetworkMetrics {
        self.0
    }
}
