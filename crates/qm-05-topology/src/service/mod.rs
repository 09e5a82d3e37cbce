//! # Topology Adapter Service
//!
//! One adaptation cycle is `measure → decide → (grow → optimize)`. The
//! measuring half only needs shared access to the registry and the growing
//! half needs exclusive access, so callers holding a lock can measure under
//! an upgradable read and upgrade only when [`TopologyAdapter::should_grow`]
//! fires. [`TopologyAdapter::adapt`] runs the whole cycle on a `&mut`.

use qm_01_node_registry::{validate_growth_factor, EntropySource, Registry, DEFAULT_GROWTH_FACTOR};
use serde::{Deserialize, Serialize};
use shared_types::{NetworkError, NetworkMetrics, NetworkResult};
use tracing::{debug, info};

use crate::domain::{AdaptationReport, TopologyState, DEFAULT_CONGESTION_THRESHOLD};
use crate::ports::{MetricsProvider, PathOptimizer};

/// Growth policy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopologyAdapter {
    growth_factor: f64,
    congestion_threshold: f64,
}

impl Default for TopologyAdapter {
    fn default() -> Self {
        Self {
            growth_factor: DEFAULT_GROWTH_FACTOR,
            congestion_threshold: DEFAULT_CONGESTION_THRESHOLD,
        }
    }
}

impl TopologyAdapter {
    /// # Errors
    ///
    /// `InvalidConfiguration` if `growth_factor <= 1` (or non-finite) or
    /// `congestion_threshold` is outside `[0, 1]`.
    pub fn new(growth_factor: f64, congestion_threshold: f64) -> NetworkResult<Self> {
        validate_growth_factor(growth_factor)?;
        if !(0.0..=1.0).contains(&congestion_threshold) {
            return Err(NetworkError::config(format!(
                "congestion threshold must be in [0, 1], got {congestion_threshold}"
            )));
        }
        Ok(Self {
            growth_factor,
            congestion_threshold,
        })
    }

    /// Population multiplier applied per growth step.
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Congestion level above which the registry grows.
    pub fn congestion_threshold(&self) -> f64 {
        self.congestion_threshold
    }

    /// Whether `metrics` calls for growth.
    pub fn should_grow(&self, metrics: &NetworkMetrics) -> bool {
        metrics.is_congested(self.congestion_threshold)
    }

    /// Run a full cycle against `registry`.
    pub fn adapt(
        &self,
        registry: &mut Registry,
        metrics: &dyn MetricsProvider,
        optimizer: &dyn PathOptimizer,
        entropy: &dyn EntropySource,
    ) -> NetworkResult<AdaptationReport> {
        let snapshot = metrics.measure(registry);
        if !self.should_grow(&snapshot) {
            return Ok(self.hold(snapshot, registry));
        }
        self.grow(registry, snapshot, optimizer, entropy)
    }

    /// Report for a cycle whose metrics did not trigger growth.
    pub fn hold(&self, metrics: NetworkMetrics, registry: &Registry) -> AdaptationReport {
        debug!(
            congestion = metrics.congestion,
            threshold = self.congestion_threshold,
            nodes = registry.len(),
            "[qm-05] Topology stable"
        );
        AdaptationReport::stable(metrics, registry.len())
    }

    /// The GROWING half of a cycle: grow, then re-link.
    ///
    /// Nothing is mutated if growth fails.
    pub fn grow(
        &self,
        registry: &mut Registry,
        metrics: NetworkMetrics,
        optimizer: &dyn PathOptimizer,
        entropy: &dyn EntropySource,
    ) -> NetworkResult<AdaptationReport> {
        let nodes_before = registry.len();
        let added = registry.grow(self.growth_factor, entropy)?;
        let links_added = optimizer.optimize(registry, entropy);

        info!(
            congestion = metrics.congestion,
            nodes_before,
            nodes_added = added.len(),
            links_added,
            "[qm-05] Topology grown"
        );

        Ok(AdaptationReport {
            metrics,
            state: TopologyState::Growing,
            nodes_before,
            nodes_added: added.len(),
            links_added,
        })
    }
}
