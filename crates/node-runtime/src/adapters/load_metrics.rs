//! # Load Metrics Adapter
//!
//! Default [`MetricsProvider`] for a running network. Counts submissions
//! between adaptation cycles and turns them into a load snapshot.
//!
//! ```text
//! congestion = submissions / (nodes × capacity_per_node)
//! efficiency = achieved / submissions            (1.0 when idle)
//! coherence  = fresh entropy draw
//! ```

use parking_lot::Mutex;
use qm_01_node_registry::{EntropySource, Registry};
use qm_05_topology::MetricsProvider;
use shared_types::NetworkMetrics;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LoadCounters {
    submissions: u64,
    achieved: u64,
}

/// Submission-driven metrics.
pub struct LoadMetricsProvider {
    capacity_per_node: f64,
    entropy: Arc<dyn EntropySource>,
    counters: Mutex<LoadCounters>,
}

impl LoadMetricsProvider {
    /// `capacity_per_node` must be positive; [`NodeConfig::validate`] checks it.
    ///
    /// [`NodeConfig::validate`]: crate::container::NodeConfig::validate
    pub fn new(capacity_per_node: f64, entropy: Arc<dyn EntropySource>) -> Self {
        Self {
            capacity_per_node,
            entropy,
            counters: Mutex::new(LoadCounters::default()),
        }
    }

    /// Count one finished validation.
    pub fn record(&self, achieved: bool) {
        let mut counters = self.counters.lock();
        counters.submissions += 1;
        if achieved {
            counters.achieved += 1;
        }
    }

    /// Submissions since the last reset.
    pub fn submissions(&self) -> u64 {
        self.counters.lock().submissions
    }

    /// Start a new measurement window.
    pub fn reset(&self) {
        *self.counters.lock() = LoadCounters::default();
    }
}

impl fmt::Debug for LoadMetricsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadMetricsProvider")
            .field("capacity_per_node", &self.capacity_per_node)
            .field("counters", &*self.counters.lock())
            .finish_non_exhaustive()
    }
}

impl MetricsProvider for LoadMetricsProvider {
    fn measure(&self, registry: &Registry) -> NetworkMetrics {
        let counters = *self.counters.lock();
        let capacity = registry.len() as f64 * self.capacity_per_node;

        let congestion = if capacity > 0.0 {
            counters.submissions as f64 / capacity
        } else {
            0.0
        };
        let efficiency = if counters.submissions == 0 {
            1.0
        } else {
            counters.achieved as f64 / counters.submissions as f64
        };

        NetworkMetrics::new(congestion, efficiency, self.entropy.next_unit())
    }
}
