//! Outcome of one adaptation cycle.

use serde::{Deserialize, Serialize};
use shared_types::NetworkMetrics;

use super::state::TopologyState;

/// What an adaptation cycle saw and did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdaptationReport {
    /// Snapshot the decision was based on.
    pub metrics: NetworkMetrics,
    /// `Growing` if the cycle grew the registry, `Stable` otherwise.
    pub state: TopologyState,
    /// Registry size before the cycle.
    pub nodes_before: usize,
    /// Nodes appended by the cycle. May be zero even when growing.
    pub nodes_added: usize,
    /// Links created by path optimization.
    pub links_added: usize,
}

impl AdaptationReport {
    /// Report for a cycle that left the registry alone.
    pub fn stable(metrics: NetworkMetrics, nodes: usize) -> Self {
        Self {
            metrics,
            state: TopologyState::Stable,
            nodes_before: nodes,
            nodes_added: 0,
            links_added: 0,
        }
    }

    /// Registry size after the cycle.
    pub fn nodes_after(&self) -> usize {
        self.nodes_before + self.nodes_added
    }

    /// Whether the congestion predicate fired.
    pub fn grew(&self) -> bool {
        self.state == TopologyState::Growing
    }
}
