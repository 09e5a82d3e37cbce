//! # Mesh Path Optimizer
//!
//! Links every unconnected node to a few earlier peers. For each such node,
//! up to `max_candidates` earlier peers are sampled and linked when their
//! path score falls below the link threshold.

use qm_01_node_registry::{EntropySource, Registry};
use shared_types::{NetworkError, NetworkResult, NodeId};
use tracing::debug;

use crate::domain::DEFAULT_LINK_THRESHOLD;
use crate::ports::{PathOptimizer, PathScorer};

/// Candidate peers sampled per unconnected node.
pub const DEFAULT_MAX_CANDIDATES: usize = 8;

/// Leaves the registry untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopOptimizer;

impl PathOptimizer for NoopOptimizer {
    fn optimize(&self, _registry: &mut Registry, _entropy: &dyn EntropySource) -> usize {
        0
    }
}

/// Sampled mesh linker.
#[derive(Clone, Debug)]
pub struct MeshPathOptimizer<S> {
    scorer: S,
    link_threshold: f64,
    max_candidates: usize,
}

impl<S: PathScorer> MeshPathOptimizer<S> {
    /// Optimizer with the default threshold and candidate count.
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            link_threshold: DEFAULT_LINK_THRESHOLD,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Override the link threshold.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `threshold` is outside `[0, 1]`.
    pub fn with_link_threshold(mut self, threshold: f64) -> NetworkResult<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(NetworkError::config(format!(
                "link threshold must be in [0, 1], got {threshold}"
            )));
        }
        self.link_threshold = threshold;
        Ok(self)
    }

    /// Override how many peers are sampled per node.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

impl<S: PathScorer> PathOptimizer for MeshPathOptimizer<S> {
    fn optimize(&self, registry: &mut Registry, entropy: &dyn EntropySource) -> usize {
        // Scoring borrows the registry immutably; links are applied afterwards.
        let mut pairs: Vec<(NodeId, NodeId)> = Vec::new();
        for (index, node) in registry.iter().enumerate().skip(1) {
            if node.degree() > 0 {
                continue;
            }
            let draws = self.max_candidates.min(index);
            for _ in 0..draws {
                let peer_index = (entropy.next_u64() % index as u64) as usize;
                let peer = &registry.nodes()[peer_index];
                if self.scorer.score(node, peer) < self.link_threshold {
                    pairs.push((node.id, peer.id));
                }
            }
        }

        let links = pairs
            .into_iter()
            .filter(|&(a, b)| matches!(registry.connect(a, b), Ok(true)))
            .count();

        debug!(
            nodes = registry.len(),
            links, "[qm-05] Mesh paths optimized"
        );
        links
    }
}
