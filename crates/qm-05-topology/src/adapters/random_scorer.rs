//! Uniform random path scores.

use qm_01_node_registry::{EntropySource, Node};
use std::fmt;
use std::sync::Arc;

use crate::ports::PathScorer;

/// Ignores both nodes and draws a fresh score in `[0, 1)` per pair.
#[derive(Clone)]
pub struct RandomPathScorer {
    entropy: Arc<dyn EntropySource>,
}

impl RandomPathScorer {
    /// Draw scores from `entropy`.
    pub fn new(entropy: Arc<dyn EntropySource>) -> Self {
        Self { entropy }
    }
}

impl fmt::Debug for RandomPathScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPathScorer").finish_non_exhaustive()
    }
}

impl PathScorer for RandomPathScorer {
    fn score(&self, _a: &Node, _b: &Node) -> f64 {
        self.entropy.next_unit()
    }
}
