//! # Outcome Values
//!
//! Immutable snapshots handed back to callers: the consensus decision for one
//! payload and the load metrics for one adaptation cycle.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::entities::clamp_unit;

/// Decision reached by the consensus aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// `confidence >= confidence_threshold`.
    pub achieved: bool,
    /// Weighted fraction of accepting opinions, in `[0, 1]`.
    pub confidence: f64,
    /// Wall-clock time spent aggregating.
    pub elapsed: Duration,
    /// Number of opinions considered.
    pub validator_count: usize,
    /// Sum of `strength × power` over accepting opinions.
    pub accepting_weight: f64,
    /// Sum of `strength × power` over all opinions.
    pub total_weight: f64,
}

impl ConsensusResult {
    /// Result for an opinion set that carries no weight at all.
    pub fn degenerate(validator_count: usize, elapsed: Duration) -> Self {
        Self {
            achieved: false,
            confidence: 0.0,
            elapsed,
            validator_count,
            accepting_weight: 0.0,
            total_weight: 0.0,
        }
    }

    /// True when there was nothing to weigh (empty set or all-zero weights).
    pub fn is_degenerate(&self) -> bool {
        self.total_weight <= 0.0
    }

    /// Compare everything except the elapsed time.
    pub fn same_decision(&self, other: &ConsensusResult) -> bool {
        self.achieved == other.achieved
            && self.confidence.to_bits() == other.confidence.to_bits()
            && self.validator_count == other.validator_count
            && self.accepting_weight.to_bits() == other.accepting_weight.to_bits()
            && self.total_weight.to_bits() == other.total_weight.to_bits()
    }
}

/// Load snapshot driving topology adaptation. Never cached across cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub congestion: f64,
    pub efficiency: f64,
    pub coherence: f64,
}

impl NetworkMetrics {
    /// Build a snapshot, clamping each component into `[0, 1]`.
    pub fn new(congestion: f64, efficiency: f64, coherence: f64) -> Self {
        Self {
            congestion: clamp_unit(congestion),
            efficiency: clamp_unit(efficiency),
            coherence: clamp_unit(coherence),
        }
    }

    /// Strictly above `threshold`.
    pub fn is_congested(&self, threshold: f64) -> bool {
        self.congestion > threshold
    }
}

impl Default for NetworkMetrics {
    fn default() -> Self {
        Self::new(0.0, 1.0, 1.0)
    }
}
