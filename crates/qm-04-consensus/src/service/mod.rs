//! # Consensus Aggregator

use shared_types::{ConsensusResult, NetworkResult, Opinion};
use std::time::Instant;
use tracing::debug;

use crate::domain::{validate_confidence_threshold, WeightTally, DEFAULT_CONFIDENCE_THRESHOLD};

/// Reduce `opinions` to a decision.
///
/// Never fails. An empty or weightless set is reported through
/// [`ConsensusResult::is_degenerate`] and a `debug` event.
pub fn aggregate(opinions: &[Opinion], confidence_threshold: f64) -> ConsensusResult {
    let started = Instant::now();
    let tally = WeightTally::from_opinions(opinions);

    let Some(confidence) = tally.confidence() else {
        debug!(
            validators = opinions.len(),
            "[qm-04] Degenerate aggregation, no weight to decide on"
        );
        return ConsensusResult::degenerate(opinions.len(), started.elapsed());
    };

    let achieved = confidence >= confidence_threshold;
    let elapsed = started.elapsed();
    debug!(
        validators = opinions.len(),
        confidence,
        confidence_threshold,
        achieved,
        elapsed_us = elapsed.as_micros() as u64,
        "[qm-04] Opinions aggregated"
    );

    ConsensusResult {
        achieved,
        confidence,
        elapsed,
        validator_count: opinions.len(),
        accepting_weight: tally.accepting_weight(),
        total_weight: tally.total_weight(),
    }
}

/// [`aggregate`] bound to a validated threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsensusAggregator {
    confidence_threshold: f64,
}

impl ConsensusAggregator {
    /// # Errors
    ///
    /// `InvalidConfiguration` if the threshold is outside `[0, 1]`.
    pub fn new(confidence_threshold: f64) -> NetworkResult<Self> {
        validate_confidence_threshold(confidence_threshold)?;
        Ok(Self {
            confidence_threshold,
        })
    }

    /// Configured threshold.
    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Aggregate with the configured threshold.
    pub fn aggregate(&self, opinions: &[Opinion]) -> ConsensusResult {
        aggregate(opinions, self.confidence_threshold)
    }
}

impl Default for ConsensusAggregator {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}
