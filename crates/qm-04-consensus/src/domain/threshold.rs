//! Confidence threshold rules.

use shared_types::{NetworkError, NetworkResult};

/// Default share of the weighted vote required to reach consensus.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.95;

/// A threshold must lie in `[0, 1]`.
pub fn validate_confidence_threshold(threshold: f64) -> NetworkResult<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(NetworkError::config(format!(
            "confidence threshold must be in [0, 1], got {threshold}"
        )))
    }
}
