//! Validator configuration.

use serde::{Deserialize, Serialize};
use shared_types::{NetworkError, NetworkResult};

/// Tunables for opinion collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// A node accepts when its strength reaches this value.
    pub acceptance_threshold: f64,
    /// Registries at least this large are polled on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: 0.5,
            parallel_threshold: 256,
        }
    }
}

impl ValidatorConfig {
    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> NetworkResult<()> {
        if !(0.0..=1.0).contains(&self.acceptance_threshold) {
            return Err(NetworkError::config(format!(
                "acceptance threshold must be in [0, 1], got {}",
                self.acceptance_threshold
            )));
        }
        Ok(())
    }
}
