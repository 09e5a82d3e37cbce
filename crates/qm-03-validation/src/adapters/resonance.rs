//! # Resonance Scorer
//!
//! Folds the fingerprint down to two components and measures how well it
//! lines up with the node's local state, then blurs the result with noise.
//!
//! ```text
//! folded   = (Σ a_even, Σ a_odd)
//! overlap  = |⟨state|folded⟩|² / |folded|²          ∈ [0, 1]
//! strength = ((1 − w)·overlap + w·noise) · (0.5 + 0.5·power)
//! ```

use qm_01_node_registry::Node;
use rand::{Rng, RngCore};
use shared_types::{clamp_unit, Amplitude, Fingerprint, NetworkError, NetworkResult};

use crate::ports::OpinionScorer;

/// Share of the strength drawn from uniform noise.
pub const DEFAULT_NOISE_WEIGHT: f64 = 0.35;

/// Default [`OpinionScorer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResonanceScorer {
    noise_weight: f64,
}

impl ResonanceScorer {
    /// Build a scorer with a custom noise weight in `[0, 1]`.
    pub fn new(noise_weight: f64) -> NetworkResult<Self> {
        if !(0.0..=1.0).contains(&noise_weight) {
            return Err(NetworkError::config(format!(
                "noise weight must be in [0, 1], got {noise_weight}"
            )));
        }
        Ok(Self { noise_weight })
    }

    /// Configured noise weight.
    pub fn noise_weight(&self) -> f64 {
        self.noise_weight
    }

    /// Squared overlap between `state` and the folded fingerprint.
    ///
    /// A fingerprint whose folded form vanishes gives `0.5`.
    pub fn overlap(state: &[Amplitude; 2], fingerprint: &Fingerprint) -> f64 {
        let mut folded = [Amplitude::ZERO; 2];
        for (i, amp) in fingerprint.amplitudes().iter().enumerate() {
            folded[i % 2] = folded[i % 2] + *amp;
        }

        let norm = folded[0].norm_sqr() + folded[1].norm_sqr();
        if norm <= f64::EPSILON {
            return 0.5;
        }

        let inner = state[0].conj() * folded[0] + state[1].conj() * folded[1];
        clamp_unit(inner.norm_sqr() / norm)
    }
}

impl Default for ResonanceScorer {
    fn default() -> Self {
        Self {
            noise_weight: DEFAULT_NOISE_WEIGHT,
        }
    }
}

impl OpinionScorer for ResonanceScorer {
    fn score(&self, node: &Node, fingerprint: &Fingerprint, rng: &mut dyn RngCore) -> f64 {
        let overlap = Self::overlap(&node.state, fingerprint);
        let noise: f64 = rng.gen();
        let blended = (1.0 - self.noise_weight) * overlap + self.noise_weight * noise;
        blended * (0.5 + 0.5 * node.validation_power)
    }
}
