//! # Ports
//!
//! The opaque scoring collaborator behind each opinion.

use qm_01_node_registry::Node;
use rand::RngCore;
use shared_types::Fingerprint;

/// Scores how strongly `node` supports a fingerprinted payload.
///
/// Implementations may use `rng` freely. The validator clamps the result into
/// `[0, 1]` and treats non-finite values as `0`.
pub trait OpinionScorer: Send + Sync {
    /// Raw opinion strength.
    fn score(&self, node: &Node, fingerprint: &Fingerprint, rng: &mut dyn RngCore) -> f64;
}
