//! # Validator Service
//!
//! Collects one opinion per node for a fingerprinted payload.

use qm_01_node_registry::{Node, Registry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use shared_types::{clamp_unit, Fingerprint, NetworkResult, NodeId, Opinion};
use tracing::debug;

use crate::adapters::ResonanceScorer;
use crate::domain::{node_seed, ValidatorConfig};
use crate::ports::OpinionScorer;

/// Opinion collector.
#[derive(Debug, Clone)]
pub struct Validator<S = ResonanceScorer> {
    config: ValidatorConfig,
    scorer: S,
}

impl Default for Validator<ResonanceScorer> {
    fn default() -> Self {
        Self {
            config: ValidatorConfig::default(),
            scorer: ResonanceScorer::default(),
        }
    }
}

impl<S: OpinionScorer> Validator<S> {
    /// Build a validator around `scorer`.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `config` fails validation.
    pub fn new(config: ValidatorConfig, scorer: S) -> NetworkResult<Self> {
        config.validate()?;
        Ok(Self { config, scorer })
    }

    /// Active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Poll every node in `registry`.
    ///
    /// When `origin` is given it must be a registry member; that check runs
    /// before any scoring. `round_seed` fixes every node's randomness for this
    /// request, so the same seed reproduces the same opinions.
    ///
    /// # Errors
    ///
    /// `UnknownOrigin` if `origin` is not in `registry`.
    pub fn validate(
        &self,
        registry: &Registry,
        payload: &[u8],
        fingerprint: &Fingerprint,
        origin: Option<NodeId>,
        round_seed: u64,
    ) -> NetworkResult<Vec<Opinion>> {
        if let Some(origin) = origin {
            registry.ensure_member(origin)?;
        }

        let parallel = registry.len() >= self.config.parallel_threshold;
        let opinions: Vec<Opinion> = if parallel {
            registry
                .nodes()
                .par_iter()
                .map(|node| self.opinion_for(node, fingerprint, round_seed))
                .collect()
        } else {
            registry
                .iter()
                .map(|node| self.opinion_for(node, fingerprint, round_seed))
                .collect()
        };

        debug!(
            payload_len = payload.len(),
            origin = ?origin,
            validators = opinions.len(),
            parallel,
            "[qm-03] Opinions collected"
        );
        Ok(opinions)
    }

    fn opinion_for(&self, node: &Node, fingerprint: &Fingerprint, round_seed: u64) -> Opinion {
        let mut rng = StdRng::seed_from_u64(node_seed(round_seed, node.id));
        let strength = clamp_unit(self.scorer.score(node, fingerprint, &mut rng));
        let accept = strength >= self.config.acceptance_threshold;
        Opinion::new(node.id, accept, strength, node.validation_power)
    }
}
