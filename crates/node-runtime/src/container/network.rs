//! # Mycelium Network
//!
//! Owns the registry and wires every subsystem together behind the public
//! operations: initialize, submit for validation, propagate, adapt.
//!
//! ## Locking
//!
//! The registry sits behind `Arc<RwLock<_>>`:
//!
//! - validation holds a read guard for the whole opinion collection
//! - an adaptation cycle measures under an upgradable read and upgrades to a
//!   write guard only when growth fires, so metrics and growth see the same
//!   population and readers never observe a half-grown registry

use parking_lot::{Mutex, RwLock, RwLockUpgradableReadGuard};
use qm_01_node_registry::{EntropySource, OsEntropy, Registry, SeededEntropy};
use qm_02_fingerprint::{Fingerprint, FingerprintEncoder, SpectralEncoder};
use qm_03_validation::{ResonanceScorer, Validator};
use qm_04_consensus::ConsensusAggregator;
use qm_05_topology::{
    propagation_time, AdaptationReport, MeshPathOptimizer, MetricsProvider, PathOptimizer,
    RandomPathScorer, TopologyAdapter, TopologyState,
};
use shared_types::{ConsensusResult, NetworkError, NetworkResult, NodeId};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::adapters::LoadMetricsProvider;
use crate::container::config::NodeConfig;

/// The running network.
pub struct MyceliumNetwork {
    registry: Arc<RwLock<Registry>>,
    entropy: Arc<dyn EntropySource>,
    encoder: SpectralEncoder,
    validator: Validator<ResonanceScorer>,
    aggregator: ConsensusAggregator,
    topology: TopologyAdapter,
    load: Arc<LoadMetricsProvider>,
    metrics: Arc<dyn MetricsProvider>,
    optimizer: Box<dyn PathOptimizer>,
    last_state: Mutex<TopologyState>,
}

impl MyceliumNetwork {
    /// Build every subsystem from `config` and create the initial population.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if any subsystem rejects its settings,
    /// including an initial population below 1.
    pub fn initialize_network(config: &NodeConfig) -> NetworkResult<Self> {
        let entropy: Arc<dyn EntropySource> = match config.network.seed {
            Some(seed) => Arc::new(SeededEntropy::new(seed)),
            None => Arc::new(OsEntropy),
        };

        let validation = &config.validation;
        let encoder = SpectralEncoder::new(validation.fingerprint_width)?;
        let validator = Validator::new(
            validation.validator(),
            ResonanceScorer::new(validation.noise_weight)?,
        )?;
        let aggregator = ConsensusAggregator::new(validation.confidence_threshold)?;

        let topology_config = &config.topology;
        let topology = TopologyAdapter::new(
            config.network.growth_factor,
            topology_config.congestion_threshold,
        )?;
        let optimizer = MeshPathOptimizer::new(RandomPathScorer::new(entropy.clone()))
            .with_link_threshold(topology_config.link_threshold)?
            .with_max_candidates(topology_config.max_candidates);
        if topology_config.capacity_per_node.is_nan() || topology_config.capacity_per_node <= 0.0 {
            return Err(NetworkError::config("capacity per node must be positive"));
        }
        let load = Arc::new(LoadMetricsProvider::new(
            topology_config.capacity_per_node,
            entropy.clone(),
        ));

        let registry = Registry::initialize(config.network.initial_nodes, entropy.as_ref())?;
        mycelium_telemetry::REGISTRY_NODES.set(registry.len() as f64);
        info!(
            nodes = registry.len(),
            seeded = config.network.seed.is_some(),
            growth_factor = config.network.growth_factor,
            "Mycelium network initialized"
        );

        Ok(Self {
            registry: Arc::new(RwLock::new(registry)),
            entropy,
            encoder,
            validator,
            aggregator,
            topology,
            metrics: load.clone(),
            load,
            optimizer: Box::new(optimizer),
            last_state: Mutex::new(TopologyState::Stable),
        })
    }

    /// Replace the metrics source driving adaptation (e.g. with fixed metrics).
    ///
    /// Submissions are still counted by the built-in load provider.
    pub fn with_metrics_provider(mut self, metrics: Arc<dyn MetricsProvider>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the path optimizer run after growth.
    pub fn with_path_optimizer(mut self, optimizer: Box<dyn PathOptimizer>) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Fingerprint `payload`, poll every node and aggregate.
    ///
    /// # Errors
    ///
    /// `UnknownOrigin` if `origin` is given and not in the registry. Nothing
    /// is computed or counted in that case.
    pub fn submit_for_validation(
        &self,
        payload: &[u8],
        origin: Option<NodeId>,
    ) -> NetworkResult<ConsensusResult> {
        let registry = self.registry.read();
        if let Some(origin) = origin {
            if let Err(e) = registry.ensure_member(origin) {
                mycelium_telemetry::record_validation_error(e.kind());
                warn!(origin = %origin, "Validation rejected, unknown origin");
                return Err(e);
            }
        }

        let fingerprint = self.encoder.encode(payload);
        let round_seed = self.entropy.next_u64();
        let opinions =
            self.validator
                .validate(&registry, payload, &fingerprint, origin, round_seed)?;
        drop(registry);

        let result = self.aggregator.aggregate(&opinions);
        self.load.record(result.achieved);
        mycelium_telemetry::record_validation(
            result.achieved,
            result.confidence,
            result.elapsed.as_secs_f64(),
        );

        info!(
            payload_len = payload.len(),
            validators = result.validator_count,
            confidence = result.confidence,
            achieved = result.achieved,
            "Validation complete"
        );
        Ok(result)
    }

    /// Run one adaptation cycle.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if growing would overflow the registry; the
    /// registry is left untouched.
    pub fn run_adaptation_cycle(&self) -> NetworkResult<AdaptationReport> {
        let registry = self.registry.upgradable_read();
        let snapshot = self.metrics.measure(&registry);

        let report = if self.topology.should_grow(&snapshot) {
            let mut registry = RwLockUpgradableReadGuard::upgrade(registry);
            self.topology
                .grow(
                    &mut registry,
                    snapshot,
                    self.optimizer.as_ref(),
                    self.entropy.as_ref(),
                )
                .inspect_err(|e| mycelium_telemetry::record_error(e.kind()))?
        } else {
            self.topology.hold(snapshot, &registry)
        };
        // A failed cycle keeps its measurement window for the next attempt.
        self.load.reset();

        let mut last_state = self.last_state.lock();
        if report.grew() && !last_state.can_transition_to(TopologyState::Growing) {
            warn!(
                nodes = report.nodes_after(),
                congestion = report.metrics.congestion,
                "Registry grew on consecutive cycles, population is unbounded"
            );
        }
        *last_state = report.state;
        drop(last_state);

        mycelium_telemetry::record_adaptation(
            report.state.as_str(),
            report.nodes_added,
            report.links_added,
            report.nodes_after(),
        );
        Ok(report)
    }

    /// Send `payload` into the mesh from `origin`.
    ///
    /// Returns the propagation time, which shrinks as the mesh gains links.
    /// Nothing is mutated or counted as load.
    ///
    /// # Errors
    ///
    /// `UnknownOrigin` if `origin` is not in the registry.
    pub fn propagate_signal(&self, payload: &[u8], origin: NodeId) -> NetworkResult<f64> {
        let registry = self.registry.read();
        if let Err(e) = registry.ensure_member(origin) {
            mycelium_telemetry::record_error(e.kind());
            warn!(origin = %origin, "Propagation rejected, unknown origin");
            return Err(e);
        }

        let fingerprint = self.encoder.encode(payload);
        let links = registry.link_count();
        let time = propagation_time(links);
        debug!(
            origin = %origin,
            width = fingerprint.len(),
            links,
            time,
            "Signal propagated"
        );
        Ok(time)
    }

    /// Current population size.
    pub fn node_count(&self) -> usize {
        self.registry.read().len()
    }

    /// Copy of the registry as of now.
    pub fn snapshot(&self) -> Registry {
        self.registry.read().clone()
    }

    /// Fingerprint `payload` with the configured encoder.
    pub fn fingerprint(&self, payload: &[u8]) -> Fingerprint {
        self.encoder.encode(payload)
    }

    /// Check that `fingerprint` belongs to `payload`.
    pub fn verify_fingerprint(&self, payload: &[u8], fingerprint: &Fingerprint) -> bool {
        self.encoder.verify(payload, fingerprint)
    }

    /// Submissions counted since the last adaptation cycle.
    pub fn pending_submissions(&self) -> u64 {
        self.load.submissions()
    }
}
