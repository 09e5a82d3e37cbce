//! # Validation Pipeline Flows
//!
//! Tests that qm-02-fingerprint, qm-03-validation and qm-04-consensus work
//! together on a qm-01 registry, both wired by hand and through the
//! assembled `MyceliumNetwork`.
//!
//! ## Flow Tested:
//!
//! 1. **Fingerprint (2)**: payload → normalized spectral fingerprint
//! 2. **Validation (3)**: every registry node scores the fingerprint
//! 3. **Consensus (4)**: weighted opinions → decision + confidence
//! 4. **Propagation**: origin check + fingerprint → mesh transmission time

#[cfg(test)]
mod tests {
    use node_runtime::{MyceliumNetwork, NodeConfig};
    use qm_01_node_registry::{Node, Registry, SeededEntropy};
    use qm_02_fingerprint::{Fingerprint, FingerprintEncoder, SpectralEncoder, VERIFY_RTOL};
    use qm_03_validation::{OpinionScorer, Validator, ValidatorConfig};
    use qm_04_consensus::{aggregate, DEFAULT_CONFIDENCE_THRESHOLD};
    use qm_05_topology::BASE_PROPAGATION_TIME;
    use rand::RngCore;
    use shared_types::{NetworkError, NodeId};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn seeded_network(nodes: usize, seed: u64) -> MyceliumNetwork {
        let mut config = NodeConfig::default();
        config.network.initial_nodes = nodes;
        config.network.seed = Some(seed);
        MyceliumNetwork::initialize_network(&config).unwrap()
    }

    /// Accepts from even-numbered nodes, weakly rejects from odd ones.
    struct SplitScorer;

    impl OpinionScorer for SplitScorer {
        fn score(&self, node: &Node, _: &Fingerprint, _: &mut dyn RngCore) -> f64 {
            if node.id.0 % 2 == 0 {
                0.9
            } else {
                0.3
            }
        }
    }

    /// Every node returns the same strength.
    struct FlatScorer(f64);

    impl OpinionScorer for FlatScorer {
        fn score(&self, _: &Node, _: &Fingerprint, _: &mut dyn RngCore) -> f64 {
            self.0
        }
    }

    fn validator<S: OpinionScorer>(scorer: S) -> Validator<S> {
        Validator::new(ValidatorConfig::default(), scorer).unwrap()
    }

    // =============================================================================
    // NETWORK FLOWS
    // =============================================================================

    #[test]
    fn test_submit_hello_polls_every_node() {
        let network = seeded_network(10, 42);
        let result = network.submit_for_validation(b"hello", None).unwrap();

        assert_eq!(result.validator_count, 10);
        assert!((0.0..=1.0).contains(&result.confidence));
        assert_eq!(
            result.achieved,
            result.confidence >= DEFAULT_CONFIDENCE_THRESHOLD
        );
    }

    #[test]
    fn test_unknown_origin_is_rejected_without_side_effects() {
        let network = seeded_network(10, 42);
        let before = network.snapshot();

        let result = network.submit_for_validation(b"hello", Some(NodeId(10)));

        assert!(matches!(
            result,
            Err(NetworkError::UnknownOrigin(NodeId(10)))
        ));
        assert_eq!(network.snapshot(), before);
        assert_eq!(network.pending_submissions(), 0);
    }

    #[test]
    fn test_known_origin_is_accepted() {
        let network = seeded_network(10, 42);
        let result = network
            .submit_for_validation(b"hello", Some(NodeId(9)))
            .unwrap();
        assert_eq!(result.validator_count, 10);
        assert_eq!(network.pending_submissions(), 1);
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let network = seeded_network(4, 7);
        let result = network.submit_for_validation(b"", None).unwrap();
        assert_eq!(result.validator_count, 4);
    }

    #[test]
    fn test_same_seed_reproduces_decisions() {
        let a = seeded_network(64, 2024);
        let b = seeded_network(64, 2024);

        for payload in [&b"alpha"[..], b"beta", b"gamma"] {
            let ra = a.submit_for_validation(payload, None).unwrap();
            let rb = b.submit_for_validation(payload, None).unwrap();
            assert!(ra.same_decision(&rb));
        }
    }

    #[test]
    fn test_network_fingerprint_round_trip() {
        let network = seeded_network(3, 1);
        let fingerprint = network.fingerprint(b"research");

        assert!(network.verify_fingerprint(b"research", &fingerprint));
        assert!(!network.verify_fingerprint(b"researcH", &fingerprint));
        assert!((fingerprint.total_probability() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_serializes_for_cli_output() {
        let network = seeded_network(5, 3);
        let result = network.submit_for_validation(b"hello", None).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["validator_count"], 5);
        assert!(json["confidence"].as_f64().is_some());
    }

    #[test]
    fn test_propagation_from_unknown_origin_fails() {
        let network = seeded_network(10, 42);
        let before = network.snapshot();

        let result = network.propagate_signal(b"Test data", NodeId(1_000));

        assert!(matches!(
            result,
            Err(NetworkError::UnknownOrigin(NodeId(1_000)))
        ));
        assert_eq!(network.snapshot(), before);
    }

    #[test]
    fn test_propagation_time_is_bounded() {
        let network = seeded_network(10, 42);
        let time = network.propagate_signal(b"Test data", NodeId(3)).unwrap();
        assert!((0.0..=BASE_PROPAGATION_TIME).contains(&time));
    }

    // =============================================================================
    // HAND-WIRED PIPELINE
    // =============================================================================

    #[test]
    fn test_unanimous_acceptance_reaches_full_confidence() {
        let registry = Registry::initialize(20, &SeededEntropy::new(5)).unwrap();
        let encoder = SpectralEncoder::default();
        let fingerprint = encoder.encode(b"payload");

        let opinions = validator(FlatScorer(1.0))
            .validate(&registry, b"payload", &fingerprint, None, 11)
            .unwrap();
        let result = aggregate(&opinions, DEFAULT_CONFIDENCE_THRESHOLD);

        assert!(opinions.iter().all(|o| o.accept));
        assert_eq!(result.confidence, 1.0);
        assert!(result.achieved);
    }

    #[test]
    fn test_split_vote_misses_threshold() {
        let registry = Registry::initialize(100, &SeededEntropy::new(5)).unwrap();
        let fingerprint = SpectralEncoder::default().encode(b"payload");

        let opinions = validator(SplitScorer)
            .validate(&registry, b"payload", &fingerprint, None, 11)
            .unwrap();
        let result = aggregate(&opinions, DEFAULT_CONFIDENCE_THRESHOLD);

        assert_eq!(result.validator_count, 100);
        assert!(result.confidence > 0.0 && result.confidence < 1.0);
        assert!(!result.achieved);
        assert!(result.accepting_weight < result.total_weight);
    }

    #[test]
    fn test_silent_network_is_degenerate() {
        let registry = Registry::initialize(8, &SeededEntropy::new(5)).unwrap();
        let fingerprint = SpectralEncoder::default().encode(b"payload");

        let opinions = validator(FlatScorer(0.0))
            .validate(&registry, b"payload", &fingerprint, None, 11)
            .unwrap();
        let result = aggregate(&opinions, DEFAULT_CONFIDENCE_THRESHOLD);

        assert!(result.is_degenerate());
        assert_eq!(result.confidence, 0.0);
        assert!(!result.achieved);
        assert_eq!(result.validator_count, 8);
    }

    #[test]
    fn test_opinion_order_does_not_change_decision() {
        let registry = Registry::initialize(50, &SeededEntropy::new(8)).unwrap();
        let fingerprint = SpectralEncoder::default().encode(b"order");

        let mut opinions = Validator::default()
            .validate(&registry, b"order", &fingerprint, None, 99)
            .unwrap();
        let forward = aggregate(&opinions, 0.5);
        opinions.reverse();
        let backward = aggregate(&opinions, 0.5);

        assert!(forward.same_decision(&backward));
    }

    #[test]
    fn test_fingerprint_verifies_across_encoder_instances() {
        let fingerprint = SpectralEncoder::default().encode(b"shared");
        let other = SpectralEncoder::default();

        assert!(other.verify(b"shared", &fingerprint));
        assert!(fingerprint.approx_eq(&other.encode(b"shared"), VERIFY_RTOL));
    }
}
