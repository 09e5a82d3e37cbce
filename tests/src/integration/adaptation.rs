//! # Topology Adaptation Flows
//!
//! Tests that qm-05-topology grows and re-links a qm-01 registry under
//! congestion, with metrics either injected or derived from submitted load.
//!
//! ## Flow Tested:
//!
//! 1. **Measure**: metrics provider → `NetworkMetrics`
//! 2. **Decide**: congestion strictly above threshold → GROWING
//! 3. **Grow + Link**: `floor(n × (φ − 1))` new nodes, then path optimization

#[cfg(test)]
mod tests {
    use node_runtime::{MyceliumNetwork, NodeConfig};
    use proptest::prelude::*;
    use qm_01_node_registry::{Registry, SeededEntropy, DEFAULT_GROWTH_FACTOR};
    use qm_05_topology::{
        FixedMetrics, MeshPathOptimizer, NoopOptimizer, RandomPathScorer, TopologyAdapter,
        TopologyState,
    };
    use shared_types::NodeId;
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn config(nodes: usize, seed: u64) -> NodeConfig {
        let mut config = NodeConfig::default();
        config.network.initial_nodes = nodes;
        config.network.seed = Some(seed);
        config
    }

    fn network_under(nodes: usize, congestion: f64) -> MyceliumNetwork {
        MyceliumNetwork::initialize_network(&config(nodes, 17))
            .unwrap()
            .with_metrics_provider(Arc::new(FixedMetrics::congestion(congestion)))
            .with_path_optimizer(Box::new(NoopOptimizer))
    }

    // =============================================================================
    // INJECTED METRICS
    // =============================================================================

    #[test]
    fn test_congestion_at_threshold_holds() {
        let network = network_under(10, 0.7);
        let report = network.run_adaptation_cycle().unwrap();

        assert_eq!(report.state, TopologyState::Stable);
        assert_eq!(report.nodes_added, 0);
        assert_eq!(network.node_count(), 10);
    }

    #[test]
    fn test_congestion_above_threshold_grows() {
        let network = network_under(10, 0.71);
        let report = network.run_adaptation_cycle().unwrap();

        assert_eq!(report.state, TopologyState::Growing);
        assert_eq!(report.nodes_before, 10);
        assert_eq!(report.nodes_added, 6);
        assert_eq!(network.node_count(), 16);
    }

    #[test]
    fn test_five_nodes_grow_to_eight() {
        let network = network_under(5, 0.9);
        network.run_adaptation_cycle().unwrap();
        assert_eq!(network.node_count(), 8);

        let ids: Vec<NodeId> = network.snapshot().iter().map(|n| n.id).collect();
        assert_eq!(ids, (0..8).map(NodeId).collect::<Vec<_>>());
    }

    #[test]
    fn test_sustained_congestion_compounds() {
        let network = network_under(10, 1.0);
        let sizes: Vec<usize> = (0..4)
            .map(|_| network.run_adaptation_cycle().unwrap().nodes_after())
            .collect();
        // 10 → 16 → 25 → 40 → 64
        assert_eq!(sizes, vec![16, 25, 40, 64]);
    }

    #[test]
    fn test_existing_nodes_survive_growth() {
        let network = network_under(10, 0.9);
        let before = network.snapshot();
        network.run_adaptation_cycle().unwrap();
        let after = network.snapshot();

        assert_eq!(&after.nodes()[..before.len()], before.nodes());
    }

    #[test]
    fn test_grown_nodes_take_part_in_validation() {
        let network = network_under(10, 0.9);
        network.run_adaptation_cycle().unwrap();

        let result = network
            .submit_for_validation(b"hello", Some(NodeId(15)))
            .unwrap();
        assert_eq!(result.validator_count, 16);
    }

    #[test]
    fn test_growth_links_new_nodes() {
        let network = MyceliumNetwork::initialize_network(&config(20, 4))
            .unwrap()
            .with_metrics_provider(Arc::new(FixedMetrics::congestion(0.95)));

        let report = network.run_adaptation_cycle().unwrap();
        let registry = network.snapshot();

        assert_eq!(report.links_added, registry.link_count());
        for node in registry.iter() {
            for peer in &node.connections {
                assert!(registry.get(*peer).unwrap().is_connected_to(node.id));
            }
        }
    }

    #[test]
    fn test_report_serializes_state_name() {
        let network = network_under(10, 0.9);
        let report = network.run_adaptation_cycle().unwrap();

        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["state"], "growing");
        assert_eq!(json["nodes_added"], 6);
    }

    // =============================================================================
    // LOAD-DRIVEN METRICS
    // =============================================================================

    #[test]
    fn test_submission_load_triggers_growth_once() {
        // capacity = 10 × 0.05 = 0.5 submissions, so one submission saturates
        let network = MyceliumNetwork::initialize_network(&config(10, 23)).unwrap();
        network.submit_for_validation(b"burst", None).unwrap();
        assert_eq!(network.pending_submissions(), 1);

        let first = network.run_adaptation_cycle().unwrap();
        assert_eq!(first.state, TopologyState::Growing);
        assert_eq!(first.metrics.congestion, 1.0);
        assert_eq!(network.pending_submissions(), 0);

        let second = network.run_adaptation_cycle().unwrap();
        assert_eq!(second.state, TopologyState::Stable);
        assert_eq!(second.metrics.congestion, 0.0);
        assert_eq!(network.node_count(), 16);
    }

    #[test]
    fn test_idle_network_stays_stable() {
        let network = MyceliumNetwork::initialize_network(&config(10, 23)).unwrap();
        for _ in 0..3 {
            let report = network.run_adaptation_cycle().unwrap();
            assert_eq!(report.state, TopologyState::Stable);
            assert_eq!(report.metrics.efficiency, 1.0);
        }
        assert_eq!(network.node_count(), 10);
    }

    // =============================================================================
    // ADAPTER WITHOUT THE RUNTIME
    // =============================================================================

    #[test]
    fn test_adapter_with_mesh_optimizer() {
        let entropy = Arc::new(SeededEntropy::new(31));
        let mut registry = Registry::initialize(30, entropy.as_ref()).unwrap();
        let optimizer = MeshPathOptimizer::new(RandomPathScorer::new(entropy.clone()));

        let report = TopologyAdapter::default()
            .adapt(
                &mut registry,
                &FixedMetrics::congestion(0.8),
                &optimizer,
                entropy.as_ref(),
            )
            .unwrap();

        assert!(report.grew());
        assert_eq!(registry.len(), 48);
        assert_eq!(report.links_added, registry.link_count());
    }

    proptest! {
        #[test]
        fn prop_cycle_size_rule(nodes in 1usize..200, congestion in 0.0f64..=1.0) {
            let network = network_under(nodes, congestion);
            network.run_adaptation_cycle().unwrap();

            let expected = if congestion > 0.7 {
                nodes + (nodes as f64 * (DEFAULT_GROWTH_FACTOR - 1.0)).floor() as usize
            } else {
                nodes
            };
            prop_assert_eq!(network.node_count(), expected);
        }
    }
}
