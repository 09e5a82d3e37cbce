//! # Concurrent Access
//!
//! Validation requests hold a read guard on the registry while an adaptation
//! cycle grows it under a write guard. Every request must see one complete
//! population, never a partially grown one.

#[cfg(test)]
mod tests {
    use node_runtime::{MyceliumNetwork, NodeConfig};
    use qm_05_topology::{FixedMetrics, NoopOptimizer, TopologyState};
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::thread;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const READERS: usize = 4;
    const REQUESTS_PER_READER: usize = 25;

    fn shared_network(nodes: usize, congestion: f64) -> Arc<MyceliumNetwork> {
        let mut config = NodeConfig::default();
        config.network.initial_nodes = nodes;
        config.network.seed = Some(77);
        let network = MyceliumNetwork::initialize_network(&config)
            .unwrap()
            .with_metrics_provider(Arc::new(FixedMetrics::congestion(congestion)))
            .with_path_optimizer(Box::new(NoopOptimizer));
        Arc::new(network)
    }

    fn spawn_readers(network: &Arc<MyceliumNetwork>) -> Vec<thread::JoinHandle<Vec<usize>>> {
        (0..READERS)
            .map(|reader| {
                let network = Arc::clone(network);
                thread::spawn(move || {
                    (0..REQUESTS_PER_READER)
                        .map(|i| {
                            let payload = format!("reader-{reader}-request-{i}");
                            network
                                .submit_for_validation(payload.as_bytes(), None)
                                .unwrap()
                                .validator_count
                        })
                        .collect()
                })
            })
            .collect()
    }

    // =============================================================================
    // READERS VS. GROWTH
    // =============================================================================

    #[test]
    fn test_readers_never_observe_partial_growth() {
        let network = shared_network(10, 0.9);
        let readers = spawn_readers(&network);

        let mut sizes = vec![network.node_count()];
        for _ in 0..3 {
            let report = network.run_adaptation_cycle().unwrap();
            assert_eq!(report.state, TopologyState::Growing);
            sizes.push(report.nodes_after());
        }
        assert_eq!(sizes, vec![10, 16, 25, 40]);

        let legal: BTreeSet<usize> = sizes.into_iter().collect();
        for handle in readers {
            for seen in handle.join().unwrap() {
                assert!(legal.contains(&seen), "observed partial registry of {seen}");
            }
        }
        assert_eq!(network.node_count(), 40);
    }

    #[test]
    fn test_concurrent_submissions_are_all_counted() {
        let network = shared_network(32, 0.0);
        let readers = spawn_readers(&network);

        for handle in readers {
            let seen = handle.join().unwrap();
            assert!(seen.iter().all(|&count| count == 32));
        }
        assert_eq!(
            network.pending_submissions(),
            (READERS * REQUESTS_PER_READER) as u64
        );
    }

    #[test]
    fn test_parallel_adaptation_cycles_serialize() {
        let network = shared_network(10, 0.9);

        let cycles: Vec<_> = (0..2)
            .map(|_| {
                let network = Arc::clone(&network);
                thread::spawn(move || network.run_adaptation_cycle().unwrap())
            })
            .collect();
        let mut befores: Vec<usize> = cycles
            .into_iter()
            .map(|handle| handle.join().unwrap().nodes_before)
            .collect();
        befores.sort_unstable();

        // each cycle measured a distinct, complete population
        assert_eq!(befores, vec![10, 16]);
        assert_eq!(network.node_count(), 25);
    }
}
