//! # Mycelium Network Benchmarks
//!
//! | Stage | Cost | Note |
//! |-------|------|------|
//! | qm-02 Fingerprint | O(w²) | naive DFT over the fingerprint width |
//! | qm-03 Validation | O(n·w) | rayon above the parallel threshold |
//! | qm-04 Consensus | O(n) | fixed-point tally |
//! | qm-05 Adaptation | O(n·k) | growth plus k-candidate linking |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use node_runtime::{MyceliumNetwork, NodeConfig};
use qm_01_node_registry::{Registry, SeededEntropy};
use qm_02_fingerprint::{FingerprintEncoder, SpectralEncoder};
use qm_03_validation::Validator;
use qm_04_consensus::{aggregate, DEFAULT_CONFIDENCE_THRESHOLD};
use qm_05_topology::FixedMetrics;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// QM-02: Fingerprint encoding
// ============================================================================

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("qm-02-fingerprint");
    let payload = vec![0xA5u8; 1024];

    for width in [16, 64, 256] {
        let encoder = SpectralEncoder::new(width).unwrap();
        group.bench_with_input(BenchmarkId::new("encode_1kib", width), &encoder, |b, e| {
            b.iter(|| black_box(e.encode(black_box(&payload))))
        });
    }
    group.finish();
}

// ============================================================================
// QM-03 + QM-04: Validation and aggregation
// ============================================================================

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("qm-03-validation");
    group.measurement_time(Duration::from_secs(10));

    let encoder = SpectralEncoder::default();
    let fingerprint = encoder.encode(b"benchmark payload");
    let validator = Validator::default();

    for size in [100, 1_000, 10_000] {
        let registry = Registry::initialize(size, &SeededEntropy::new(1)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("poll_all", size), &registry, |b, r| {
            b.iter(|| {
                validator
                    .validate(r, b"benchmark payload", &fingerprint, None, 7)
                    .unwrap()
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("qm-04-consensus");
    for size in [1_000, 10_000] {
        let registry = Registry::initialize(size, &SeededEntropy::new(1)).unwrap();
        let opinions = validator
            .validate(&registry, b"benchmark payload", &fingerprint, None, 7)
            .unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("aggregate", size), &opinions, |b, o| {
            b.iter(|| black_box(aggregate(o, DEFAULT_CONFIDENCE_THRESHOLD)))
        });
    }
    group.finish();
}

// ============================================================================
// End-to-end: network submit and adaptation
// ============================================================================

fn network(nodes: usize) -> MyceliumNetwork {
    let mut config = NodeConfig::default();
    config.network.initial_nodes = nodes;
    config.network.seed = Some(1);
    MyceliumNetwork::initialize_network(&config).unwrap()
}

fn bench_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("mycelium-network");

    let node = network(1_000);
    group.bench_function("submit_1000_nodes", |b| {
        b.iter(|| node.submit_for_validation(b"hello", None).unwrap())
    });

    group.bench_function("grow_1000_nodes", |b| {
        b.iter_with_setup(
            || network(1_000).with_metrics_provider(Arc::new(FixedMetrics::congestion(1.0))),
            |n| black_box(n.run_adaptation_cycle().unwrap()),
        )
    });
    group.finish();
}

criterion_group!(benches, bench_fingerprint, bench_validation, bench_network);
criterion_main!(benches);
