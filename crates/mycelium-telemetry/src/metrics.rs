//! Prometheus metrics for the mycelium network.
//!
//! All metrics follow the naming convention: `mn_<area>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., validations_total)
//! - **Gauge**: Value that can go up or down (e.g., registry_nodes)
//! - **Histogram**: Distribution of values (e.g., aggregation_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, linear_buckets, Counter, CounterVec, Encoder, Gauge, Histogram,
    HistogramOpts, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // VALIDATION & CONSENSUS
    // =========================================================================

    /// Validation requests by outcome: achieved / rejected / error
    pub static ref VALIDATIONS: CounterVec = CounterVec::new(
        Opts::new("mn_validations_total", "Validation requests by outcome"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Distribution of consensus confidence
    pub static ref CONSENSUS_CONFIDENCE: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "mn_consensus_confidence",
            "Weighted confidence of each consensus decision"
        ).buckets(linear_buckets(0.1, 0.1, 10).expect("valid bucket layout"))
    ).expect("metric creation failed");

    /// Time spent aggregating opinions
    pub static ref AGGREGATION_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "mn_consensus_aggregation_duration_seconds",
            "Time spent aggregating opinions"
        ).buckets(exponential_buckets(0.000_001, 2.0, 20).expect("valid bucket layout"))
    ).expect("metric creation failed");

    // =========================================================================
    // TOPOLOGY
    // =========================================================================

    /// Current number of nodes
    pub static ref REGISTRY_NODES: Gauge = Gauge::new(
        "mn_registry_nodes",
        "Number of nodes in the registry"
    ).expect("metric creation failed");

    /// Adaptation cycles by the state they went through
    pub static ref ADAPTATION_CYCLES: CounterVec = CounterVec::new(
        Opts::new("mn_topology_adaptation_cycles_total", "Adaptation cycles by state"),
        &["state"]
    ).expect("metric creation failed");

    /// Nodes appended by growth
    pub static ref NODES_ADDED: Counter = Counter::new(
        "mn_topology_nodes_added_total",
        "Total nodes appended by topology growth"
    ).expect("metric creation failed");

    /// Links created by path optimization
    pub static ref LINKS_ADDED: Counter = Counter::new(
        "mn_topology_links_added_total",
        "Total links created by path optimization"
    ).expect("metric creation failed");

    // =========================================================================
    // ERRORS
    // =========================================================================

    /// Errors by kind
    pub static ref NETWORK_ERRORS: CounterVec = CounterVec::new(
        Opts::new("mn_errors_total", "Errors by kind"),
        &["kind"]
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; collectors that are already registered are
/// skipped.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Validation
        Box::new(VALIDATIONS.clone()),
        Box::new(CONSENSUS_CONFIDENCE.clone()),
        Box::new(AGGREGATION_DURATION.clone()),
        // Topology
        Box::new(REGISTRY_NODES.clone()),
        Box::new(ADAPTATION_CYCLES.clone()),
        Box::new(NODES_ADDED.clone()),
        Box::new(LINKS_ADDED.clone()),
        // Errors
        Box::new(NETWORK_ERRORS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record a finished validation request.
pub fn record_validation(achieved: bool, confidence: f64, aggregation_secs: f64) {
    let outcome = if achieved { "achieved" } else { "rejected" };
    VALIDATIONS.with_label_values(&[outcome]).inc();
    CONSENSUS_CONFIDENCE.observe(confidence);
    AGGREGATION_DURATION.observe(aggregation_secs);
}

/// Record a finished adaptation cycle.
pub fn record_adaptation(state: &str, nodes_added: usize, links_added: usize, nodes: usize) {
    ADAPTATION_CYCLES.with_label_values(&[state]).inc();
    NODES_ADDED.inc_by(nodes_added as f64);
    LINKS_ADDED.inc_by(links_added as f64);
    REGISTRY_NODES.set(nodes as f64);
}

/// Record a failed operation by error kind.
pub fn record_error(kind: &str) {
    NETWORK_ERRORS.with_label_values(&[kind]).inc();
}

/// Record a validation request that was rejected before any opinion was
/// collected. Counts as a validation outcome and as an error.
pub fn record_validation_error(kind: &str) {
    VALIDATIONS.with_label_values(&["error"]).inc();
    record_error(kind);
}
