//! # Mycelium Telemetry
//!
//! Observability for the mycelium network.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter` and optional JSON output
//! - **Metrics**: Prometheus collectors in a crate-local registry
//! - **Exporter**: `axum` router serving `/metrics` and `/health`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mycelium_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("telemetry");
//!     // tracing events and metrics are now collected
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MN_SERVICE_NAME` | `mycelium-network` | Service name attached to startup logs |
//! | `MN_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `MN_JSON_LOGS` | `false` (`true` in containers) | JSON formatted logs |
//! | `MN_CONSOLE_OUTPUT` | `true` | Write logs to stderr at all |
//! | `MN_METRICS_PORT` | `9100` | Port of the scrape endpoint |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
pub mod exporter;
mod logging;
pub mod metrics;

pub use config::{TelemetryConfig, DEFAULT_METRICS_PORT};
pub use exporter::{metrics_router, serve_metrics};
pub use metrics::{
    encode_metrics, record_adaptation, record_error, record_validation, record_validation_error,
    register_metrics, MetricsHandle, ADAPTATION_CYCLES, AGGREGATION_DURATION,
    CONSENSUS_CONFIDENCE, LINKS_ADDED, NETWORK_ERRORS, NODES_ADDED, REGISTRY_NODES, VALIDATIONS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// A collector could not be registered or encoded.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Bad filter directive or similar.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the log subscriber and register metrics.
///
/// Call once at startup and hold the guard for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first so the startup log can report them as ready
    let metrics = register_metrics()?;
    logging::init_logging(&config)?;

    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard { _metrics: metrics })
}

/// Keeps telemetry alive. Logs a shutdown event on drop.
pub struct TelemetryGuard {
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}
