//! # Mycelium Node
//!
//! Command-line entry point.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logs + metrics)
//! 2. Load configuration (file → env → flags) and validate it
//! 3. Build the network
//! 4. Run the requested command
//!
//! `run` also serves Prometheus metrics on `/metrics`; one-shot commands
//! print them with `--metrics`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};

use mycelium_telemetry::{encode_metrics, init_telemetry, serve_metrics, TelemetryConfig};
use node_runtime::{run_adaptation_loop, MyceliumNetwork, NodeConfig};
use shared_types::NodeId;

/// Mycelium node: validate payloads and grow the network under load
#[derive(Parser, Debug)]
#[command(name = "mycelium-node")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Initial number of nodes (overrides config and MN_INITIAL_NODES)
    #[arg(short, long, global = true)]
    nodes: Option<usize>,

    /// Seed for reproducible runs (overrides config and MN_SEED)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print Prometheus metrics after the command finishes
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a payload for validation
    Validate {
        /// Payload, taken as UTF-8 bytes
        payload: String,

        /// Node the request is addressed from (node_<n> or <n>)
        #[arg(short, long)]
        origin: Option<NodeId>,
    },

    /// Send a payload into the mesh and report its propagation time
    Propagate {
        /// Payload, taken as UTF-8 bytes
        payload: String,

        /// Node the signal starts from (node_<n> or <n>)
        #[arg(short, long)]
        origin: NodeId,
    },

    /// Run adaptation cycles immediately
    Adapt {
        /// Number of cycles
        #[arg(long, default_value_t = 1)]
        cycles: u32,
    },

    /// Run the scheduled adaptation loop until Ctrl+C, serving /metrics
    Run {
        /// Seconds between cycles (overrides config)
        #[arg(long)]
        interval_secs: Option<u64>,

        /// Port of the metrics endpoint (overrides MN_METRICS_PORT)
        #[arg(long)]
        metrics_port: Option<u16>,
    },
}

/// Load configuration from file, environment and flags.
fn load_config(args: &Args) -> Result<NodeConfig> {
    let mut config = match &args.config {
        Some(path) => NodeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => NodeConfig::default(),
    };

    config
        .apply_env_overrides()
        .context("Invalid environment override")?;

    if let Some(nodes) = args.nodes {
        config.network.initial_nodes = nodes;
    }
    if let Some(seed) = args.seed {
        config.network.seed = Some(seed);
    }
    if let Command::Run {
        interval_secs: Some(secs),
        ..
    } = args.command
    {
        config.topology.interval_secs = secs;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn emit<T: Serialize + std::fmt::Debug>(json: bool, value: &T) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value:#?}");
    }
    Ok(())
}

/// Serve `/metrics` until `shutdown` flips. Bind failures are logged, not fatal.
fn spawn_metrics_endpoint(port: u16, mut shutdown: watch::Receiver<bool>) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tokio::spawn(async move {
        let stop = async move {
            let _ = shutdown.wait_for(|stop| *stop).await;
        };
        if let Err(e) = serve_metrics(addr, stop).await {
            warn!(%addr, error = %e, "Metrics endpoint unavailable");
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let telemetry_config = TelemetryConfig::from_env();
    let default_metrics_port = telemetry_config.metrics_port;
    let _telemetry =
        init_telemetry(telemetry_config).context("Failed to initialize telemetry")?;

    let config = load_config(&args)?;
    let network = MyceliumNetwork::initialize_network(&config)
        .context("Failed to initialize network")?;

    match args.command {
        Command::Validate { ref payload, origin } => {
            let result = network
                .submit_for_validation(payload.as_bytes(), origin)
                .context("Validation failed")?;
            emit(args.json, &result)?;
        }
        Command::Propagate {
            ref payload,
            origin,
        } => {
            let time = network
                .propagate_signal(payload.as_bytes(), origin)
                .context("Propagation failed")?;
            emit(args.json, &time)?;
        }
        Command::Adapt { cycles } => {
            let reports = (0..cycles)
                .map(|_| network.run_adaptation_cycle())
                .collect::<Result<Vec<_>, _>>()
                .context("Adaptation cycle failed")?;
            emit(args.json, &reports)?;
        }
        Command::Run { metrics_port, .. } => {
            let network = Arc::new(network);
            let period = Duration::from_secs(config.topology.interval_secs);
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            spawn_metrics_endpoint(
                metrics_port.unwrap_or(default_metrics_port),
                shutdown_rx.clone(),
            );
            let handle = tokio::spawn(run_adaptation_loop(network.clone(), period, shutdown_rx));

            info!("Node is running. Press Ctrl+C to stop.");
            tokio::signal::ctrl_c().await?;

            shutdown_tx.send(true).ok();
            let cycles = handle.await.context("Adaptation loop panicked")?;
            info!(cycles, nodes = network.node_count(), "Node stopped");
        }
    }

    if args.metrics {
        print!("{}", encode_metrics().context("Failed to encode metrics")?);
    }

    Ok(())
}
