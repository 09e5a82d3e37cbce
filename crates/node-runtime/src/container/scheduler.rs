//! # Scheduled Adaptation
//!
//! Runs an adaptation cycle every `period` until the shutdown signal flips.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::container::network::MyceliumNetwork;

/// Drive `network` on a fixed interval.
///
/// The first cycle runs one full `period` after the call. Failed cycles are
/// logged and the loop keeps going. Returns the number of cycles that ran.
pub async fn run_adaptation_loop(
    network: Arc<MyceliumNetwork>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> u64 {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;

    info!(period_secs = period.as_secs_f64(), "Adaptation loop started");
    let mut cycles = 0u64;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match network.run_adaptation_cycle() {
                    Ok(report) => debug!(
                        state = %report.state,
                        nodes = report.nodes_after(),
                        congestion = report.metrics.congestion,
                        "Scheduled adaptation cycle"
                    ),
                    Err(e) => warn!(error = %e, "Adaptation cycle failed"),
                }
                cycles += 1;
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!(cycles, "Adaptation loop stopped");
    cycles
}
