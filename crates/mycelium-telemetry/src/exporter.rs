//! HTTP scrape endpoint.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /metrics` | Prometheus text format |
//! | `GET /health` | `ok` |

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::future::Future;
use std::net::SocketAddr;

use crate::metrics::encode_metrics;

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Router serving `/metrics` and `/health`.
pub fn metrics_router() -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_check))
}

async fn metrics_handler() -> Response {
    match encode_metrics() {
        Ok(body) => ([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn health_check() -> &'static str {
    "ok"
}

/// Serve the scrape endpoint on `addr` until `shutdown` completes.
pub async fn serve_metrics<F>(addr: SocketAddr, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Metrics endpoint listening");

    axum::serve(listener, metrics_router())
        .with_graceful_shutdown(shutdown)
        .await
}
