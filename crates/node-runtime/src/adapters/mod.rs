//! # Adapters
//!
//! Port implementations owned by the runtime.

pub mod load_metrics;

pub use load_metrics::LoadMetricsProvider;
