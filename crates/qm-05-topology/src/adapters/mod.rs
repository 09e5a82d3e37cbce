//! # Adapters
//!
//! Default metrics, optimizer and scorer implementations.

pub mod fixed_metrics;
pub mod mesh;
pub mod random_scorer;

pub use fixed_metrics::FixedMetrics;
pub use mesh::{MeshPathOptimizer, NoopOptimizer, DEFAULT_MAX_CANDIDATES};
pub use random_scorer::RandomPathScorer;
