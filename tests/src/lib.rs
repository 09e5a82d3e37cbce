//! # Mycelium Network Test Suite
//!
//! Unified test crate for behaviour that spans more than one subsystem.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── pipeline.rs     # fingerprint → validate → aggregate
//! │   ├── adaptation.rs   # congestion → growth → re-linking
//! │   └── concurrency.rs  # readers racing an adaptation cycle
//! └── benches/
//!     └── pipeline_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qm-tests
//!
//! # By flow
//! cargo test -p qm-tests integration::pipeline::
//! cargo test -p qm-tests integration::adaptation::
//!
//! # Benchmarks
//! cargo bench -p qm-tests
//! ```

pub mod integration;
