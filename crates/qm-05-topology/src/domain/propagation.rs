//! # Signal Propagation
//!
//! Transmission time of a payload over the mesh. Every link shortens the
//! time until the mesh saturates:
//!
//! ```text
//! time = BASE_PROPAGATION_TIME × (1 − min(links, SATURATION_LINKS) / SATURATION_LINKS)
//! ```

/// Propagation time over a mesh with no links.
pub const BASE_PROPAGATION_TIME: f64 = 0.1;

/// Link count at which propagation becomes instantaneous.
pub const SATURATION_LINKS: usize = 100;

/// Propagation time for a mesh with `links` undirected links, in
/// `[0, BASE_PROPAGATION_TIME]`.
pub fn propagation_time(links: usize) -> f64 {
    let saturation = links.min(SATURATION_LINKS) as f64 / SATURATION_LINKS as f64;
    BASE_PROPAGATION_TIME * (1.0 - saturation)
}
