//! Per-node seed derivation.
//!
//! Each node gets its own RNG stream derived from the round seed and its id,
//! so opinions do not depend on the order nodes are visited in.

use shared_types::NodeId;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed for `node`'s RNG within the round identified by `round_seed`.
pub fn node_seed(round_seed: u64, node: NodeId) -> u64 {
    splitmix64(round_seed ^ node.0.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA))
}

// SplitMix64 finalizer
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
