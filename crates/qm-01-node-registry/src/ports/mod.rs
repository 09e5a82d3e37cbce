//! # Outbound Ports
//!
//! All randomness in the network is drawn through [`EntropySource`], so tests
//! can pin a seed and assert on exact populations.

/// Source of uniformly distributed random numbers.
///
/// Implementations must be shareable across threads: validation collects
/// opinions in parallel and each adaptation cycle may sample from the same
/// source.
pub trait EntropySource: Send + Sync {
    /// Next uniformly distributed 64-bit value.
    fn next_u64(&self) -> u64;

    /// Next uniform sample in `[0, 1)`.
    ///
    /// Uses the top 53 bits so every output is exactly representable.
    fn next_unit(&self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
