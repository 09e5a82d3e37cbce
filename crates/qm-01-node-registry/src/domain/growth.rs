//! # Growth Arithmetic
//!
//! Pure helpers shared by `Registry::grow` and the topology adapter.

use shared_types::{NetworkError, NetworkResult};

/// Golden ratio, the default population multiplier per growth step.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.618;

/// Smallest population a registry may be initialized with.
pub const MIN_INITIAL_NODES: usize = 1;

/// Reject factors that would not grow the population.
pub fn validate_growth_factor(factor: f64) -> NetworkResult<()> {
    if !factor.is_finite() {
        return Err(NetworkError::config(format!(
            "growth factor must be finite, got {factor}"
        )));
    }
    if factor <= 1.0 {
        return Err(NetworkError::config(format!(
            "growth factor must be greater than 1, got {factor}"
        )));
    }
    Ok(())
}

/// Number of nodes a growth step appends: `floor(size × (factor − 1))`.
///
/// May be zero for small populations; that is a no-op, not an error.
pub fn growth_increment(size: usize, factor: f64) -> NetworkResult<usize> {
    validate_growth_factor(factor)?;

    let increment = (size as f64 * (factor - 1.0)).floor();
    if increment >= usize::MAX as f64 || size.checked_add(increment as usize).is_none() {
        return Err(NetworkError::config(format!(
            "growing {size} nodes by factor {factor} overflows the registry"
        )));
    }
    Ok(increment as usize)
}
