//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `NodeId`
//! - **Signal**: `Amplitude`, `Fingerprint`
//! - **Voting**: `Opinion`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::errors::{InvalidFingerprint, ParseNodeIdError};

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Unique identifier for a node within a registry.
///
/// Identifiers are handed out sequentially and rendered as `node_<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Textual prefix used by the `node_<n>` form.
    pub const PREFIX: &'static str = "node_";
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    /// Accepts both `node_7` and bare `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        digits
            .parse::<u64>()
            .map(NodeId)
            .map_err(|_| ParseNodeIdError(s.to_string()))
    }
}

// =============================================================================
// CLUSTER B: SIGNAL
// =============================================================================

/// A complex amplitude `re + im·i`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Amplitude {
    pub re: f64,
    pub im: f64,
}

impl Amplitude {
    pub const ZERO: Amplitude = Amplitude { re: 0.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `e^{iθ}`
    pub fn from_phase(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Squared magnitude `|z|²`.
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Amplitude {
    type Output = Amplitude;

    fn add(self, rhs: Amplitude) -> Amplitude {
        Amplitude::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Mul for Amplitude {
    type Output = Amplitude;

    fn mul(self, rhs: Amplitude) -> Amplitude {
        Amplitude::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Fixed-length, unit-norm vector of amplitudes derived from a payload.
///
/// # Invariants
///
/// - length is non-zero and even
/// - `Σ |a_i|² = 1` (within floating point tolerance)
///
/// Build one with [`Fingerprint::normalized`]. Deserialization goes through
/// `TryFrom<Vec<Amplitude>>`, which checks both invariants without
/// renormalizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Amplitude>", into = "Vec<Amplitude>")]
pub struct Fingerprint {
    amplitudes: Vec<Amplitude>,
}

impl Fingerprint {
    /// Tolerance used when checking the unit-norm invariant.
    pub const NORM_TOLERANCE: f64 = 1e-9;

    /// Normalise `amplitudes` into a fingerprint.
    ///
    /// Returns `None` for an empty or odd-length vector, a vector containing
    /// non-finite components, or one whose norm is zero.
    pub fn normalized(amplitudes: Vec<Amplitude>) -> Option<Self> {
        if amplitudes.is_empty() || amplitudes.len() % 2 != 0 {
            return None;
        }
        if amplitudes.iter().any(|a| !a.is_finite()) {
            return None;
        }

        let norm = amplitudes.iter().map(Amplitude::norm_sqr).sum::<f64>().sqrt();
        if norm <= f64::EPSILON {
            return None;
        }

        Some(Self {
            amplitudes: amplitudes.into_iter().map(|a| a.scale(1.0 / norm)).collect(),
        })
    }

    /// Equal superposition over `len` components (`len` rounded up to even).
    pub fn uniform(len: usize) -> Self {
        let len = (len.max(2) + 1) & !1;
        let value = 1.0 / (len as f64).sqrt();
        Self {
            amplitudes: vec![Amplitude::new(value, 0.0); len],
        }
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    /// `Σ |a_i|²`, which is 1 up to rounding.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(Amplitude::norm_sqr).sum()
    }

    /// Component-wise comparison with a relative tolerance.
    pub fn approx_eq(&self, other: &Fingerprint, rtol: f64) -> bool {
        const ATOL: f64 = 1e-8;
        self.len() == other.len()
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| {
                    (a.re - b.re).abs() <= ATOL + rtol * b.re.abs()
                        && (a.im - b.im).abs() <= ATOL + rtol * b.im.abs()
                })
    }
}

impl TryFrom<Vec<Amplitude>> for Fingerprint {
    type Error = InvalidFingerprint;

    fn try_from(amplitudes: Vec<Amplitude>) -> Result<Self, Self::Error> {
        if amplitudes.is_empty() || amplitudes.len() % 2 != 0 {
            return Err(InvalidFingerprint(format!(
                "length must be even and non-zero, got {}",
                amplitudes.len()
            )));
        }
        if amplitudes.iter().any(|a| !a.is_finite()) {
            return Err(InvalidFingerprint("non-finite amplitude".to_string()));
        }

        let total: f64 = amplitudes.iter().map(Amplitude::norm_sqr).sum();
        if (total - 1.0).abs() > Self::NORM_TOLERANCE {
            return Err(InvalidFingerprint(format!(
                "total probability must be 1, got {total}"
            )));
        }
        Ok(Self { amplitudes })
    }
}

impl From<Fingerprint> for Vec<Amplitude> {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.amplitudes
    }
}

// =============================================================================
// CLUSTER C: VOTING
// =============================================================================

/// One node's vote on a single validation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opinion {
    /// The node that produced this opinion.
    pub node_id: NodeId,
    /// Accept (`true`) or reject (`false`).
    pub accept: bool,
    /// How strongly the node holds this opinion, in `[0, 1]`.
    pub strength: f64,
    /// Snapshot of the node's validation power at collection time, in `[0, 1]`.
    pub validation_power: f64,
}

impl Opinion {
    /// Build an opinion, clamping `strength` and `validation_power` into `[0, 1]`.
    pub fn new(node_id: NodeId, accept: bool, strength: f64, validation_power: f64) -> Self {
        Self {
            node_id,
            accept,
            strength: clamp_unit(strength),
            validation_power: clamp_unit(validation_power),
        }
    }

    /// Weight of this opinion in consensus: `strength × validation_power`.
    pub fn weight(&self) -> f64 {
        self.strength * self.validation_power
    }
}

/// Clamp into `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
