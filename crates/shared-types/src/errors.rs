//! # Error Types
//!
//! Errors shared by every subsystem. All of them are raised before any
//! registry mutation, so a failed call leaves the registry untouched.

use thiserror::Error;

use crate::entities::NodeId;

/// Errors produced by the network core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// Bad initial population, growth factor or threshold.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation addressed from a node that is not in the registry.
    #[error("Unknown origin node: {0}")]
    UnknownOrigin(NodeId),
}

impl NetworkError {
    /// Shorthand for [`NetworkError::InvalidConfiguration`].
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    /// Stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration(_) => "invalid_configuration",
            Self::UnknownOrigin(_) => "unknown_origin",
        }
    }
}

/// Result type for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

/// A string could not be parsed as a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid node id '{0}': expected node_<n> or <n>")]
pub struct ParseNodeIdError(pub String);

/// An amplitude vector that does not satisfy the fingerprint invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid fingerprint: {0}")]
pub struct InvalidFingerprint(pub String);
