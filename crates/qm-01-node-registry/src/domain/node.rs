//! # Node Entity

use serde::{Deserialize, Serialize};
use shared_types::{Amplitude, NodeId};
use std::f64::consts::FRAC_1_SQRT_2;

/// A participating node.
///
/// `id` and `validation_power` are fixed at creation. Only the connection list
/// changes over the node's lifetime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within the registry.
    pub id: NodeId,
    /// Weight of this node's opinions, in `[0, 1)`.
    pub validation_power: f64,
    /// Peer set. May be empty.
    pub connections: Vec<NodeId>,
    /// Two-amplitude local state compared against fingerprints.
    pub state: [Amplitude; 2],
}

impl Node {
    /// Equal superposition `(1/√2, 1/√2)`.
    pub const GROUND_STATE: [Amplitude; 2] = [
        Amplitude::new(FRAC_1_SQRT_2, 0.0),
        Amplitude::new(FRAC_1_SQRT_2, 0.0),
    ];

    /// Create an unconnected node in the ground state.
    pub fn new(id: NodeId, validation_power: f64) -> Self {
        Self {
            id,
            validation_power,
            connections: Vec::new(),
            state: Self::GROUND_STATE,
        }
    }

    /// Whether `peer` is in this node's connection list.
    pub fn is_connected_to(&self, peer: NodeId) -> bool {
        self.connections.contains(&peer)
    }

    /// Number of peers.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }
}
