//! # Registry Aggregate
//!
//! Owns every node. Ids are dense and sequential (`node_0`, `node_1`, ...),
//! so a node's id doubles as its index and lookups are O(1).

use serde::{Deserialize, Serialize};
use shared_types::{NetworkError, NetworkResult, NodeId};
use tracing::{debug, info};

use super::growth::{growth_increment, MIN_INITIAL_NODES};
use super::node::Node;
use crate::ports::EntropySource;

/// The node population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    nodes: Vec<Node>,
}

impl Registry {
    /// Create `count` nodes with uniformly sampled validation power.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `count < 1`.
    pub fn initialize(count: usize, entropy: &dyn EntropySource) -> NetworkResult<Self> {
        if count < MIN_INITIAL_NODES {
            return Err(NetworkError::config(format!(
                "initial node count must be at least {MIN_INITIAL_NODES}, got {count}"
            )));
        }

        let nodes = Self::spawn_nodes(0, count, entropy);
        info!(nodes = count, "[qm-01] Registry initialized");
        Ok(Self { nodes })
    }

    /// Append `floor(len × (factor − 1))` freshly sampled nodes.
    ///
    /// Returns the ids that were added, which may be empty. Either all new
    /// nodes are appended or, on error, none are.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `factor <= 1` or is not finite.
    pub fn grow(&mut self, factor: f64, entropy: &dyn EntropySource) -> NetworkResult<Vec<NodeId>> {
        let increment = growth_increment(self.nodes.len(), factor)?;
        if increment == 0 {
            debug!(
                size = self.nodes.len(),
                factor, "[qm-01] Growth increment is zero, registry unchanged"
            );
            return Ok(Vec::new());
        }

        let before = self.nodes.len();
        let spawned = Self::spawn_nodes(self.next_index(), increment, entropy);
        let added: Vec<NodeId> = spawned.iter().map(|n| n.id).collect();
        self.nodes.extend(spawned);

        info!(
            before,
            after = self.nodes.len(),
            factor,
            "[qm-01] Registry grown"
        );
        Ok(added)
    }

    /// Build `count` nodes starting at `first_index`.
    fn spawn_nodes(first_index: u64, count: usize, entropy: &dyn EntropySource) -> Vec<Node> {
        (0..count as u64)
            .map(|offset| Node::new(NodeId(first_index + offset), entropy.next_unit()))
            .collect()
    }

    fn next_index(&self) -> u64 {
        self.nodes.last().map(|n| n.id.0 + 1).unwrap_or(0)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Only true for a registry that was never initialized (e.g. deserialized).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Look a node up by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        usize::try_from(id.0)
            .ok()
            .and_then(|idx| self.nodes.get(idx))
            .filter(|n| n.id == id)
    }

    /// Whether `id` belongs to this registry.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Membership check for operations addressed from a node.
    ///
    /// # Errors
    ///
    /// `UnknownOrigin` if `id` is not present.
    pub fn ensure_member(&self, id: NodeId) -> NetworkResult<&Node> {
        self.get(id).ok_or(NetworkError::UnknownOrigin(id))
    }

    /// Add a symmetric connection between two nodes. Idempotent.
    ///
    /// Returns `true` if a new link was created.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> NetworkResult<bool> {
        self.ensure_member(a)?;
        self.ensure_member(b)?;
        if a == b {
            return Ok(false);
        }

        let (ia, ib) = (a.0 as usize, b.0 as usize);
        if self.nodes[ia].is_connected_to(b) {
            return Ok(false);
        }
        self.nodes[ia].connections.push(b);
        self.nodes[ib].connections.push(a);
        Ok(true)
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }
}
