//! Topology state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Adaptation phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyState {
    /// No growth in progress.
    #[default]
    Stable,
    /// Registry is being grown and re-linked.
    Growing,
}

impl TopologyState {
    /// Check if a state transition is valid.
    pub fn can_transition_to(&self, next: TopologyState) -> bool {
        matches!(
            (self, next),
            (Self::Stable, Self::Growing) | (Self::Growing, Self::Stable)
        )
    }

    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Growing => "growing",
        }
    }
}

impl fmt::Display for TopologyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_state_transitions_stable_to_growing() {
        assert!(TopologyState::Stable.can_transition_to(TopologyState::Growing));
    }

    #[test]
    fn test_topology_state_transitions_growing_to_stable() {
        assert!(TopologyState::Growing.can_transition_to(TopologyState::Stable));
    }

    #[test]
    fn test_topology_state_no_self_transitions() {
        assert!(!TopologyState::Stable.can_transition_to(TopologyState::Stable));
        assert!(!TopologyState::Growing.can_transition_to(TopologyState::Growing));
    }

    #[test]
    fn test_default_is_stable() {
        assert_eq!(TopologyState::default(), TopologyState::Stable);
        assert_eq!(TopologyState::Growing.to_string(), "growing");
    }
}
