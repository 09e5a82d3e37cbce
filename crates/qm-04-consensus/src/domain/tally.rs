//! # Weight Tally
//!
//! Order-independent sums of opinion weights. Floating point addition is not
//! associative, so the weights are sorted before they are added: every
//! permutation of the same opinions produces the same addition sequence and
//! therefore bit-identical sums.

use serde::{Deserialize, Serialize};
use shared_types::Opinion;

/// Sums of accepting and total weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTally {
    accepting: f64,
    total: f64,
}

impl WeightTally {
    /// Usable weight of one opinion. Negative, non-finite and signed-zero
    /// weights all count as `+0.0`.
    pub fn weight_of(opinion: &Opinion) -> f64 {
        let weight = opinion.weight();
        if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            0.0
        }
    }

    /// Tally a whole opinion set.
    pub fn from_opinions(opinions: &[Opinion]) -> Self {
        let mut all: Vec<f64> = opinions.iter().map(Self::weight_of).collect();
        let mut accepting: Vec<f64> = opinions
            .iter()
            .filter(|o| o.accept)
            .map(Self::weight_of)
            .collect();

        Self {
            accepting: ordered_sum(&mut accepting),
            total: ordered_sum(&mut all),
        }
    }

    /// True when there is no weight to decide on.
    pub fn is_empty(&self) -> bool {
        self.total <= 0.0
    }

    /// Accepting fraction of the total, or `None` when the total is zero.
    pub fn confidence(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some((self.accepting / self.total).clamp(0.0, 1.0))
    }

    /// Sum of accepting weights.
    pub fn accepting_weight(&self) -> f64 {
        self.accepting
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.total
    }
}

/// Ascending sort, then a left-to-right sum.
fn ordered_sum(weights: &mut [f64]) -> f64 {
    weights.sort_unstable_by(f64::total_cmp);
    weights.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::NodeId;

    #[test]
    fn test_weight_of_sanitizes() {
        assert_eq!(
            WeightTally::weight_of(&Opinion::new(NodeId(0), true, 0.0, 0.9)),
            0.0
        );
        assert_eq!(
            WeightTally::weight_of(&Opinion::new(NodeId(0), true, f64::NAN, 0.9)),
            0.0
        );
        assert_eq!(
            WeightTally::weight_of(&Opinion::new(NodeId(0), true, 0.5, 0.5)),
            0.25
        );
    }

    #[test]
    fn test_confidence_fraction() {
        let tally = WeightTally::from_opinions(&[
            Opinion::new(NodeId(0), true, 1.0, 0.75),
            Opinion::new(NodeId(1), false, 1.0, 0.25),
        ]);
        assert_eq!(tally.confidence(), Some(0.75));
        assert_eq!(tally.accepting_weight(), 0.75);
        assert_eq!(tally.total_weight(), 1.0);
    }

    #[test]
    fn test_empty_tally_has_no_confidence() {
        let tally = WeightTally::from_opinions(&[]);
        assert!(tally.is_empty());
        assert_eq!(tally.confidence(), None);
    }

    #[test]
    fn test_tiny_weights_are_not_lost() {
        // 1e-9 × 1e-9 = 1e-18
        let tally = WeightTally::from_opinions(&[Opinion::new(NodeId(0), true, 1e-9, 1e-9)]);
        assert!(!tally.is_empty());
        assert_eq!(tally.confidence(), Some(1.0));

        let tally = WeightTally::from_opinions(&[
            Opinion::new(NodeId(0), true, 3e-8, 1e-8),
            Opinion::new(NodeId(1), false, 1e-8, 1e-8),
        ]);
        let confidence = tally.confidence().unwrap();
        assert!((confidence - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_sum_ignores_input_order() {
        let weights = [0.1, 1e-17, 0.7, 3e-9, 0.2, 0.3333];
        let forward: Vec<Opinion> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| Opinion::new(NodeId(i as u64), i % 2 == 0, *w, 1.0))
            .collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = WeightTally::from_opinions(&forward);
        let b = WeightTally::from_opinions(&backward);
        assert_eq!(a.total_weight().to_bits(), b.total_weight().to_bits());
        assert_eq!(a.accepting_weight().to_bits(), b.accepting_weight().to_bits());
    }
}
