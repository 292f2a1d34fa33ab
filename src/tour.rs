//! Tour representation and cost evaluation.

use crate::graph::Graph;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tour over the graph together with its cost at the time it was accepted.
///
/// A complete tour lists every node exactly once and repeats the start node
/// at the end to close the cycle.
#[derive(Clone, Serialize, Deserialize)]
pub struct Tour {
    /// The visited node ids, in order.
    pub nodes: Vec<usize>,
    /// The total cost recorded when the tour was accepted.
    pub cost: f64,
}

impl Tour {
    /// Create a tour from a node sequence and its recorded cost.
    pub fn new(nodes: Vec<usize>, cost: f64) -> Self {
        Tour { nodes, cost }
    }

    /// Sum the edge costs along a node sequence, consecutive pair by
    /// consecutive pair.
    ///
    /// A closed sequence (start node repeated at the end) therefore yields
    /// the full cycle cost, return edge included. Partial sequences are
    /// summed the same way with no implicit closing edge.
    pub fn cycle_cost(nodes: &[usize], graph: &Graph) -> f64 {
        nodes
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| graph.cost(from, to))
            .sum()
    }

    /// Recompute this tour's cost from the graph.
    pub fn recompute_cost(&self, graph: &Graph) -> f64 {
        Self::cycle_cost(&self.nodes, graph)
    }

    /// Check that the tour returns to its starting node.
    pub fn is_closed(&self) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Check that the tour visits every node in `1..=num_nodes` exactly once,
    /// ignoring the closing repeat.
    pub fn visits_all(&self, num_nodes: usize) -> bool {
        if self.nodes.len() != num_nodes + 1 {
            return false;
        }

        let mut visited: Vec<usize> = self.nodes[..self.nodes.len() - 1].to_vec();
        visited.sort_unstable();
        visited.iter().copied().eq(1..=num_nodes)
    }

    /// Number of entries in the node sequence, closing repeat included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the tour has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour(cost: {:.2}, nodes: {:?})", self.cost, self.nodes)
    }
}
