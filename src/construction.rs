//! Randomized greedy tour construction.

use crate::graph::Graph;
use crate::search::{Deadline, SearchState};
use log::debug;
use rand::Rng;

/// Builds nearest-neighbor tours from randomly drawn start nodes and keeps
/// the cheapest.
///
/// Each node serves as a start at most once, so the phase runs at most N
/// trials even with time to spare.
pub struct GreedyConstruction {
    /// Nodes not yet used as a construction start.
    pub start_pool: Vec<usize>,
}

impl GreedyConstruction {
    /// Create the phase with every node available as a start.
    pub fn new(num_nodes: usize) -> Self {
        GreedyConstruction {
            start_pool: (1..=num_nodes).collect(),
        }
    }

    /// Run construction trials until the deadline passes or the start pool
    /// is exhausted.
    pub fn run(&mut self, graph: &Graph, search: &mut SearchState, deadline: &Deadline) {
        while !deadline.reached() && !self.start_pool.is_empty() {
            search.record_trial();

            // Draw a random start and retire it from the pool.
            let idx = search.rng.gen_range(0..self.start_pool.len());
            let start = self.start_pool.swap_remove(idx);

            // A pruned trial yields no tour and is never compared to the best.
            if let Some((nodes, cost)) = Self::build_tour(graph, start, search.best_cost) {
                if search.accept(nodes, cost) {
                    debug!("construction: new best cost {:.2} from start {}", cost, start);
                }
            }
        }
    }

    /// Build one nearest-neighbor tour from `start`.
    ///
    /// Extends the tour by the cheapest edge to a still-unvisited node, ties
    /// going to the lowest node id. Returns `None` if the accumulated cost
    /// reaches `best_cost` before the tour is complete.
    fn build_tour(graph: &Graph, start: usize, best_cost: f64) -> Option<(Vec<usize>, f64)> {
        let num_nodes = graph.num_nodes();

        // Unvisited nodes in ascending id order.
        let mut unvisited: Vec<usize> = (1..=num_nodes).filter(|&node| node != start).collect();

        let mut nodes = Vec::with_capacity(num_nodes + 1);
        nodes.push(start);
        let mut current = start;
        let mut cost = 0.0;

        while !unvisited.is_empty() {
            if cost >= best_cost {
                return None;
            }

            let mut best_pos = 0;
            let mut best_edge = f64::INFINITY;
            for (pos, &candidate) in unvisited.iter().enumerate() {
                let edge = graph.cost(current, candidate);
                if edge < best_edge {
                    best_edge = edge;
                    best_pos = pos;
                }
            }

            // Plain remove keeps the ascending scan order intact.
            current = unvisited.remove(best_pos);
            nodes.push(current);
            cost += best_edge;
        }

        // Close the cycle back to the start.
        cost += graph.cost(current, start);
        nodes.push(start);

        Some((nodes, cost))
    }
}
