//! Random 3-shuffle refinement of the best tour.

use crate::graph::Graph;
use crate::search::{Deadline, SearchState};
use crate::tour::Tour;
use log::debug;
use rand::Rng;

/// Refines the best tour by permuting three randomly chosen positions.
///
/// Each trial generates the five non-identity arrangements of the three
/// selected nodes and keeps any arrangement that beats the current best.
pub struct LocalSearch;

impl LocalSearch {
    /// Create the refinement phase.
    pub fn new() -> Self {
        LocalSearch
    }

    /// Run shuffle trials until the deadline passes.
    ///
    /// Returns immediately when the graph has fewer than 7 nodes (three
    /// distinct interior positions are not available) or when construction
    /// produced no tour to refine.
    pub fn run(&self, graph: &Graph, search: &mut SearchState, deadline: &Deadline) {
        if graph.num_nodes() < 7 {
            return;
        }
        let tour_len = match search.best_tour() {
            Some(tour) => tour.len(),
            None => return,
        };

        while !deadline.reached() {
            // Positions are drawn below the closing entry so the return edge
            // is never permuted; the +1 offset skips the fixed start node.
            let pos1 = search.rng.gen_range(0..=tour_len - 3);
            let pos2 = search.rng.gen_range(0..=tour_len - 3);
            let pos3 = search.rng.gen_range(0..=tour_len - 3);

            if pos1 == pos2 || pos1 == pos3 || pos2 == pos3 {
                continue;
            }

            let (a, b, c) = (pos1 + 1, pos2 + 1, pos3 + 1);
            self.shuffle_trial(graph, search, a, b, c);
        }
    }

    /// Evaluate the five non-identity permutations of positions `a`, `b`, `c`
    /// against the live best tour.
    ///
    /// All five candidates are cloned from the best tour as it stands when
    /// the trial begins; each is then compared to the live best in turn, so a
    /// later candidate can displace an earlier one from the same trial.
    fn shuffle_trial(&self, graph: &Graph, search: &mut SearchState, a: usize, b: usize, c: usize) {
        let base = match search.best_tour() {
            Some(tour) => tour.nodes.clone(),
            None => return,
        };

        // Rotation one way: a <- b <- c <- a
        let mut candidate = base.clone();
        let tmp = candidate[a];
        candidate[a] = candidate[b];
        candidate[b] = candidate[c];
        candidate[c] = tmp;
        self.evaluate(graph, search, candidate);

        // Pairwise a <-> b
        let mut candidate = base.clone();
        candidate.swap(a, b);
        self.evaluate(graph, search, candidate);

        // Rotation the other way: a <- c <- b <- a
        let mut candidate = base.clone();
        let tmp = candidate[a];
        candidate[a] = candidate[c];
        candidate[c] = candidate[b];
        candidate[b] = tmp;
        self.evaluate(graph, search, candidate);

        // Pairwise a <-> c
        let mut candidate = base.clone();
        candidate.swap(a, c);
        self.evaluate(graph, search, candidate);

        // Pairwise b <-> c
        let mut candidate = base;
        candidate.swap(b, c);
        self.evaluate(graph, search, candidate);
    }

    /// Cost one candidate and accept it if it improves on the current best.
    fn evaluate(&self, graph: &Graph, search: &mut SearchState, candidate: Vec<usize>) {
        search.record_trial();
        let cost = Tour::cycle_cost(&candidate, graph);
        if search.accept(candidate, cost) {
            debug!("local search: new best cost {:.2}", cost);
        }
    }
}

impl Default for LocalSearch {
    fn default() -> Self {
        LocalSearch::new()
    }
}
