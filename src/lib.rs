//! # Greedy TSP
//!
//! A time-bounded heuristic for the symmetric Traveling Salesman Problem on
//! complete weighted graphs.
//!
//! The search runs two phases against a shared wall-clock deadline: repeated
//! randomized nearest-neighbor construction from distinct start nodes, then
//! refinement of the best tour by random three-node permutations. The best
//! cost only ever decreases; whatever tour leads when the deadline passes is
//! the answer.

pub mod config;
pub mod construction;
pub mod graph;
pub mod local_search;
pub mod search;
pub mod tour;
pub mod utils;

use crate::config::Config;
use crate::construction::GreedyConstruction;
use crate::graph::Graph;
use crate::local_search::LocalSearch;
use crate::search::{Deadline, SearchState};
use crate::tour::Tour;
use crate::utils::SearchReport;

use log::info;
use std::time::Duration;

/// The main structure that orchestrates the two search phases.
pub struct TspAlgorithm {
    pub graph: Graph,
    pub config: Config,
    pub search: SearchState,
    pub construction: GreedyConstruction,
    pub local_search: LocalSearch,
    pub deadline: Deadline,
    pub run_time: Duration,
}

impl TspAlgorithm {
    /// Create a new search instance for the given graph and configuration.
    ///
    /// The deadline starts counting immediately; use [`with_deadline`] to
    /// supply one captured earlier (for example at process entry, before
    /// parsing).
    ///
    /// [`with_deadline`]: TspAlgorithm::with_deadline
    pub fn new(graph: Graph, config: Config) -> Self {
        let num_nodes = graph.num_nodes();
        let deadline = Deadline::after(config.time_limit);

        TspAlgorithm {
            graph,
            search: SearchState::new(config.seed),
            config,
            construction: GreedyConstruction::new(num_nodes),
            local_search: LocalSearch::new(),
            deadline,
            run_time: Duration::from_secs(0),
        }
    }

    /// Replace the deadline, keeping everything else.
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Run both phases to completion and return the best tour found.
    ///
    /// Returns `None` only when no construction trial finished, which takes
    /// an empty graph or an already-expired deadline.
    pub fn run(&mut self) -> Option<&Tour> {
        self.construction
            .run(&self.graph, &mut self.search, &self.deadline);
        info!(
            "construction done: {} trials, best cost {:.2}",
            self.search.trials, self.search.best_cost
        );

        self.local_search
            .run(&self.graph, &mut self.search, &self.deadline);
        info!(
            "local search done: {} trials total, best cost {:.2}",
            self.search.trials, self.search.best_cost
        );

        self.run_time = self.deadline.elapsed();
        self.search.best_tour()
    }

    /// Summarize the finished run.
    pub fn report(&self) -> SearchReport {
        SearchReport {
            trials: self.search.trials,
            min_cost: self.search.best_cost,
            run_time: self.run_time,
        }
    }
}
