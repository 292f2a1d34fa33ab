//! Solution output and run reporting.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::graph::Graph;
use crate::tour::Tour;

/// Name of the solution file written after the search.
pub const SOLUTION_FILE: &str = "solution_922092536.txt";

/// Write a tour's node ids to a file as one comma-separated line.
///
/// An empty tour produces an empty file.
pub fn save_tour<P: AsRef<Path>>(nodes: &[usize], path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    if !nodes.is_empty() {
        writeln!(file, "{}", nodes.iter().join(", "))?;
    }

    Ok(())
}

/// Summary of a finished search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// Trials evaluated across construction and refinement
    pub trials: u64,
    /// Cost of the best tour, infinite if no tour was completed
    pub min_cost: f64,
    /// Wall-clock time the run took
    pub run_time: Duration,
}

impl SearchReport {
    /// Format the report for the console.
    pub fn format(&self) -> String {
        format!(
            "Cycles evaluated: {:.0e}\nMin cost: {:.2}",
            self.trials as f64, self.min_cost
        )
    }
}

/// Diagnostic check of the best tour against the graph.
///
/// Reporting only; a failed check never changes the process outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Does the tour return to its starting node
    pub complete_cycle: bool,
    /// Cost recomputed from the graph
    pub recomputed_cost: f64,
    /// Exact equality of the recomputed and recorded costs; both totals are
    /// accumulated edge by edge in tour order, not compared by tolerance
    pub cost_matches: bool,
    /// Does the tour visit every node exactly once
    pub valid_tour: bool,
}

impl ValidationReport {
    /// Validate a tour against the graph and the recorded minimum cost.
    pub fn check(tour: &Tour, graph: &Graph, min_cost: f64) -> Self {
        let recomputed_cost = tour.recompute_cost(graph);

        ValidationReport {
            complete_cycle: tour.is_closed(),
            recomputed_cost,
            cost_matches: recomputed_cost == min_cost,
            valid_tour: tour.visits_all(graph.num_nodes()),
        }
    }

    /// Format the validation results for the console.
    pub fn format(&self) -> String {
        format!(
            "Check if a valid TSP tour was found:
- Complete cycle: {}
- Recomputed cost: {:.2} ({})
- Valid TSP tour: {}",
            self.complete_cycle,
            self.recomputed_cost,
            if self.cost_matches {
                "matches"
            } else {
                "doesn't match"
            },
            self.valid_tour
        )
    }
}
