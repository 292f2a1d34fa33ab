//! Problem definition and cost matrix for the symmetric TSP.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// A complete, symmetric, weighted graph stored as a dense cost matrix.
///
/// Nodes are 1-indexed; row and column 0 are unused padding so node ids can
/// index the matrix directly. Unlisted pairs keep the default cost of 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    num_nodes: usize,
    costs: Vec<Vec<f64>>,
}

impl Graph {
    /// Create a graph with `num_nodes` nodes and all edge costs at 0.
    pub fn new(num_nodes: usize) -> Self {
        Graph {
            num_nodes,
            costs: vec![vec![0.0; num_nodes + 1]; num_nodes + 1],
        }
    }

    /// Create a graph from a list of undirected `(i, j, cost)` edges.
    pub fn with_edges(num_nodes: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = Graph::new(num_nodes);
        for &(i, j, cost) in edges {
            graph.set_cost(i, j, cost);
        }
        graph
    }

    /// Get the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Get the cost of the edge between two nodes.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from][to]
    }

    /// Set the cost of the undirected edge between two nodes.
    ///
    /// Writes both `[i][j]` and `[j][i]`. Indices must be in `1..=num_nodes`;
    /// the input format is trusted and out-of-range ids are a caller error.
    pub fn set_cost(&mut self, i: usize, j: usize, cost: f64) {
        self.costs[i][j] = cost;
        self.costs[j][i] = cost;
    }

    /// Load a graph from an edge-list file.
    ///
    /// The first token is the node count; the remainder of the first line is
    /// a header and is ignored. The rest of the file is read as a stream of
    /// whitespace-separated `(i, j, cost)` triples, which may span lines.
    /// Parsing stops silently at end of input or at the first token that does
    /// not parse; edges read up to that point are kept.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut lines = reader.lines();

        // First line: node count followed by free-form header text.
        let header = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };
        let num_nodes = header
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse::<usize>().ok())
            .unwrap_or(0);

        let mut graph = Graph::new(num_nodes);

        // Remaining lines form one token stream of (i, j, cost) triples.
        let mut tokens = Vec::new();
        for line_result in lines {
            let line = line_result?;
            tokens.extend(line.split_whitespace().map(str::to_string));
        }

        let mut iter = tokens.iter();
        while let (Some(i_tok), Some(j_tok), Some(cost_tok)) =
            (iter.next(), iter.next(), iter.next())
        {
            let parsed = (
                i_tok.parse::<usize>(),
                j_tok.parse::<usize>(),
                cost_tok.parse::<f64>(),
            );
            match parsed {
                (Ok(i), Ok(j), Ok(cost)) => graph.set_cost(i, j, cost),
                _ => break,
            }
        }

        Ok(graph)
    }

    /// Format the cost matrix as bracketed rows, one row per node.
    pub fn format_matrix(&self) -> String {
        let mut out = String::new();
        for i in 1..=self.num_nodes {
            out.push('[');
            for j in 1..=self.num_nodes {
                let _ = write!(out, "{} ", self.costs[i][j]);
            }
            out.push_str("]\n");
        }
        out
    }
}
