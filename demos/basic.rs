//! Basic example of using the greedy TSP library.

use greedy_tsp::config::Config;
use greedy_tsp::graph::Graph;
use greedy_tsp::TspAlgorithm;
use std::env;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load a graph from the command line, or fall back to a small built-in
    // instance.
    let args: Vec<String> = env::args().collect();
    let graph = if args.len() > 1 {
        println!("Loading graph from: {}", &args[1]);
        Graph::from_file(&args[1])?
    } else {
        println!("Using the built-in 8-node ring instance");
        ring_instance(8)
    };
    println!("Loaded graph with {} nodes", graph.num_nodes());

    // A short, reproducible run.
    let config = Config::new()
        .with_time_limit(Duration::from_secs(2))
        .with_seed(42);

    println!("Starting search (time limit: 2s)");
    let mut algorithm = TspAlgorithm::new(graph, config);
    let best = algorithm.run().cloned();

    match best {
        Some(tour) => println!("Best tour: {:?}", tour),
        None => println!("No tour completed within the budget"),
    }

    let report = algorithm.report();
    println!("{}", report.format());
    println!("Report as JSON: {}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Build a ring of `n` nodes where neighboring ids are cheap to connect and
/// everything else costs 10.
fn ring_instance(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 1..=n {
        for j in (i + 1)..=n {
            let cost = if j == i + 1 || (i == 1 && j == n) {
                1.0
            } else {
                10.0
            };
            edges.push((i, j, cost));
        }
    }
    Graph::with_edges(n, &edges)
}
