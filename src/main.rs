//! Command-line entry point for the greedy TSP heuristic.

use greedy_tsp::config::Config;
use greedy_tsp::graph::Graph;
use greedy_tsp::search::Deadline;
use greedy_tsp::utils::{save_tour, ValidationReport, SOLUTION_FILE};
use greedy_tsp::TspAlgorithm;

use log::debug;
use std::env;
use std::process;
use std::time::Instant;

fn main() {
    // The clock starts before any work, parsing included.
    let started = Instant::now();

    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("Input at most one graph at a time");
        process::exit(1);
    }

    let config = Config::default();
    let deadline = Deadline::from_start(started, config.time_limit);

    let graph = match Graph::from_file(&args[1]) {
        Ok(graph) => graph,
        Err(_) => {
            println!("Invalid file");
            process::exit(1);
        }
    };
    debug!("cost matrix:\n{}", graph.format_matrix());

    let mut algorithm = TspAlgorithm::new(graph, config).with_deadline(deadline);
    let best = algorithm.run().cloned();

    let nodes = best.as_ref().map(|tour| tour.nodes.as_slice()).unwrap_or(&[]);
    if save_tour(nodes, SOLUTION_FILE).is_err() {
        println!("Invalid output file");
        process::exit(1);
    }

    println!("{}", algorithm.report().format());

    if let Some(tour) = best {
        let validation = ValidationReport::check(&tour, &algorithm.graph, algorithm.search.best_cost);
        println!();
        println!("{}", validation.format());
    }
}
