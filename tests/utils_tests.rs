//! Unit tests for solution output and run reporting.

use greedy_tsp::graph::Graph;
use greedy_tsp::tour::Tour;
use greedy_tsp::utils::{save_tour, SearchReport, ValidationReport};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// The classic 4-node instance with optimal tour cost 80.
fn create_test_graph() -> Graph {
    Graph::with_edges(
        4,
        &[
            (1, 2, 10.0),
            (1, 3, 15.0),
            (1, 4, 20.0),
            (2, 3, 35.0),
            (2, 4, 25.0),
            (3, 4, 30.0),
        ],
    )
}

/// Unique temp file path for this test process.
fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("greedy_tsp_{}_{}", std::process::id(), name));
    path
}

#[test]
fn test_save_tour_format() {
    let path = temp_path("solution_format.txt");
    save_tour(&[1, 2, 4, 3, 1], &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(contents, "1, 2, 4, 3, 1\n");
}

#[test]
fn test_save_tour_empty() {
    let path = temp_path("solution_empty.txt");
    save_tour(&[], &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    // A degenerate run still leaves a well-formed (empty) file
    assert_eq!(contents, "");
}

#[test]
fn test_save_tour_unwritable_path() {
    let result = save_tour(&[1, 2, 1], "/nonexistent/greedy_tsp_out.txt");
    assert!(result.is_err());
}

#[test]
fn test_search_report_format() {
    let report = SearchReport {
        trials: 20000,
        min_cost: 80.0,
        run_time: Duration::from_secs(57),
    };

    let formatted = report.format();
    assert_eq!(formatted, "Cycles evaluated: 2e4\nMin cost: 80.00");
}

#[test]
fn test_search_report_without_a_tour() {
    let report = SearchReport {
        trials: 0,
        min_cost: f64::INFINITY,
        run_time: Duration::ZERO,
    };

    let formatted = report.format();
    assert!(formatted.contains("Cycles evaluated: 0e0"));
    assert!(formatted.contains("Min cost: inf"));
}

#[test]
fn test_search_report_json_round_trip() {
    let report = SearchReport {
        trials: 12,
        min_cost: 80.0,
        run_time: Duration::from_millis(1500),
    };

    let json = serde_json::to_string(&report).unwrap();
    let parsed: SearchReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.trials, report.trials);
    assert_eq!(parsed.min_cost, report.min_cost);
    assert_eq!(parsed.run_time, report.run_time);
}

#[test]
fn test_validation_report_accepts_good_tour() {
    let graph = create_test_graph();
    let nodes = vec![1, 2, 4, 3, 1];
    let cost = Tour::cycle_cost(&nodes, &graph);
    let tour = Tour::new(nodes, cost);

    let validation = ValidationReport::check(&tour, &graph, cost);

    assert!(validation.complete_cycle);
    assert!(validation.cost_matches);
    assert!(validation.valid_tour);
    assert_eq!(validation.recomputed_cost, 80.0);
}

#[test]
fn test_validation_report_flags_cost_mismatch() {
    let graph = create_test_graph();
    let nodes = vec![1, 2, 4, 3, 1];
    let cost = Tour::cycle_cost(&nodes, &graph);
    let tour = Tour::new(nodes, cost);

    // A stale recorded minimum is reported, not fixed
    let validation = ValidationReport::check(&tour, &graph, cost + 1.0);

    assert!(validation.complete_cycle);
    assert!(!validation.cost_matches);
    assert!(validation.valid_tour);
}

#[test]
fn test_validation_report_flags_broken_tour() {
    let graph = create_test_graph();

    // Closed, but node 3 is missing and node 2 repeats
    let tour = Tour::new(vec![1, 2, 4, 2, 1], 0.0);
    let validation = ValidationReport::check(&tour, &graph, 0.0);

    assert!(validation.complete_cycle);
    assert!(!validation.valid_tour);
}

#[test]
fn test_validation_report_format() {
    let graph = create_test_graph();
    let nodes = vec![1, 2, 4, 3, 1];
    let cost = Tour::cycle_cost(&nodes, &graph);
    let tour = Tour::new(nodes, cost);

    let good = ValidationReport::check(&tour, &graph, cost).format();
    assert!(good.contains("Complete cycle: true"));
    assert!(good.contains("80.00 (matches)"));
    assert!(good.contains("Valid TSP tour: true"));

    let bad = ValidationReport::check(&tour, &graph, cost + 1.0).format();
    assert!(bad.contains("(doesn't match)"));
}
