//! Shared search state and the wall-clock deadline.

use crate::tour::Tour;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// State shared by both search phases: the best tour found so far, the trial
/// counter, and the random generator driving the search.
///
/// The best cost starts at infinity and only ever decreases; a candidate
/// replaces the best tour only when it is strictly cheaper.
pub struct SearchState {
    /// The cheapest complete tour found so far, if any.
    pub best: Option<Tour>,
    /// The cost of the best tour, `f64::INFINITY` until one is accepted.
    pub best_cost: f64,
    /// Number of trials evaluated across both phases.
    pub trials: u64,
    /// The generator used for all random draws in the search.
    pub rng: ChaCha8Rng,
}

impl SearchState {
    /// Create a fresh search state. A fixed seed makes the whole search
    /// deterministic; `None` seeds from the system entropy source.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        SearchState {
            best: None,
            best_cost: f64::INFINITY,
            trials: 0,
            rng,
        }
    }

    /// Count one evaluated trial.
    pub fn record_trial(&mut self) {
        self.trials += 1;
    }

    /// Accept a candidate tour if it is strictly cheaper than the current
    /// best. Returns whether the candidate was accepted.
    pub fn accept(&mut self, nodes: Vec<usize>, cost: f64) -> bool {
        if cost < self.best_cost {
            self.best_cost = cost;
            self.best = Some(Tour::new(nodes, cost));
            return true;
        }
        false
    }

    /// Get the best tour found so far.
    pub fn best_tour(&self) -> Option<&Tour> {
        self.best.as_ref()
    }
}

/// A fixed wall-clock cutoff shared by both search phases.
///
/// The start instant is captured once, before any work; both phases consult
/// `reached` at the top of every trial loop, so a trial in progress is never
/// interrupted and no phase overruns the limit by more than one trial.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
}

impl Deadline {
    /// Create a deadline starting now.
    pub fn after(limit: Duration) -> Self {
        Deadline {
            start: Instant::now(),
            limit,
        }
    }

    /// Create a deadline from an explicit start instant, so tests can place
    /// the cutoff anywhere without sleeping.
    pub fn from_start(start: Instant, limit: Duration) -> Self {
        Deadline { start, limit }
    }

    /// Check whether the time limit has been used up.
    pub fn reached(&self) -> bool {
        self.start.elapsed() >= self.limit
    }

    /// Time elapsed since the deadline's start instant.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
