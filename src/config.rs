//! Configuration parameters for the greedy TSP search.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wall-clock budget for the whole search. Stays under an external ~60 s
/// ceiling with room for parsing and output.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(57);

/// Configuration settings for the search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Wall-clock limit shared by both search phases
    pub time_limit: Duration,
    /// Fixed seed for the random generator; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_limit: DEFAULT_TIME_LIMIT,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the wall-clock time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Set a fixed random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
