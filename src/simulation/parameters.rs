//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// High-level simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of generations to advance per trial
    pub generations: usize,
    /// Number of independent trials to run
    pub trials: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create new simulation configuration.
    pub fn new(generations: usize, trials: usize, seed: Option<u64>) -> Self {
        Self {
            generations,
            trials,
            seed,
        }
    }
}
