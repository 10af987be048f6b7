//! Simulation engine for random-mating runs.
//!
//! This module owns the generation loop: it wires a population to a seedable
//! RNG and advances it for a configured number of generations, optionally
//! across several independent trials in parallel.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::base::PopulationError;
use crate::simulation::{Population, SimulationConfig};

/// Main simulation engine.
///
/// Owns the evolving population and the random stream it draws from. The RNG
/// is seeded from `SimulationConfig::seed` when given, so runs with the same
/// founders, config, and seed reproduce the same populations.
#[derive(Debug)]
pub struct Simulation {
    /// Current population
    population: Population,
    /// Simulation configuration
    config: SimulationConfig,
    /// Random number generator (Xoshiro256++ for speed)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a new simulation over an initial population.
    pub fn new(initial: Population, config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        Self {
            population: initial,
            config,
            rng,
        }
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get mutable access to the population.
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    /// Get the simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Advance the simulation by one generation.
    pub fn step(&mut self) -> Result<(), PopulationError> {
        self.population.mate(&mut self.rng)
    }

    /// Run for the configured number of generations.
    pub fn run(&mut self) -> Result<(), PopulationError> {
        self.run_for(self.config.generations)
    }

    /// Run for a specific number of generations.
    pub fn run_for(&mut self, generations: usize) -> Result<(), PopulationError> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }
}

/// Run independent trials of the same initial population in parallel.
///
/// Each trial gets its own copy of `initial` and its own RNG, seeded from a
/// seed vector pre-drawn from a master RNG (itself seeded from
/// `config.seed`). Trials are therefore independent streams, and the whole
/// set is reproducible for a given seed regardless of thread scheduling.
///
/// Returns the final population of each trial, in trial order.
pub fn run_trials(
    initial: &Population,
    config: &SimulationConfig,
) -> Result<Vec<Population>, PopulationError> {
    let mut master = match config.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    };
    let seeds: Vec<u64> = (0..config.trials).map(|_| master.random()).collect();

    seeds
        .par_iter()
        .map(|&seed| {
            let mut population = initial.clone();
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            for _ in 0..config.generations {
                population.mate(&mut rng)?;
            }
            Ok(population)
        })
        .collect()
}
