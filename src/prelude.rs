//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use panmixia::prelude::*;
//!
//! let founders = Population::from_counts(vec![
//!     (Genome::from_pairs([(1, 1)]), 23),
//!     (Genome::from_pairs([(2, 2)]), 11),
//! ])
//! .unwrap();
//! assert_eq!(founders.population(), 34);
//! ```

pub use crate::base::{
    Allele, EmptyDistribution, EmptyPopulation, InvalidGenotype, InvalidLocus, LocusMismatch,
    ParseGenomeError, PopulationError,
};
pub use crate::genome::{Genome, Genotype};
pub use crate::simulation::{run_trials, Population, Simulation, SimulationConfig, WeightedSampler};
