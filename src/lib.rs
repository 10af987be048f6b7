//! Panmixia: a forward-in-time simulator of random mating in diploid populations.
//!
//! This library provides value types for multi-locus diploid genetics
//! (alleles, genotypes, genomes), a population represented as genome counts,
//! and the weighted random-pairing engine that advances the population one
//! generation at a time.

pub mod base;
pub mod genome;
pub mod prelude;
pub mod simulation;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when setting up founders or running simulations.
pub use base::Allele;
pub use genome::{Genome, Genotype};
pub use simulation::{Population, Simulation, SimulationConfig, WeightedSampler};
