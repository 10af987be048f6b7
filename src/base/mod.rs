//! Atomic value types and error definitions.

mod allele;
pub mod errors;

pub use allele::Allele;
pub use errors::{
    EmptyDistribution, EmptyPopulation, InvalidGenotype, InvalidLocus, LocusMismatch,
    ParseGenomeError, PopulationError,
};
