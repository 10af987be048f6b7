//! Genetic value objects: diploid genotypes and multi-locus genomes.

mod genome;
mod genotype;

pub use genome::Genome;
pub use genotype::Genotype;
