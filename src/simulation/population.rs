//! Population state and the random-mating step.
//!
//! A population is a multiset of genomes: a map from each distinct genome to
//! the number of individuals carrying it. The key set grows as mating
//! produces genomes not seen before.

use std::collections::BTreeMap;

use rand::Rng;

use crate::base::{Allele, EmptyDistribution, EmptyPopulation, InvalidLocus, LocusMismatch, PopulationError};
use crate::genome::Genome;
use crate::simulation::WeightedSampler;

/// A population of diploid individuals, stored as genome counts.
///
/// The counts map is a `BTreeMap` so that iteration order — and therefore
/// the sampled parent stream for a given seed — is deterministic across
/// runs. All genomes in one population carry the same number of loci; the
/// constructor enforces this and `mate` preserves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    /// Individuals per genome; every stored count is positive
    counts: BTreeMap<Genome, u64>,
    /// Locus count shared by all genomes held (0 for an empty population)
    num_loci: usize,
    /// Generation counter, incremented by each `mate` call
    generation: usize,
}

impl Population {
    /// Create an empty population.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            num_loci: 0,
            generation: 0,
        }
    }

    /// Create a population from `(genome, count)` pairs.
    ///
    /// Zero-count entries are dropped; counts for duplicate genomes are
    /// accumulated.
    ///
    /// # Errors
    /// Returns `LocusMismatch` if the genomes do not all share one locus
    /// count.
    pub fn from_counts<I>(pairs: I) -> Result<Self, LocusMismatch>
    where
        I: IntoIterator<Item = (Genome, u64)>,
    {
        let mut counts: BTreeMap<Genome, u64> = BTreeMap::new();
        let mut num_loci: Option<usize> = None;

        for (genome, count) in pairs {
            match num_loci {
                None => num_loci = Some(genome.len()),
                Some(expected) if expected != genome.len() => {
                    return Err(LocusMismatch {
                        left: expected,
                        right: genome.len(),
                    });
                }
                Some(_) => {}
            }
            if count > 0 {
                *counts.entry(genome).or_insert(0) += count;
            }
        }

        Ok(Self {
            counts,
            num_loci: num_loci.unwrap_or(0),
            generation: 0,
        })
    }

    /// Total number of individuals.
    pub fn population(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Return `true` if the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct genomes currently present.
    pub fn num_genomes(&self) -> usize {
        self.counts.len()
    }

    /// Locus count shared by all genomes held (0 for an empty population).
    pub fn num_loci(&self) -> usize {
        self.num_loci
    }

    /// Number of `mate` calls applied so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// How many individuals carry `genome`.
    pub fn count(&self, genome: &Genome) -> u64 {
        self.counts.get(genome).copied().unwrap_or(0)
    }

    /// Borrow the counts map.
    pub fn counts(&self) -> &BTreeMap<Genome, u64> {
        &self.counts
    }

    /// Each genome's share of the total population.
    ///
    /// # Errors
    /// Returns `EmptyPopulation` if the total population is 0.
    pub fn genome_frequencies(&self) -> Result<BTreeMap<Genome, f64>, EmptyPopulation> {
        let total = self.population();
        if total == 0 {
            return Err(EmptyPopulation);
        }
        Ok(self
            .counts
            .iter()
            .map(|(genome, &count)| (genome.clone(), count as f64 / total as f64))
            .collect())
    }

    /// The distribution of alleles at `locus` across the whole population.
    ///
    /// Each genome contributes its per-locus slot counts (1 or 2 per allele)
    /// multiplied by its population count; a diploid population of N
    /// individuals contributes 2N allele slots in total.
    ///
    /// # Errors
    /// Returns `InvalidLocus` if `locus` is out of range for the genomes
    /// held.
    pub fn allele_counts(&self, locus: usize) -> Result<BTreeMap<Allele, u64>, InvalidLocus> {
        if locus >= self.num_loci {
            return Err(InvalidLocus {
                locus,
                num_loci: self.num_loci,
            });
        }

        let mut totals: BTreeMap<Allele, u64> = BTreeMap::new();
        for (genome, &count) in &self.counts {
            if let Some(genotype) = genome.get(locus) {
                for (allele, slots) in genotype.allele_counts() {
                    *totals.entry(allele).or_insert(0) += slots * count;
                }
            }
        }
        Ok(totals)
    }

    /// The allele distribution at `locus`, normalized to frequencies.
    ///
    /// # Errors
    /// Returns `InvalidLocus` if `locus` is out of range, or
    /// `EmptyPopulation` if the total allele count at the locus is 0.
    pub fn allele_frequencies(&self, locus: usize) -> Result<BTreeMap<Allele, f64>, PopulationError> {
        let counts = self.allele_counts(locus)?;
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(EmptyPopulation.into());
        }
        Ok(counts
            .into_iter()
            .map(|(allele, count)| (allele, count as f64 / total as f64))
            .collect())
    }

    /// Advance the population by one generation of random mating, in place.
    ///
    /// A snapshot of the current counts becomes the pairing pool. While at
    /// least two individuals remain in the pool, two parents are drawn
    /// without replacement (each draw weighted by the pool's remaining
    /// counts), their offspring genome is computed, and the offspring is
    /// added to the live counts map. A single leftover individual is left
    /// unpaired and contributes nothing.
    ///
    /// The parent generation is retained: offspring accumulate alongside it,
    /// so a population of size N grows to N + floor(N/2). Populations of
    /// size 0 or 1 are left unchanged apart from the generation counter.
    ///
    /// # Errors
    /// Propagates failures from the internal sampling and per-pair mating
    /// operations; neither can occur for a population whose genomes share
    /// one locus count, which construction guarantees.
    pub fn mate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PopulationError> {
        let mut pool = self.counts.clone();
        let mut remaining = self.population();

        while remaining >= 2 {
            let first = Self::draw(&pool, rng)?;
            Self::remove_one(&mut pool, &first);
            remaining -= 1;

            let second = Self::draw(&pool, rng)?;
            Self::remove_one(&mut pool, &second);
            remaining -= 1;

            let offspring = first.mate(&second, rng)?;
            *self.counts.entry(offspring).or_insert(0) += 1;
        }

        self.generation += 1;
        Ok(())
    }

    /// Draw one genome from the pool, weighted by its remaining counts.
    fn draw<R: Rng + ?Sized>(
        pool: &BTreeMap<Genome, u64>,
        rng: &mut R,
    ) -> Result<Genome, EmptyDistribution> {
        let sampler = WeightedSampler::new(pool.iter().map(|(genome, &count)| (genome, count)))?;
        Ok((*sampler.sample(rng)).clone())
    }

    /// Remove one individual carrying `genome` from the pool.
    fn remove_one(pool: &mut BTreeMap<Genome, u64>, genome: &Genome) {
        if let Some(count) = pool.get_mut(genome) {
            *count -= 1;
            if *count == 0 {
                pool.remove(genome);
            }
        }
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::new()
    }
}
