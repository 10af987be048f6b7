use core::fmt;
use std::collections::BTreeMap;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Allele, LocusMismatch, ParseGenomeError};
use crate::genome::Genotype;

/// The ordered collection of genotypes across all loci for one individual.
///
/// Locus identity is positional: index `i` refers to the same biological
/// locus in every genome being compared or mated. Within a single simulation
/// all genomes carry the same number of loci. Like `Genotype`, a `Genome` is
/// an immutable value with structural equality, ordering, and hashing, so it
/// can key the population's counts map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Genome {
    /// Genotypes in locus order
    genotypes: Vec<Genotype>,
}

impl Genome {
    /// Create a genome from genotypes in locus order.
    pub fn new(genotypes: Vec<Genotype>) -> Self {
        Self { genotypes }
    }

    /// Create a genome from raw allele-code pairs, one per locus.
    ///
    /// Convenience for founders: `Genome::from_pairs([(1, 1), (2, 2)])`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        Self {
            genotypes: pairs.into_iter().map(Genotype::from).collect(),
        }
    }

    /// Return the number of loci in this genome.
    #[inline]
    pub fn len(&self) -> usize {
        self.genotypes.len()
    }

    /// Return `true` if this genome tracks no loci.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genotypes.is_empty()
    }

    /// Get the genotype at `locus`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, locus: usize) -> Option<&Genotype> {
        self.genotypes.get(locus)
    }

    /// Borrow the slice of genotypes.
    #[inline]
    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }

    /// Iterate over genotypes in locus order.
    pub fn iter(&self) -> impl Iterator<Item = &Genotype> {
        self.genotypes.iter()
    }

    /// Return the per-locus allele distributions, in locus order.
    pub fn allele_counts(&self) -> Vec<BTreeMap<Allele, u64>> {
        self.genotypes.iter().map(Genotype::allele_counts).collect()
    }

    /// Mate this genome with another, producing one offspring genome.
    ///
    /// The offspring's genotype at locus `i` is the Mendelian cross of the
    /// parents' genotypes at locus `i`; each locus draw is independent of
    /// every other locus (no linkage).
    ///
    /// # Errors
    /// Returns `LocusMismatch` if the genomes have different locus counts.
    pub fn mate<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> Result<Self, LocusMismatch> {
        if self.len() != other.len() {
            return Err(LocusMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let genotypes = self
            .genotypes
            .iter()
            .zip(other.genotypes.iter())
            .map(|(g1, g2)| g1.mate(g2, rng))
            .collect();

        Ok(Self { genotypes })
    }
}

impl From<Vec<Genotype>> for Genome {
    fn from(genotypes: Vec<Genotype>) -> Self {
        Self::new(genotypes)
    }
}

impl IntoIterator for Genome {
    type Item = Genotype;
    type IntoIter = std::vec::IntoIter<Genotype>;

    fn into_iter(self) -> Self::IntoIter {
        self.genotypes.into_iter()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, genotype) in self.genotypes.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{genotype}")?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = ParseGenomeError;

    /// Parse a genome from comma-separated genotype tokens, e.g. `"1/1,2/3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseGenomeError::Empty);
        }
        let genotypes = trimmed
            .split(',')
            .map(|tok| tok.trim().parse::<Genotype>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { genotypes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn genome(pairs: &[(u32, u32)]) -> Genome {
        Genome::from_pairs(pairs.iter().copied())
    }

    // ===== Construction Tests =====

    #[test]
    fn test_genome_from_pairs() {
        let g = genome(&[(1, 1), (3, 2)]);
        assert_eq!(g.len(), 2);
        assert_eq!(g.get(0), Some(&Genotype::from((1, 1))));
        // Canonicalized per locus
        assert_eq!(g.get(1), Some(&Genotype::from((2, 3))));
        assert_eq!(g.get(2), None);
    }

    #[test]
    fn test_genome_equality_is_structural() {
        assert_eq!(genome(&[(1, 2)]), genome(&[(2, 1)]));
        assert_ne!(genome(&[(1, 2)]), genome(&[(1, 2), (1, 2)]));
    }

    #[test]
    fn test_genome_empty() {
        let g = Genome::new(Vec::new());
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
    }

    // ===== Allele Count Tests =====

    #[test]
    fn test_genome_allele_counts() {
        let g = genome(&[(1, 1), (1, 2)]);
        let counts = g.allele_counts();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0][&Allele::new(1)], 2);
        assert_eq!(counts[1][&Allele::new(1)], 1);
        assert_eq!(counts[1][&Allele::new(2)], 1);
    }

    // ===== Mating Tests =====

    #[test]
    fn test_genome_mate_length_preserved() {
        let mut rng = StdRng::seed_from_u64(42);
        let g1 = genome(&[(1, 2), (3, 4), (5, 6)]);
        let g2 = genome(&[(7, 8), (9, 10), (11, 12)]);

        let child = g1.mate(&g2, &mut rng).unwrap();
        assert_eq!(child.len(), 3);
    }

    #[test]
    fn test_genome_mate_alleles_per_locus() {
        let mut rng = StdRng::seed_from_u64(42);
        let g1 = genome(&[(1, 2), (5, 6)]);
        let g2 = genome(&[(3, 4), (7, 8)]);

        for _ in 0..50 {
            let child = g1.mate(&g2, &mut rng).unwrap();
            let [a, b] = *child.get(0).unwrap().alleles();
            assert!(a.code() <= 2 && (3..=4).contains(&b.code()));
            let [c, d] = *child.get(1).unwrap().alleles();
            assert!((5..=6).contains(&c.code()) && (7..=8).contains(&d.code()));
        }
    }

    #[test]
    fn test_genome_mate_locus_mismatch() {
        let mut rng = StdRng::seed_from_u64(42);
        let g1 = genome(&[(1, 1)]);
        let g2 = genome(&[(1, 1), (2, 2)]);

        let err = g1.mate(&g2, &mut rng).unwrap_err();
        assert_eq!(err, LocusMismatch { left: 1, right: 2 });
    }

    #[test]
    fn test_genome_mate_loci_independent() {
        // Two-locus heterozygote cross: track which allele the first parent
        // contributed at each locus and check the picks are uncorrelated.
        let mut rng = StdRng::seed_from_u64(13);
        let g1 = genome(&[(1, 2), (1, 2)]);
        let g2 = genome(&[(3, 4), (3, 4)]);

        let trials = 4000;
        let (mut x1, mut y1, mut both) = (0u64, 0u64, 0u64);
        for _ in 0..trials {
            let child = g1.mate(&g2, &mut rng).unwrap();
            let x = child.get(0).unwrap().alleles()[0] == Allele::new(1);
            let y = child.get(1).unwrap().alleles()[0] == Allele::new(1);
            x1 += x as u64;
            y1 += y as u64;
            both += (x && y) as u64;
        }

        let px = x1 as f64 / trials as f64;
        let py = y1 as f64 / trials as f64;
        let pxy = both as f64 / trials as f64;
        assert!((pxy - px * py).abs() < 0.05, "loci correlated: {pxy} vs {}", px * py);
    }

    // ===== Display / Parse Tests =====

    #[test]
    fn test_genome_display() {
        assert_eq!(genome(&[(1, 1), (3, 2)]).to_string(), "1/1,2/3");
    }

    #[test]
    fn test_genome_from_str() {
        let g = "1/1, 2/3".parse::<Genome>().unwrap();
        assert_eq!(g, genome(&[(1, 1), (2, 3)]));

        assert_eq!("".parse::<Genome>(), Err(ParseGenomeError::Empty));
        assert!("1/1,xyz".parse::<Genome>().is_err());
    }

    #[test]
    fn test_genome_roundtrip() {
        let g = genome(&[(4, 1), (2, 2)]);
        assert_eq!(g.to_string().parse::<Genome>().unwrap(), g);
    }
}
