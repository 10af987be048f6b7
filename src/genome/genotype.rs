use core::fmt;
use std::collections::BTreeMap;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Allele, InvalidGenotype, ParseGenomeError};

/// The unordered pair of alleles a diploid individual carries at one locus.
///
/// The pair is stored in canonical (sorted) order, so `Genotype::new(x, y)`
/// and `Genotype::new(y, x)` are equal and hash identically. A `Genotype` is
/// an immutable value: mating produces a fresh one, nothing is mutated in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Genotype {
    /// The allele pair, sorted ascending by allele code
    alleles: [Allele; 2],
}

impl Genotype {
    /// Create a genotype from two alleles, canonicalizing their order.
    pub fn new(a: Allele, b: Allele) -> Self {
        if b < a {
            Self { alleles: [b, a] }
        } else {
            Self { alleles: [a, b] }
        }
    }

    /// Create a genotype from a slice of alleles.
    ///
    /// # Errors
    /// Returns `InvalidGenotype` unless the slice holds exactly two alleles.
    pub fn from_slice(alleles: &[Allele]) -> Result<Self, InvalidGenotype> {
        match alleles {
            [a, b] => Ok(Self::new(*a, *b)),
            other => Err(InvalidGenotype(other.len())),
        }
    }

    /// Borrow the canonical allele pair.
    #[inline]
    pub fn alleles(&self) -> &[Allele; 2] {
        &self.alleles
    }

    /// Return `true` if both alleles are the same variant.
    #[inline]
    pub fn is_homozygous(&self) -> bool {
        self.alleles[0] == self.alleles[1]
    }

    /// Return how many of the two slots each distinct allele occupies.
    ///
    /// A homozygote maps its single allele to 2; a heterozygote maps each of
    /// its two alleles to 1.
    pub fn allele_counts(&self) -> BTreeMap<Allele, u64> {
        let mut counts = BTreeMap::new();
        for &allele in &self.alleles {
            *counts.entry(allele).or_insert(0) += 1;
        }
        counts
    }

    /// Mate this genotype with another, producing one offspring genotype.
    ///
    /// One allele is chosen uniformly at random from each parent,
    /// independently, and the resulting pair is canonicalized. For parents
    /// `(a1, a2)` and `(a3, a4)` this yields each of the four classical
    /// Mendelian outcomes `(a1, a3)`, `(a1, a4)`, `(a2, a3)`, `(a2, a4)`
    /// with probability 1/4.
    pub fn mate<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> Self {
        let from_self = if rng.random::<f64>() < 0.5 {
            self.alleles[0]
        } else {
            self.alleles[1]
        };
        let from_other = if rng.random::<f64>() < 0.5 {
            other.alleles[0]
        } else {
            other.alleles[1]
        };
        Self::new(from_self, from_other)
    }
}

impl From<(Allele, Allele)> for Genotype {
    fn from((a, b): (Allele, Allele)) -> Self {
        Self::new(a, b)
    }
}

impl From<(u32, u32)> for Genotype {
    fn from((a, b): (u32, u32)) -> Self {
        Self::new(Allele::new(a), Allele::new(b))
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.alleles[0], self.alleles[1])
    }
}

impl FromStr for Genotype {
    type Err = ParseGenomeError;

    /// Parse a genotype from the form `a/b`, e.g. `"1/2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseGenomeError::InvalidToken(s.to_string());
        let (left, right) = s.split_once('/').ok_or_else(bad)?;
        let a = left.parse::<Allele>().map_err(|_| bad())?;
        let b = right.parse::<Allele>().map_err(|_| bad())?;
        Ok(Self::new(a, b))
    }
}
