use std::error;
use std::fmt;

/// Error returned when a genotype is built from something other than exactly
/// two alleles.
///
/// The inner `usize` is the number of alleles that were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGenotype(pub usize);

impl fmt::Display for InvalidGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid genotype: expected exactly 2 alleles, got {}", self.0)
    }
}

impl error::Error for InvalidGenotype {}

/// Error returned when two genomes with different locus counts are mated, or
/// when a population is built from genomes of differing locus counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocusMismatch {
    /// Locus count of the first genome
    pub left: usize,

    /// Locus count of the second genome
    pub right: usize,
}

impl fmt::Display for LocusMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locus count mismatch: {} vs {}", self.left, self.right)
    }
}

impl error::Error for LocusMismatch {}

/// Error returned when a locus index is outside the range of loci present in
/// a population's genomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLocus {
    /// The locus index that was requested
    pub locus: usize,

    /// The number of loci in the genomes held (upper bound)
    pub num_loci: usize,
}

impl fmt::Display for InvalidLocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Locus {} out of range (genomes have {} loci)",
            self.locus, self.num_loci
        )
    }
}

impl error::Error for InvalidLocus {}

/// Error returned when a frequency query is made against a population with
/// zero total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPopulation;

impl fmt::Display for EmptyPopulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot compute frequencies over an empty population")
    }
}

impl error::Error for EmptyPopulation {}

/// Error returned when a weighted sampler is built from a distribution with
/// zero total weight (including the empty distribution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDistribution;

impl fmt::Display for EmptyDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot sample from a distribution with zero total weight")
    }
}

impl error::Error for EmptyDistribution {}

/// Error type for failures when parsing a genome from its text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGenomeError {
    /// The input contained no loci.
    Empty,

    /// A locus token was not of the form `a/b` with integer allele codes.
    InvalidToken(String),
}

impl fmt::Display for ParseGenomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty genome specification"),
            Self::InvalidToken(tok) => {
                write!(f, "Invalid genotype token '{tok}' (expected 'a/b')")
            }
        }
    }
}

impl error::Error for ParseGenomeError {}

/// Errors that can occur during population operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationError {
    /// Genomes with different locus counts were combined
    LocusMismatch(LocusMismatch),
    /// A requested locus index was out of range
    InvalidLocus(InvalidLocus),
    /// A frequency query hit a zero total
    EmptyPopulation(EmptyPopulation),
    /// A sampler was built over zero total weight
    EmptyDistribution(EmptyDistribution),
}

impl fmt::Display for PopulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocusMismatch(e) => write!(f, "{e}"),
            Self::InvalidLocus(e) => write!(f, "{e}"),
            Self::EmptyPopulation(e) => write!(f, "{e}"),
            Self::EmptyDistribution(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for PopulationError {}

impl From<LocusMismatch> for PopulationError {
    fn from(e: LocusMismatch) -> Self {
        Self::LocusMismatch(e)
    }
}

impl From<InvalidLocus> for PopulationError {
    fn from(e: InvalidLocus) -> Self {
        Self::InvalidLocus(e)
    }
}

impl From<EmptyPopulation> for PopulationError {
    fn from(e: EmptyPopulation) -> Self {
        Self::EmptyPopulation(e)
    }
}

impl From<EmptyDistribution> for PopulationError {
    fn from(e: EmptyDistribution) -> Self {
        Self::EmptyDistribution(e)
    }
}
