use core::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A genetic variant at a locus.
///
/// `Allele` is a compact, Copyable value backed by a `u32` code. The code is
/// opaque to the library: two alleles are the same variant exactly when their
/// codes are equal. Ordering on the code is what gives genotypes their
/// canonical form and keeps population maps in a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Allele(u32);

impl Allele {
    /// Create an allele from its integer code.
    #[inline(always)]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Return the integer code of this allele.
    #[inline(always)]
    pub const fn code(self) -> u32 {
        self.0
    }
}

impl From<u32> for Allele {
    #[inline(always)]
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<Allele> for u32 {
    #[inline(always)]
    fn from(allele: Allele) -> u32 {
        allele.0
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Allele {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allele_new() {
        let a = Allele::new(5);
        assert_eq!(a.code(), 5);
    }

    #[test]
    fn test_allele_ordering() {
        assert!(Allele::new(1) < Allele::new(2));
        assert_eq!(Allele::new(3), Allele::new(3));
    }

    #[test]
    fn test_allele_conversions() {
        let a: Allele = 7u32.into();
        assert_eq!(u32::from(a), 7);
    }

    #[test]
    fn test_allele_display() {
        assert_eq!(Allele::new(42).to_string(), "42");
    }

    #[test]
    fn test_allele_from_str() {
        assert_eq!("12".parse::<Allele>().unwrap(), Allele::new(12));
        assert_eq!(" 3 ".parse::<Allele>().unwrap(), Allele::new(3));
        assert!("abc".parse::<Allele>().is_err());
    }
}
