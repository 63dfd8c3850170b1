//! Growth polynomial: the per-level histogram of a closure.
//!
//! Coefficient `c_i` is the number of states first discovered at level `i`.
//! The polynomial is printed as `c0 q^0 + c1 q^1 + ... + cK q^K`.

use std::fmt::{self, Display, Formatter};

use num_bigint::BigUint;

use crate::types::Level;

#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct GrowthPolynomial {
    coefficients: Vec<u64>,
}

impl GrowthPolynomial {
    pub fn from_coefficients(coefficients: Vec<u64>) -> Self {
        Self { coefficients }
    }

    /// Builds the histogram of the given levels.
    pub fn from_levels(levels: impl IntoIterator<Item = Level>) -> Self {
        let mut coefficients: Vec<u64> = Vec::new();
        for level in levels {
            let level = level as usize;
            if level >= coefficients.len() {
                coefficients.resize(level + 1, 0);
            }
            coefficients[level] += 1;
        }
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }

    /// Number of states at `level` (zero past the degree).
    pub fn coefficient(&self, level: Level) -> u64 {
        self.coefficients.get(level as usize).copied().unwrap_or(0)
    }

    /// Highest level with a non-zero count, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<Level> {
        self.coefficients.iter().rposition(|&c| c != 0).map(|d| d as Level)
    }

    /// Sum of all coefficients: the closure size.
    pub fn total(&self) -> u64 {
        self.coefficients.iter().sum()
    }

    /// Evaluates the polynomial at `q` exactly.
    ///
    /// `eval(1)` equals [`total`][Self::total].
    pub fn eval(&self, q: u64) -> BigUint {
        let q = BigUint::from(q);
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::ZERO, |acc, &c| acc * &q + BigUint::from(c))
    }
}

impl Display for GrowthPolynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{} q^{}", c, i)?;
        }
        Ok(())
    }
}
