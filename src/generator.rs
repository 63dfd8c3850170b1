//! Generator operations: label transpositions.
//!
//! Every generator exchanges the slots holding two labels, so each one is an
//! involution and the reachability relation is symmetric.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::ConfigError;
use crate::state::State;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GeneratorSet {
    /// Swap labels `i` and `i + 1`, for `i` in `1..N`.
    #[default]
    Adjacent,
    /// Swap labels `i` and `j`, for every pair `i < j`.
    AllPairs,
}

impl GeneratorSet {
    /// Label pairs `(i, j)` with `i < j`, in a fixed order.
    pub fn pairs(self, n: usize) -> Vec<(u32, u32)> {
        let n = n as u32;
        match self {
            GeneratorSet::Adjacent => (1..n).map(|i| (i, i + 1)).collect(),
            GeneratorSet::AllPairs => (1..=n)
                .flat_map(|i| (i + 1..=n).map(move |j| (i, j)))
                .collect(),
        }
    }

    /// Number of generators for `n` labels.
    pub fn len(self, n: usize) -> usize {
        match self {
            GeneratorSet::Adjacent => n.saturating_sub(1),
            GeneratorSet::AllPairs => n * n.saturating_sub(1) / 2,
        }
    }

    /// Applies the generator swapping `pair` to a copy of `state`.
    pub fn apply(state: &State, pair: (u32, u32)) -> State {
        let mut next = state.clone();
        next.swap_labels(pair.0, pair.1);
        next
    }
}

impl Display for GeneratorSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorSet::Adjacent => write!(f, "adjacent"),
            GeneratorSet::AllPairs => write!(f, "pairs"),
        }
    }
}

impl FromStr for GeneratorSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adjacent" | "adj" => Ok(GeneratorSet::Adjacent),
            "pairs" | "all-pairs" | "all" => Ok(GeneratorSet::AllPairs),
            other => Err(ConfigError::UnknownGenerators(other.to_string())),
        }
    }
}
