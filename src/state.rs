use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use crate::config::ConfigError;
use crate::partition::Partition;
use crate::types::Symbol;

/// An ordered sequence of `M` symbol slots.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct State {
    symbols: Vec<Symbol>,
}

impl State {
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// The arrangement `1, 2, ..., N` with separators at the partition's block boundaries.
    pub fn identity(partition: &Partition) -> Self {
        let labels: Vec<u32> = (1..=partition.num_labels() as u32).collect();
        Self::place(partition, &labels)
    }

    /// Lays out the given label order over the partition's blocks, inserting
    /// separators as the layout requires.
    ///
    /// Every label `1..=N` must appear exactly once.
    pub fn from_labels(partition: &Partition, labels: &[u32]) -> Result<Self, ConfigError> {
        let n = partition.num_labels();
        if labels.len() != n {
            return Err(ConfigError::StartLength {
                expected: n,
                actual: labels.len(),
            });
        }
        let mut seen = vec![false; n];
        for &label in labels {
            if label == 0 || label as usize > n {
                return Err(ConfigError::LabelOutOfRange { label, n });
            }
            if std::mem::replace(&mut seen[label as usize - 1], true) {
                return Err(ConfigError::DuplicateLabel(label));
            }
        }
        Ok(Self::place(partition, labels))
    }

    fn place(partition: &Partition, labels: &[u32]) -> Self {
        let mut symbols = vec![Symbol::SEPARATOR; partition.width()];
        for (slot, &label) in partition.spans().flatten().zip(labels) {
            symbols[slot] = Symbol::label(label);
        }
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub(crate) fn symbols_mut(&mut self) -> &mut [Symbol] {
        &mut self.symbols
    }

    /// Labels in slot order, separators skipped.
    pub fn labels(&self) -> impl Iterator<Item = u32> + '_ {
        self.symbols.iter().filter_map(|s| s.as_label())
    }

    /// Returns the slot currently holding `label`.
    pub fn position_of(&self, label: u32) -> Option<usize> {
        self.symbols.iter().position(|s| s.as_label() == Some(label))
    }

    /// Exchanges the slots holding labels `a` and `b`.
    ///
    /// Applying the same swap twice restores the original state.
    pub fn swap_labels(&mut self, a: u32, b: u32) {
        let i = self.position_of(a);
        let j = self.position_of(b);
        if let (Some(i), Some(j)) = (i, j) {
            self.symbols.swap(i, j);
        }
    }
}

impl Index<usize> for State {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}

/// Cycle notation: each block is parenthesized, e.g. `(1, 3, 2)(4, 5)(6)`.
impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        for symbol in &self.symbols {
            if symbol.is_separator() {
                write!(f, ")(")?;
                first = true;
            } else {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}", symbol)?;
                first = false;
            }
        }
        write!(f, ")")
    }
}
