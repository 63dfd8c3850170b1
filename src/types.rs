//! Symbols stored in a state slot.
//!
//! Labels are 1-indexed, reserving `0` for the block separator. A symbol maps
//! directly to a trie slot index (see [`Symbol::slot`]).
use std::fmt;

/// Level of a state: the number of generator applications on a shortest
/// path from the start state.
pub type Level = u32;

/// A single slot value of a [`State`][crate::state::State]: either a label
/// (`1..=N`) or the reserved block separator.
///
/// # Invariants
///
/// - Labels are `>= 1`
/// - `Symbol(0)` is always the separator
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// The block separator.
    pub const SEPARATOR: Symbol = Symbol(0);

    /// Creates a label symbol.
    ///
    /// # Panics
    ///
    /// Panics if `label == 0`. Labels must be 1-indexed.
    pub fn label(label: u32) -> Self {
        assert_ne!(label, 0, "Labels must be >= 1");
        Symbol(label)
    }

    pub const fn is_separator(self) -> bool {
        self.0 == 0
    }

    pub const fn is_label(self) -> bool {
        self.0 != 0
    }

    /// Returns the label value, or `None` for the separator.
    pub const fn as_label(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0)
        }
    }

    /// Return the internal representation of the symbol.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Index of this symbol in a child table of width `n + 1`.
    ///
    /// Label `i` maps to `i - 1`, the separator maps to `n`, so visiting slots
    /// in ascending order means "labels ascending, separator last".
    pub fn slot(self, n: usize) -> usize {
        if self.is_separator() {
            n
        } else {
            debug_assert!(self.0 as usize <= n, "Label {} is out of range 1..={}", self.0, n);
            self.0 as usize - 1
        }
    }

    /// Inverse of [`Symbol::slot`].
    pub fn from_slot(slot: usize, n: usize) -> Self {
        assert!(slot <= n, "Slot {} is out of range 0..={}", slot, n);
        if slot == n {
            Symbol::SEPARATOR
        } else {
            Symbol(slot as u32 + 1)
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_separator() {
            write!(f, "|")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<Symbol> for u32 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_creation() {
        let a = Symbol::label(1);
        let b = Symbol::label(2);
        assert_eq!(a.as_label(), Some(1));
        assert_eq!(b.get(), 2);
        assert!(a < b);
        assert!(a.is_label());
        assert!(!a.is_separator());
    }

    #[test]
    #[should_panic(expected = "Labels must be >= 1")]
    fn test_label_zero_panics() {
        Symbol::label(0);
    }

    #[test]
    fn test_separator() {
        assert!(Symbol::SEPARATOR.is_separator());
        assert_eq!(Symbol::SEPARATOR.as_label(), None);
        assert_eq!(Symbol::SEPARATOR.to_string(), "|");
    }

    #[test]
    fn test_slots() {
        let n = 4;
        assert_eq!(Symbol::label(1).slot(n), 0);
        assert_eq!(Symbol::label(4).slot(n), 3);
        assert_eq!(Symbol::SEPARATOR.slot(n), 4);

        for slot in 0..=n {
            assert_eq!(Symbol::from_slot(slot, n).slot(n), slot);
        }
        assert_eq!(Symbol::from_slot(4, n), Symbol::SEPARATOR);
    }
}
