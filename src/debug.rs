//! Debug utilities for inspecting the trie structure.
//!
//! These are primarily useful in tests and during development.

use std::fmt::Write;

use crate::trie::{Node, VisitedTrie};
use crate::types::Symbol;

impl VisitedTrie {
    /// Renders the trie as an indented tree, one node per line.
    ///
    /// The root is printed as `*`. Every other line shows the symbol on the
    /// edge leading to the node; leaves also show their level:
    ///
    /// ```text
    /// *
    ///     1
    ///         2
    ///             3 @ 0
    ///         3
    ///             2 @ 1
    /// ```
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0, None, 0);
        out
    }

    fn write_tree(&self, out: &mut String, node: u32, symbol: Option<Symbol>, depth: usize) {
        let indent = "    ".repeat(depth);
        let name = symbol.map_or("*".to_string(), |s| s.to_string());

        match self.node(node) {
            Node::Leaf(level) => {
                writeln!(out, "{}{} @ {}", indent, name, level).unwrap();
            }
            Node::Internal(children) => {
                writeln!(out, "{}{}", indent, name).unwrap();
                for (slot, &child) in children.iter().enumerate() {
                    if child != 0 {
                        let symbol = Symbol::from_slot(slot, self.num_labels());
                        self.write_tree(out, child, Some(symbol), depth + 1);
                    }
                }
            }
        }
    }
}
