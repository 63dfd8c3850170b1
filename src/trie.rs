//! Prefix tree of visited canonical states.
//!
//! The trie maps every distinct canonical state to the level at which it was
//! first inserted. Nodes live in a single arena (`Vec<Node>`) and refer to their
//! children by index:
//!
//! - index `0` is the root, which is always allocated and always internal;
//! - a child index of `0` means "no child", since the root is never a child;
//! - every other node has exactly one parent, so there are no cycles and
//!   clearing the trie is just truncating the arena.
//!
//! An internal node owns a child table of width `N + 1`: labels `1..=N` use
//! slots `0..N` and the separator uses slot `N`. Walking the slots in
//! ascending order gives a stable enumeration order.
//!
//! The trie does no canonicalization of its own: callers must insert
//! canonical states only.
//!
//! ```
//! use perm_census::partition::Partition;
//! use perm_census::state::State;
//! use perm_census::trie::VisitedTrie;
//!
//! let p = Partition::single(3).unwrap();
//! let mut trie = VisitedTrie::for_partition(&p);
//! let s = State::identity(&p);
//!
//! assert_eq!(trie.insert(&s, 0), Ok(true));
//! assert_eq!(trie.insert(&s, 5), Ok(false));
//! assert_eq!(trie.level_of(&s), Some(0));
//! assert_eq!(trie.iter().count(), 1);
//! ```

use std::fmt::{Debug, Formatter};

use log::debug;

use crate::error::{Error, Result};
use crate::partition::Partition;
use crate::state::State;
use crate::types::{Level, Symbol};

const ROOT: u32 = 0;

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Node {
    /// Child indices, one per symbol slot; `0` for an absent child.
    Internal(Box<[u32]>),
    /// Level of first discovery. Set once, never overwritten.
    Leaf(Level),
}

pub struct VisitedTrie {
    nodes: Vec<Node>,
    /// Number of labels `N`.
    num_labels: usize,
    /// Number of slots `M` in every stored state.
    width: usize,
    /// Number of leaves (distinct states).
    len: usize,
    node_limit: Option<usize>,
}

impl VisitedTrie {
    /// Creates an empty trie for states of `width` slots over labels `1..=num_labels`.
    pub fn new(num_labels: usize, width: usize) -> Self {
        assert!(num_labels > 0, "Trie needs at least one label");
        assert!(width > 0, "Trie needs states of non-zero width");

        Self {
            nodes: vec![Node::Internal(vec![0; num_labels + 1].into_boxed_slice())],
            num_labels,
            width,
            len: 0,
            node_limit: None,
        }
    }

    pub fn for_partition(partition: &Partition) -> Self {
        Self::new(partition.num_labels(), partition.width())
    }

    /// Caps the number of live nodes (root included). Inserting past the cap
    /// fails with [`Error::AllocationExhausted`].
    pub fn with_node_limit(mut self, limit: Option<usize>) -> Self {
        self.node_limit = limit;
        self
    }

    /// Number of distinct states stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn node(&self, index: u32) -> &Node {
        &self.nodes[index as usize]
    }

    fn child(&self, node: u32, symbol: Symbol) -> u32 {
        match self.node(node) {
            Node::Internal(children) => children[symbol.slot(self.num_labels)],
            Node::Leaf(_) => unreachable!("leaf {} reached before the end of a state", node),
        }
    }

    fn set_child(&mut self, node: u32, symbol: Symbol, child: u32) {
        let slot = symbol.slot(self.num_labels);
        match &mut self.nodes[node as usize] {
            Node::Internal(children) => children[slot] = child,
            Node::Leaf(_) => unreachable!("leaf {} cannot have children", node),
        }
    }

    fn exhausted(&self) -> Error {
        Error::AllocationExhausted {
            nodes: self.nodes.len(),
        }
    }

    fn alloc(&mut self, node: Node) -> Result<u32> {
        if let Some(limit) = self.node_limit {
            if self.nodes.len() >= limit {
                return Err(self.exhausted());
            }
        }
        let index = u32::try_from(self.nodes.len()).map_err(|_| self.exhausted())?;
        self.nodes.try_reserve(1).map_err(|_| self.exhausted())?;
        self.nodes.push(node);
        Ok(index)
    }

    fn new_internal(&self) -> Result<Node> {
        let mut children = Vec::new();
        children
            .try_reserve_exact(self.num_labels + 1)
            .map_err(|_| self.exhausted())?;
        children.resize(self.num_labels + 1, 0);
        Ok(Node::Internal(children.into_boxed_slice()))
    }

    /// Records `state` at `level` unless it is already present.
    ///
    /// Returns `Ok(true)` if the state is new. If the state was inserted
    /// before, returns `Ok(false)` and keeps the previously recorded level:
    /// the first discovery wins.
    ///
    /// # Panics
    ///
    /// Panics if the state width does not match the trie.
    pub fn insert(&mut self, state: &State, level: Level) -> Result<bool> {
        assert_eq!(state.len(), self.width, "State width does not match the trie");

        let last = self.width - 1;
        let mut node = ROOT;
        let mut fresh = false;

        for (depth, &symbol) in state.symbols().iter().enumerate() {
            let child = self.child(node, symbol);
            if child != 0 {
                node = child;
                continue;
            }

            let new_node = if depth == last {
                Node::Leaf(level)
            } else {
                self.new_internal()?
            };
            let index = self.alloc(new_node)?;
            self.set_child(node, symbol, index);
            node = index;
            fresh = true;
        }

        debug_assert!(matches!(self.node(node), Node::Leaf(_)));
        if fresh {
            self.len += 1;
            debug!("insert({}, level = {}) -> new", state, level);
        }
        Ok(fresh)
    }

    /// Returns the level recorded for `state`, if it was ever inserted.
    pub fn level_of(&self, state: &State) -> Option<Level> {
        if state.len() != self.width {
            return None;
        }
        let mut node = ROOT;
        for &symbol in state.symbols() {
            if symbol.as_label().is_some_and(|l| l as usize > self.num_labels) {
                return None;
            }
            node = self.child(node, symbol);
            if node == 0 {
                return None;
            }
        }
        match self.node(node) {
            Node::Leaf(level) => Some(*level),
            Node::Internal(_) => None,
        }
    }

    pub fn contains(&self, state: &State) -> bool {
        self.level_of(state).is_some()
    }

    /// Iterates over all stored `(state, level)` pairs.
    ///
    /// Each call performs an independent traversal. At every depth, labels are
    /// visited in ascending order and the separator last.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Releases every node except the root, which is reset to have no children.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes.shrink_to_fit();
        if let Node::Internal(children) = &mut self.nodes[ROOT as usize] {
            children.fill(0);
        }
        self.len = 0;
    }
}

impl Debug for VisitedTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitedTrie")
            .field("labels", &self.num_labels)
            .field("width", &self.width)
            .field("states", &self.len)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a VisitedTrie {
    type Item = (State, Level);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Frame on the traversal stack.
#[derive(Debug)]
struct Frame {
    node: u32,
    /// Next child slot to look at.
    next_slot: usize,
}

/// Depth-first iterator over the states of a [`VisitedTrie`].
///
/// Created by [`VisitedTrie::iter`]. The current path is kept in a single
/// buffer that grows and shrinks with the stack; a `State` is only allocated
/// when a leaf is yielded.
pub struct Iter<'a> {
    trie: &'a VisitedTrie,
    stack: Vec<Frame>,
    path: Vec<Symbol>,
}

impl<'a> Iter<'a> {
    fn new(trie: &'a VisitedTrie) -> Self {
        let mut stack = Vec::with_capacity(trie.width + 1);
        stack.push(Frame {
            node: ROOT,
            next_slot: 0,
        });
        Self {
            trie,
            stack,
            path: Vec::with_capacity(trie.width),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = (State, Level);

    fn next(&mut self) -> Option<Self::Item> {
        let trie = self.trie;
        loop {
            let frame = self.stack.last_mut()?;
            match trie.node(frame.node) {
                Node::Leaf(level) => {
                    let state = State::from_symbols(self.path.clone());
                    self.stack.pop();
                    self.path.pop();
                    return Some((state, *level));
                }
                Node::Internal(children) => {
                    let next = (frame.next_slot..children.len()).find(|&slot| children[slot] != 0);
                    match next {
                        Some(slot) => {
                            frame.next_slot = slot + 1;
                            self.path.push(Symbol::from_slot(slot, trie.num_labels));
                            self.stack.push(Frame {
                                node: children[slot],
                                next_slot: 0,
                            });
                        }
                        None => {
                            // Exhausted: backtrack.
                            self.stack.pop();
                            self.path.pop();
                        }
                    }
                }
            }
        }
    }
}
