//! # perm-census: breadth-first census of cyclic arrangements
//!
//! **`perm-census`** enumerates everything reachable from a starting
//! arrangement of `N` labels under a fixed family of transpositions, and
//! records for each distinct arrangement the minimum number of generator
//! applications needed to reach it (its *level*).
//!
//! The labels may be split into fixed contiguous blocks. Each block is a cyclic
//! object, so two arrangements that differ only by rotating a block are the
//! same: every candidate is brought to a **canonical form** before it is looked
//! up.
//!
//! The result is a census: the closure size and the per-level histogram, the
//! *growth polynomial* `c0 q^0 + c1 q^1 + ... + cK q^K`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use perm_census::census::Census;
//! use perm_census::config::CensusConfig;
//! use perm_census::generator::GeneratorSet;
//! use perm_census::partition::Partition;
//!
//! // Six labels in cycles of lengths 3, 2 and 1, adjacent transpositions.
//! let partition = Partition::new([3, 2, 1]).unwrap();
//! let config = CensusConfig::new(partition, GeneratorSet::Adjacent);
//!
//! let report = Census::new(config).unwrap().run().unwrap();
//! assert_eq!(report.size, 120);
//! assert_eq!(report.polynomial.degree(), Some(12));
//! ```
//!
//! ## Core Components
//!
//! - **[`canon`]**: canonical forms under block rotation.
//! - **[`trie`]**: the [`VisitedTrie`][crate::trie::VisitedTrie], a prefix tree
//!   recording the level of first discovery of every canonical state.
//! - **[`census`]**: the breadth-first driver and its [`Report`][crate::census::Report].
//!
//! Runs are independent: each [`Census`][crate::census::Census] owns its trie,
//! so several runs can coexist in one process.

pub mod canon;
pub mod census;
pub mod config;
pub mod debug;
pub mod error;
pub mod generator;
pub mod partition;
pub mod polynomial;
pub mod state;
pub mod trie;
pub mod types;
