//! Run configuration.
//!
//! [`CensusConfig`] gathers everything that is fixed for a run: the label
//! count and block partition, the generator set, the starting arrangement and
//! the diagnostic verbosity. The defaults describe six labels split into
//! cycles of lengths 3, 2 and 1, explored with adjacent transpositions.

use thiserror::Error;

use crate::canon::canonicalize;
use crate::census::Frontier;
use crate::generator::GeneratorSet;
use crate::partition::Partition;
use crate::state::State;

/// Invalid configuration, detected before a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("partition has no labels")]
    NoLabels,
    #[error("bad block length '{0}'")]
    BadBlockLength(String),
    #[error("unknown generator set '{0}' (expected 'adjacent' or 'pairs')")]
    UnknownGenerators(String),
    #[error("start arrangement has {actual} labels, expected {expected}")]
    StartLength { expected: usize, actual: usize },
    #[error("label {label} is out of range 1..={n}")]
    LabelOutOfRange { label: u32, n: usize },
    #[error("label {0} appears more than once")]
    DuplicateLabel(u32),
}

#[derive(Debug, Clone)]
pub struct CensusConfig {
    pub partition: Partition,
    pub generators: GeneratorSet,
    /// Log every newly discovered state at `info` level.
    pub print_states: bool,
    /// Label order of the starting arrangement. `None` means `1..=N`.
    pub start: Option<Vec<u32>>,
    /// Maximum number of live trie nodes (root included).
    pub node_limit: Option<usize>,
    pub frontier: Frontier,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            partition: Partition::new_unchecked(vec![3, 2, 1]),
            generators: GeneratorSet::default(),
            print_states: true,
            start: None,
            node_limit: None,
            frontier: Frontier::default(),
        }
    }
}

impl CensusConfig {
    pub fn new(partition: Partition, generators: GeneratorSet) -> Self {
        Self {
            partition,
            generators,
            print_states: false,
            ..Self::default()
        }
    }

    pub fn with_print_states(mut self, print_states: bool) -> Self {
        self.print_states = print_states;
        self
    }

    pub fn with_start(mut self, labels: Vec<u32>) -> Self {
        self.start = Some(labels);
        self
    }

    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn with_frontier(mut self, frontier: Frontier) -> Self {
        self.frontier = frontier;
        self
    }

    /// Number of labels `N`.
    pub fn num_labels(&self) -> usize {
        self.partition.num_labels()
    }

    /// Builds the canonical starting state.
    pub fn start_state(&self) -> Result<State, ConfigError> {
        let state = match &self.start {
            Some(labels) => State::from_labels(&self.partition, labels)?,
            None => State::identity(&self.partition),
        };
        Ok(canonicalize(&state, &self.partition))
    }

    /// Checks the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_labels() == 0 {
            return Err(ConfigError::NoLabels);
        }
        self.start_state().map(|_| ())
    }
}
