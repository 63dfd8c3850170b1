//! Runtime errors of a census run.

use thiserror::Error;

/// The only way a run can fail once it has started.
///
/// Duplicate insertions, generators mapping back onto known states and empty
/// blocks are all normal outcomes, never errors. Running out of room for new
/// trie nodes is not recoverable: the run is aborted and its trie discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("not enough memory: cannot allocate more than {nodes} trie nodes")]
    AllocationExhausted { nodes: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let err = Error::AllocationExhausted { nodes: 42 };
        assert_eq!(
            err.to_string(),
            "not enough memory: cannot allocate more than 42 trie nodes"
        );
    }
}
