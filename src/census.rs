//! Breadth-first census of a closure.
//!
//! [`Census`] drives the exploration level by level:
//!
//! 1. **Init**: the canonical start state is recorded at level 0.
//! 2. **Expanding(L)**: every state recorded at level `L` is hit with every
//!    generator; each candidate is canonicalized and inserted at level `L + 1`.
//!    Insertion is first-discovery-wins, so the recorded level is the BFS
//!    distance from the start state.
//! 3. **Done**: reached after a level that discovers nothing new.
//!
//! The final [`Report`] carries the closure size and the
//! [`GrowthPolynomial`].
//!
//! ```
//! use perm_census::census::Census;
//! use perm_census::config::CensusConfig;
//! use perm_census::generator::GeneratorSet;
//! use perm_census::partition::Partition;
//!
//! let config = CensusConfig::new(Partition::single(3).unwrap(), GeneratorSet::AllPairs);
//! let mut census = Census::new(config).unwrap();
//! let report = census.run().unwrap();
//!
//! assert_eq!(report.size, 2);
//! assert_eq!(report.polynomial.to_string(), "1 q^0 + 1 q^1");
//! ```

use std::fmt::{self, Display, Formatter};

use log::{debug, info};

use crate::canon::canonicalize_in_place;
use crate::config::{CensusConfig, ConfigError};
use crate::error::Result;
use crate::generator::GeneratorSet;
use crate::polynomial::GrowthPolynomial;
use crate::state::State;
use crate::trie::VisitedTrie;
use crate::types::Level;

/// How the states of the current level are obtained.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Frontier {
    /// Scan the whole trie and keep the states recorded at the current level.
    #[default]
    Rescan,
    /// Keep the states discovered during the previous step.
    ///
    /// Assigns the same levels as [`Frontier::Rescan`] without re-walking the
    /// trie, at the cost of holding one level of states in memory.
    Tracked,
}

/// Driver state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    Init,
    Expanding(Level),
    Done,
}

/// Result of a finished run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    /// Number of distinct canonical states in the closure.
    pub size: usize,
    pub polynomial: GrowthPolynomial,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Done. Total size: {}", self.size)?;
        write!(f, "{}", self.polynomial)
    }
}

pub struct Census {
    config: CensusConfig,
    start: State,
    pairs: Vec<(u32, u32)>,
    trie: VisitedTrie,
    phase: Phase,
    found: usize,
    /// States discovered by the last step (only kept for [`Frontier::Tracked`]).
    frontier: Vec<State>,
}

impl fmt::Debug for Census {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Census")
            .field("partition", &self.config.partition)
            .field("generators", &self.config.generators)
            .field("phase", &self.phase)
            .field("found", &self.found)
            .field("trie", &self.trie)
            .finish()
    }
}

impl Census {
    pub fn new(config: CensusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let start = config.start_state()?;
        let pairs = config.generators.pairs(config.num_labels());
        let trie = VisitedTrie::for_partition(&config.partition).with_node_limit(config.node_limit);

        Ok(Self {
            config,
            start,
            pairs,
            trie,
            phase: Phase::Init,
            found: 0,
            frontier: Vec::new(),
        })
    }

    pub fn config(&self) -> &CensusConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of distinct states discovered so far.
    pub fn found_count(&self) -> usize {
        self.found
    }

    /// Level being expanded next, or the last expanded level once done.
    pub fn current_level(&self) -> Level {
        match self.phase {
            Phase::Init => 0,
            Phase::Expanding(level) => level,
            Phase::Done => self.trie.iter().map(|(_, level)| level).max().unwrap_or(0),
        }
    }

    pub fn trie(&self) -> &VisitedTrie {
        &self.trie
    }

    /// States recorded at exactly `level`, in trie order.
    pub fn states_at(&self, level: Level) -> Vec<State> {
        self.trie
            .iter()
            .filter(|&(_, l)| l == level)
            .map(|(state, _)| state)
            .collect()
    }

    /// Advances the driver by one transition and returns the new phase.
    ///
    /// Calling `step` on a finished census does nothing.
    pub fn step(&mut self) -> Result<Phase> {
        self.phase = match self.phase {
            Phase::Init => {
                let start = self.start.clone();
                self.trie.insert(&start, 0)?;
                self.found = 1;
                self.report_new(&start, 0);
                if self.config.frontier == Frontier::Tracked {
                    self.frontier = vec![start];
                }
                Phase::Expanding(0)
            }
            Phase::Expanding(level) => {
                if self.expand(level)? {
                    Phase::Expanding(level + 1)
                } else {
                    Phase::Done
                }
            }
            Phase::Done => Phase::Done,
        };
        Ok(self.phase)
    }

    /// Expands `level`. Returns whether anything new was found.
    fn expand(&mut self, level: Level) -> Result<bool> {
        info!("Starting level {}", level);

        let states = match self.config.frontier {
            Frontier::Rescan => self.states_at(level),
            Frontier::Tracked => std::mem::take(&mut self.frontier),
        };
        info!("Level {} has {} states", level, states.len());

        let before = self.found;
        let next = level + 1;
        for state in &states {
            for &pair in &self.pairs {
                let mut candidate = GeneratorSet::apply(state, pair);
                canonicalize_in_place(&mut candidate, &self.config.partition);
                if self.trie.insert(&candidate, next)? {
                    self.found += 1;
                    self.report_new(&candidate, next);
                    if self.config.frontier == Frontier::Tracked {
                        self.frontier.push(candidate);
                    }
                }
            }
        }

        debug!(
            "expand(level = {}): {} -> {} states",
            level, before, self.found
        );
        Ok(self.found != before)
    }

    fn report_new(&self, state: &State, level: Level) {
        if self.config.print_states {
            info!("{} (level {})", state, level);
        } else {
            debug!("{} (level {})", state, level);
        }
    }

    /// Runs until [`Phase::Done`] and builds the report.
    pub fn run(&mut self) -> Result<Report> {
        while self.step()? != Phase::Done {}
        let report = self.report();
        info!("Done. Total size: {}", report.size);
        Ok(report)
    }

    /// Builds a report from the states recorded so far.
    pub fn report(&self) -> Report {
        let polynomial = GrowthPolynomial::from_levels(self.trie.iter().map(|(_, level)| level));
        debug_assert_eq!(polynomial.total() as usize, self.found);
        Report {
            size: self.found,
            polynomial,
        }
    }

    /// Discards everything found so far and returns to [`Phase::Init`].
    pub fn reset(&mut self) {
        self.trie.clear();
        self.frontier.clear();
        self.found = 0;
        self.phase = Phase::Init;
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::partition::Partition;

    fn census(blocks: &[usize], generators: GeneratorSet) -> Census {
        let partition = Partition::new(blocks.iter().copied()).unwrap();
        Census::new(CensusConfig::new(partition, generators)).unwrap()
    }

    #[test]
    fn test_three_labels_all_pairs() {
        let mut census = census(&[3], GeneratorSet::AllPairs);
        assert_eq!(census.phase(), Phase::Init);

        assert_eq!(census.step(), Ok(Phase::Expanding(0)));
        assert_eq!(census.found_count(), 1);

        assert_eq!(census.step(), Ok(Phase::Expanding(1)));
        assert_eq!(census.found_count(), 2);
        let level_one: Vec<String> = census.states_at(1).iter().map(|s| s.to_string()).collect();
        assert_eq!(level_one, vec!["(1, 3, 2)"]);

        assert_eq!(census.step(), Ok(Phase::Done));
        assert_eq!(census.found_count(), 2);
        assert_eq!(census.current_level(), 1);

        // Finished censuses stay finished.
        assert_eq!(census.step(), Ok(Phase::Done));

        let report = census.report();
        assert_eq!(report.size, 2);
        assert_eq!(report.polynomial.coefficients(), &[1, 1]);
        assert_eq!(report.to_string(), "Done. Total size: 2\n1 q^0 + 1 q^1");
    }

    #[test]
    fn test_four_labels_adjacent() {
        let report = census(&[4], GeneratorSet::Adjacent).run().unwrap();
        assert_eq!(report.size, 6);
        assert_eq!(report.polynomial.coefficients(), &[1, 3, 2]);
    }

    #[test]
    fn test_single_label() {
        let mut census = census(&[1], GeneratorSet::Adjacent);
        let report = census.run().unwrap();
        assert_eq!(report.size, 1);
        assert_eq!(report.polynomial.to_string(), "1 q^0");
        assert_eq!(census.current_level(), 0);
    }

    #[test]
    fn test_frontier_strategies_agree() {
        for generators in [GeneratorSet::Adjacent, GeneratorSet::AllPairs] {
            let partition = Partition::new([2, 2, 1]).unwrap();
            let rescan = Census::new(CensusConfig::new(partition.clone(), generators))
                .unwrap()
                .run()
                .unwrap();
            let mut tracked = Census::new(
                CensusConfig::new(partition, generators).with_frontier(Frontier::Tracked),
            )
            .unwrap();
            assert_eq!(tracked.run().unwrap(), rescan);
            assert!(tracked.frontier.is_empty());
        }
    }

    #[test]
    fn test_reset() {
        let mut census = census(&[4], GeneratorSet::AllPairs);
        let first = census.run().unwrap();
        assert_eq!(first.polynomial.coefficients(), &[1, 5]);

        census.reset();
        assert_eq!(census.phase(), Phase::Init);
        assert_eq!(census.found_count(), 0);
        assert!(census.trie().is_empty());

        assert_eq!(census.run().unwrap(), first);
    }

    #[test]
    fn test_bad_config() {
        let config = CensusConfig::new(Partition::single(3).unwrap(), GeneratorSet::Adjacent)
            .with_start(vec![1, 2]);
        assert!(matches!(
            Census::new(config),
            Err(ConfigError::StartLength { expected: 3, actual: 2 })
        ));
    }
}
