use std::collections::HashSet;

use test_log::test;

use perm_census::canon::{canonicalize, is_canonical};
use perm_census::census::{Census, Frontier, Phase, Report};
use perm_census::config::CensusConfig;
use perm_census::error::Error;
use perm_census::generator::GeneratorSet;
use perm_census::partition::{Layout, Partition};

fn run(partition: Partition, generators: GeneratorSet) -> Report {
    Census::new(CensusConfig::new(partition, generators))
        .unwrap()
        .run()
        .unwrap()
}

fn blocks(blocks: &[usize]) -> Partition {
    Partition::new(blocks.iter().copied()).unwrap()
}

#[test]
fn test_three_labels_collapse_to_two_states() {
    let report = run(Partition::single(3).unwrap(), GeneratorSet::AllPairs);
    assert_eq!(report.size, 2);
    assert_eq!(report.polynomial.to_string(), "1 q^0 + 1 q^1");
}

#[test]
fn test_single_cycle_adjacent() {
    let report = run(Partition::single(5).unwrap(), GeneratorSet::Adjacent);
    assert_eq!(report.size, 24);
    assert_eq!(report.polynomial.coefficients(), &[1, 4, 8, 8, 3]);

    let report = run(Partition::single(6).unwrap(), GeneratorSet::Adjacent);
    assert_eq!(report.size, 120);
    assert_eq!(report.polynomial.coefficients(), &[1, 5, 14, 27, 36, 28, 9]);
}

#[test]
fn test_default_configuration() {
    let mut census = Census::new(CensusConfig::default()).unwrap();
    let report = census.run().unwrap();
    assert_eq!(report.size, 120);
    assert_eq!(
        report.polynomial.coefficients(),
        &[1, 3, 6, 10, 14, 17, 18, 17, 14, 10, 6, 3, 1]
    );
    assert_eq!(census.current_level(), 12);
}

#[test]
fn test_all_pairs_on_blocks() {
    let report = run(blocks(&[3, 2, 1]), GeneratorSet::AllPairs);
    assert_eq!(report.size, 120);
    assert_eq!(report.polynomial.coefficients(), &[1, 12, 47, 60]);
}

#[test]
fn test_layouts_agree() {
    for generators in [GeneratorSet::Adjacent, GeneratorSet::AllPairs] {
        for shape in [&[3, 2, 1][..], &[2, 2], &[1, 1, 1], &[4]] {
            let separated = run(blocks(shape), generators);
            let implicit = run(blocks(shape).with_layout(Layout::Implicit), generators);
            assert_eq!(separated, implicit, "{:?} with {}", shape, generators);
        }
    }
}

#[test]
fn test_empty_block_is_harmless() {
    let with_gap = run(blocks(&[2, 0, 2]), GeneratorSet::Adjacent);
    let without = run(blocks(&[2, 2]), GeneratorSet::Adjacent);
    assert_eq!(with_gap, without);
    assert_eq!(with_gap.polynomial.coefficients(), &[1, 1, 2, 1, 1]);
}

#[test]
fn test_enumeration_is_complete() {
    let partition = blocks(&[3, 2]);
    let mut census = Census::new(CensusConfig::new(partition.clone(), GeneratorSet::Adjacent)).unwrap();
    let report = census.run().unwrap();

    let listed: Vec<_> = census.trie().iter().collect();
    assert_eq!(listed.len(), report.size);

    let distinct: HashSet<_> = listed.iter().map(|(state, _)| state.clone()).collect();
    assert_eq!(distinct.len(), report.size);
    assert!(listed.iter().all(|(state, _)| is_canonical(state, &partition)));

    // 5! / (3 * 2) arrangements up to rotation, all connected by transpositions.
    assert_eq!(report.size, 20);
    assert_eq!(census.trie().iter().collect::<Vec<_>>(), listed);
}

#[test]
fn test_levels_are_distances() {
    let partition = blocks(&[2, 2, 1]);
    let generators = GeneratorSet::Adjacent;
    let mut census = Census::new(CensusConfig::new(partition.clone(), generators)).unwrap();
    census.run().unwrap();
    let trie = census.trie();

    for (state, level) in trie.iter() {
        let neighbours: Vec<_> = generators
            .pairs(partition.num_labels())
            .into_iter()
            .map(|pair| {
                let next = canonicalize(&GeneratorSet::apply(&state, pair), &partition);
                trie.level_of(&next).expect("closure is closed under generators")
            })
            .collect();

        assert!(neighbours.iter().all(|&l| l + 1 >= level && l <= level + 1));
        if level > 0 {
            assert!(neighbours.contains(&(level - 1)), "{} has no parent", state);
        }
    }
}

#[test]
fn test_start_arrangement() {
    let config = CensusConfig::new(Partition::single(3).unwrap(), GeneratorSet::AllPairs).with_start(vec![2, 1, 3]);
    let mut census = Census::new(config).unwrap();
    let report = census.run().unwrap();

    assert_eq!(report.polynomial.coefficients(), &[1, 1]);
    assert_eq!(census.states_at(0)[0].to_string(), "(1, 3, 2)");
    assert_eq!(census.states_at(1)[0].to_string(), "(1, 2, 3)");
}

#[test]
fn test_tracked_frontier() {
    let config = CensusConfig::default()
        .with_print_states(false)
        .with_frontier(Frontier::Tracked);
    let tracked = Census::new(config).unwrap().run().unwrap();
    let rescan = Census::new(CensusConfig::default()).unwrap().run().unwrap();
    assert_eq!(tracked, rescan);
}

#[test]
fn test_node_limit_aborts_run() {
    let config = CensusConfig::default().with_node_limit(50);
    let mut census = Census::new(config).unwrap();
    assert_eq!(census.run(), Err(Error::AllocationExhausted { nodes: 50 }));
    assert_eq!(census.trie().node_count(), 50);
}

#[test]
fn test_independent_runs_interleave() {
    let mut a = Census::new(CensusConfig::new(Partition::single(4).unwrap(), GeneratorSet::Adjacent)).unwrap();
    let mut b = Census::new(CensusConfig::new(Partition::single(4).unwrap(), GeneratorSet::AllPairs)).unwrap();

    loop {
        let pa = a.step().unwrap();
        let pb = b.step().unwrap();
        if pa == Phase::Done && pb == Phase::Done {
            break;
        }
    }

    assert_eq!(a.report().polynomial.coefficients(), &[1, 3, 2]);
    assert_eq!(b.report().polynomial.coefficients(), &[1, 5]);
}
