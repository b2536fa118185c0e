// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense adversarial relations. The redundant-exploration pathology shows
//! up when many descent paths converge on the same subsets; these inputs
//! previously caused runaway recursion in the unmemoized formulation of
//! the algorithm, so the interesting assertion is that the search
//! terminates quickly and the visited set is doing its job.

mod common;

use common::{
    assert_no_group_splits_a_pair, assert_partnered_items_covered, assert_subset_minimal,
    init_logging, sets,
};
use pairs2groups::search::Counters;
use pairs2groups::{DifferentPairs, GroupSearch};

/// Every pair at distance >= 2 is different: only adjacent pairs survive.
fn banded_pairs(n_items: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for a in 0..n_items {
        for b in (a + 2)..n_items {
            pairs.push((a, b));
        }
    }
    pairs
}

fn all_pairs(n_items: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for a in 0..n_items {
        for b in (a + 1)..n_items {
            pairs.push((a, b));
        }
    }
    pairs
}

#[test]
fn banded_relation_over_nine_items() {
    init_logging();
    let different_pairs = banded_pairs(9);
    let relation = DifferentPairs::new(9, different_pairs.iter().copied()).unwrap();
    let mut search = GroupSearch::new();
    let groups = search.find(&relation).unwrap();

    // The maximal homogeneous groups are exactly the adjacent pairs.
    assert_eq!(
        groups,
        sets(&[
            &[0, 1],
            &[1, 2],
            &[2, 3],
            &[3, 4],
            &[4, 5],
            &[5, 6],
            &[6, 7],
            &[7, 8]
        ])
    );
    assert_no_group_splits_a_pair(&groups, &different_pairs);
    assert_subset_minimal(&groups);

    // The descent reaches the 2-element level from every branch; without
    // the visited set this input explodes combinatorially.
    assert!(search.statistics().get(Counters::VisitedSkips) > 0);
    // At most one expansion per distinct subset of {0..8}.
    assert!(search.statistics().get(Counters::SubsetsExpanded) < (1 << 9));
}

#[test]
fn fully_different_relation_over_thirteen_items() {
    init_logging();
    let different_pairs = all_pairs(13);
    let relation = DifferentPairs::new(13, different_pairs.iter().copied()).unwrap();
    let mut search = GroupSearch::new();
    let groups = search.find(&relation).unwrap();

    // No two items tolerate each other: there is no group at all.
    assert!(groups.is_empty());
    assert!(search.statistics().get(Counters::VisitedSkips) > 0);
    assert!(search.statistics().get(Counters::SubsetsExpanded) < (1 << 13));
}

#[test]
fn dense_structured_relation_over_thirteen_items() {
    init_logging();
    // Different whenever the index sum is divisible by three; dense and
    // irregular enough to fan the descent out widely.
    let n_items = 13;
    let different_pairs: Vec<(usize, usize)> = all_pairs(n_items)
        .into_iter()
        .filter(|&(a, b)| (a + b) % 3 == 0)
        .collect();

    let relation = DifferentPairs::new(n_items, different_pairs.iter().copied()).unwrap();
    let mut search = GroupSearch::new();
    let groups = search.find(&relation).unwrap();

    assert!(!groups.is_empty());
    assert_no_group_splits_a_pair(&groups, &different_pairs);
    assert_subset_minimal(&groups);
    assert_partnered_items_covered(&groups, &different_pairs, n_items);

    // Deterministic across a fresh search with a cold cache.
    let again = GroupSearch::new().find(&relation).unwrap();
    assert_eq!(groups, again);
}
