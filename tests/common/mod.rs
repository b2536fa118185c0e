// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use pairs2groups::{Item, ItemSet, UnorderedPair};

/// Opt in to log output with `RUST_LOG=debug cargo test`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build an ItemSet from indices.
pub fn set(indices: &[usize]) -> ItemSet {
    indices
        .iter()
        .map(|&i| Item::try_new(i).expect("test index out of range"))
        .collect()
}

/// Build a list of ItemSets from index slices.
pub fn sets(list: &[&[usize]]) -> Vec<ItemSet> {
    list.iter().map(|indices| set(indices)).collect()
}

/// Closure property: no group may contain both ends of a different pair.
pub fn assert_no_group_splits_a_pair(groups: &[ItemSet], different_pairs: &[(usize, usize)]) {
    for &(a, b) in different_pairs {
        let pair = UnorderedPair::new(
            Item::try_new(a).expect("test index out of range"),
            Item::try_new(b).expect("test index out of range"),
        );
        for group in groups {
            assert!(
                !(group.contains(pair.lo()) && group.contains(pair.hi())),
                "group {} contains different pair {}",
                group,
                pair
            );
        }
    }
}

/// Minimality property: no group is a subset of another group.
pub fn assert_subset_minimal(groups: &[ItemSet]) {
    for (i, &a) in groups.iter().enumerate() {
        for (j, &b) in groups.iter().enumerate() {
            if i != j {
                assert!(!a.is_subset_of(b), "group {} is covered by group {}", a, b);
            }
        }
    }
}

/// Completeness property: every item with at least one not-different
/// partner appears in at least one group.
pub fn assert_partnered_items_covered(
    groups: &[ItemSet],
    different_pairs: &[(usize, usize)],
    n_items: usize,
) {
    for index in 0..n_items {
        let has_partner = (0..n_items).any(|other| {
            other != index
                && !different_pairs
                    .iter()
                    .any(|&(a, b)| (a == index && b == other) || (a == other && b == index))
        });
        if has_partner {
            let item = Item::try_new(index).expect("test index out of range");
            assert!(
                groups.iter().any(|g| g.contains(item)),
                "item {} has a not-different partner but no group",
                item
            );
        }
    }
}
