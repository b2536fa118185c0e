// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subset engine: pure combinatorial operations on item sets.
//!
//! The group search descends one element at a time, so subset generation
//! deliberately supports only two cardinalities: the whole set (`k == n`)
//! and single-element removal (`k == n-1`). General k-combinations are
//! never needed and requesting one is an internal contract violation.
//!
//! All operations here are pure functions of their arguments. The results
//! for a given `ItemSet` value are deterministic: sets iterate their
//! members in ascending order, so subset and pair enumeration order is
//! fixed by the set value alone, which keeps the search reproducible.
//!
//! [`SubsetMemo`] wraps the two generators with an optional cache.

pub mod memo;

pub use memo::SubsetMemo;

use crate::errors::SearchError;
use crate::items::{ItemSet, UnorderedPair};
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// Generate every `k`-element subset of `t`.
///
/// Supported cardinalities:
/// - `k == t.len()`: the single subset `t` itself
/// - `k == t.len() - 1`: one subset per member, that member removed, in
///   ascending member order
///
/// Any other `k` fails with [`SearchError::UnsupportedCardinality`].
pub fn k_element_subsets(k: usize, t: ItemSet) -> Result<Vec<ItemSet>, SearchError> {
    let len = t.len();
    if k == len {
        Ok(vec![t])
    } else if k + 1 == len {
        Ok(t.iter().map(|item| t.without(item)).collect())
    } else {
        Err(SearchError::UnsupportedCardinality { k, len })
    }
}

/// Generate every unordered pair of distinct members of `s`.
///
/// Returns all C(|s|, 2) pairs with no duplicates, ordered by the
/// ascending member iteration.
pub fn all_pairs(s: ItemSet) -> Vec<UnorderedPair> {
    // iter() is ascending, so a < b and the pair is already canonical.
    s.iter()
        .tuple_combinations()
        .map(|(a, b)| UnorderedPair::new(a, b))
        .collect()
}

/// Reduce a list of sets to the minimal sublist covering all of them.
///
/// A set is dropped when some other set in the list contains it. Equal
/// sets are mutually covering; the tie-break keeps the first occurrence
/// and drops the later ones, which also deduplicates the list.
pub fn remove_covered_sets(sets: &[ItemSet]) -> Vec<ItemSet> {
    let mut kept = Vec::new();
    for (i, &candidate) in sets.iter().enumerate() {
        let covered = sets.iter().enumerate().any(|(j, &other)| {
            if i == j || !candidate.is_subset_of(other) {
                return false;
            }
            // Equal sets cover each other; only the first survives.
            candidate != other || j < i
        });
        if !covered {
            kept.push(candidate);
        }
    }
    kept
}

/// Compare two lists of sets as sets-of-sets, ignoring order and
/// duplicate entries.
///
/// Verification support for tests; the production search path never
/// calls this.
pub fn same_sets(a: &[ItemSet], b: &[ItemSet]) -> bool {
    let a: FxHashSet<ItemSet> = a.iter().copied().collect();
    let b: FxHashSet<ItemSet> = b.iter().copied().collect();
    a == b
}
