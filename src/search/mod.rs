// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Group finder: descend-and-prune search for homogeneous groups.
//!
//! Starting from the full universe, the search shrinks non-homogeneous
//! subsets one element at a time. A subset with no different pair is a
//! group; nothing below it is explored, since every subset of a
//! homogeneous set is homogeneous and therefore redundant. A
//! non-homogeneous 2-element subset is abandoned: no reportable group
//! lies below it.
//!
//! Different descent paths converge on the same candidate subsets (the
//! (n-2)-element subsets alone are each reachable from two parents), so a
//! per-search visited set skips any subset that has already been
//! expanded. This bounds the work at one expansion per distinct subset
//! value; the worst case over a dense relation remains exponential in
//! the universe size.
//!
//! After the recursion, discovered groups are deduplicated and reduced to
//! the subset-minimal cover, then sorted for deterministic output.
//!
//! # Example
//!
//! ```
//! use pairs2groups::find_homogeneous_groups;
//!
//! let groups = find_homogeneous_groups(&[(0, 2)], 3).unwrap();
//! let indices: Vec<Vec<usize>> =
//!     groups.iter().map(|g| g.to_indices()).collect();
//! assert_eq!(indices, vec![vec![0, 1], vec![1, 2]]);
//! ```

pub mod relation;
pub mod statistics;

pub use relation::DifferentPairs;
pub use statistics::{Counters, Statistics};

use crate::errors::SearchError;
use crate::items::constants::MIN_GROUP_SIZE;
use crate::items::ItemSet;
use crate::subsets::{self, SubsetMemo};
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// Search driver owning the subset memo and per-search statistics.
///
/// The memo persists across [`GroupSearch::find`] calls (its entries are
/// pure-function results); statistics reset on each call.
#[derive(Debug)]
pub struct GroupSearch {
    memo: SubsetMemo,
    statistics: Statistics,
}

impl Default for GroupSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupSearch {
    /// Create a search with an enabled subset memo.
    pub fn new() -> Self {
        Self::with_memo(SubsetMemo::new())
    }

    /// Create a search with the given memo (e.g. [`SubsetMemo::disabled`]).
    pub fn with_memo(memo: SubsetMemo) -> Self {
        Self {
            memo,
            statistics: Statistics::new(),
        }
    }

    /// Statistics from the most recent [`GroupSearch::find`] call.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The subset memo, for cache inspection.
    pub fn memo(&self) -> &SubsetMemo {
        &self.memo
    }

    /// Find the minimal complete set of homogeneous groups.
    ///
    /// Returns the deduplicated, subset-minimal groups sorted by raw
    /// bitset value. `n_items == 0` yields no groups; `n_items == 1`
    /// yields the degenerate singleton universe group.
    pub fn find(&mut self, relation: &DifferentPairs) -> Result<Vec<ItemSet>, SearchError> {
        self.statistics = Statistics::new();

        let n_items = relation.n_items();
        if n_items == 0 {
            return Ok(Vec::new());
        }

        let mut visited: FxHashSet<ItemSet> = FxHashSet::default();
        let mut discovered = Vec::new();
        self.descend(
            relation.universe(),
            n_items,
            relation,
            &mut visited,
            &mut discovered,
        )?;

        let discovered_count = discovered.len() as u64;
        let unique: Vec<ItemSet> = discovered.into_iter().unique().collect();
        let mut minimal = subsets::remove_covered_sets(&unique);
        self.statistics.add(
            Counters::CoveredDropped,
            discovered_count - minimal.len() as u64,
        );

        // Descent order is already deterministic; the sort additionally
        // fixes the output order contract.
        minimal.sort_by_key(|group| group.bits());

        log::debug!(
            "search over {} items, {} different pairs: {} subsets expanded, {} visited skips, {} groups discovered, {} final groups",
            n_items,
            relation.len(),
            self.statistics.get(Counters::SubsetsExpanded),
            self.statistics.get(Counters::VisitedSkips),
            self.statistics.get(Counters::GroupsDiscovered),
            minimal.len()
        );
        self.memo.log_summary();

        Ok(minimal)
    }

    fn descend(
        &mut self,
        frontier: ItemSet,
        k: usize,
        relation: &DifferentPairs,
        visited: &mut FxHashSet<ItemSet>,
        discovered: &mut Vec<ItemSet>,
    ) -> Result<(), SearchError> {
        let candidates = self.memo.k_element_subsets(k, frontier)?;
        for candidate in candidates {
            if !visited.insert(candidate) {
                self.statistics.increment(Counters::VisitedSkips);
                continue;
            }
            self.statistics.increment(Counters::SubsetsExpanded);

            let pairs_within = self.memo.all_pairs(candidate);
            if relation.splits(&pairs_within) {
                if candidate.len() > MIN_GROUP_SIZE {
                    self.descend(candidate, candidate.len() - 1, relation, visited, discovered)?;
                }
            } else {
                self.statistics.increment(Counters::GroupsDiscovered);
                discovered.push(candidate);
            }
        }
        Ok(())
    }
}

/// One-shot entry point: validate raw pairs and run a fresh search.
///
/// `different_pairs` may list pairs in either order and with duplicates;
/// indices must lie in `[0, n_items)` and pairs must relate distinct
/// items, otherwise the call fails before any search runs.
pub fn find_homogeneous_groups(
    different_pairs: &[(usize, usize)],
    n_items: usize,
) -> Result<Vec<ItemSet>, SearchError> {
    let relation = DifferentPairs::new(n_items, different_pairs.iter().copied())?;
    GroupSearch::new().find(&relation)
}
