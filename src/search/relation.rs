// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated "different" relation over an item universe.
//!
//! The caller supplies raw `(usize, usize)` pairs from whatever produced
//! them (typically a pairwise statistical comparison). Construction
//! validates everything up front so the search itself never sees a
//! malformed pair: indices must lie in `[0, n_items)`, pairs must relate
//! distinct items, and the universe must fit the bitset width.
//!
//! The relation is symmetric and irreflexive: `(a,b)` and `(b,a)` collapse
//! to one canonical [`UnorderedPair`], and duplicates are ignored.

use crate::errors::SearchError;
use crate::items::{constants::MAX_ITEMS, Item, ItemSet, UnorderedPair};
use rustc_hash::FxHashSet;

/// The immutable "is different from" relation for one search.
#[derive(Debug, Clone)]
pub struct DifferentPairs {
    n_items: usize,
    pairs: FxHashSet<UnorderedPair>,
}

impl DifferentPairs {
    /// Build a validated relation over a universe of `n_items` items.
    ///
    /// Accepts pairs in either order, with duplicates; rejects
    /// out-of-range indices, self-pairs, and oversized universes.
    pub fn new(
        n_items: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, SearchError> {
        if n_items > MAX_ITEMS {
            return Err(SearchError::UniverseTooLarge {
                n_items,
                max: MAX_ITEMS,
            });
        }

        let mut canonical = FxHashSet::default();
        for (a, b) in pairs {
            if a == b {
                return Err(SearchError::SelfPair { item: a });
            }
            if a >= n_items || b >= n_items {
                return Err(SearchError::ItemOutOfRange { a, b, n_items });
            }
            // a, b < n_items <= MAX_ITEMS, so Item construction cannot fail.
            let pair = UnorderedPair::new(Item::new(a as u8), Item::new(b as u8));
            canonical.insert(pair);
        }

        Ok(Self {
            n_items,
            pairs: canonical,
        })
    }

    /// The universe size this relation was validated against.
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Number of distinct different-pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair is marked different.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether the given pair is marked different.
    pub fn contains(&self, pair: UnorderedPair) -> bool {
        self.pairs.contains(&pair)
    }

    /// Whether any of the given pairs is marked different. Called with
    /// the pairs within a candidate subset: true means the subset is not
    /// a homogeneous group.
    pub fn splits(&self, pairs_within: &[UnorderedPair]) -> bool {
        pairs_within.iter().any(|p| self.pairs.contains(p))
    }

    /// Iterate the canonical pairs (no particular order).
    pub fn iter(&self) -> impl Iterator<Item = UnorderedPair> + '_ {
        self.pairs.iter().copied()
    }

    /// The full universe `{0, ..., n_items-1}` as an item set.
    pub fn universe(&self) -> ItemSet {
        ItemSet::full(self.n_items)
    }
}

impl PartialEq for DifferentPairs {
    fn eq(&self, other: &Self) -> bool {
        self.n_items == other.n_items && self.pairs == other.pairs
    }
}

impl Eq for DifferentPairs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_and_duplicate_pairs_collapse() {
        let rel = DifferentPairs::new(4, [(0, 1), (1, 0), (0, 1), (2, 3)]).unwrap();
        assert_eq!(rel.len(), 2);
        assert!(rel.contains(UnorderedPair::new(Item::new(1), Item::new(0))));
    }

    #[test]
    fn test_empty_relation() {
        let rel = DifferentPairs::new(5, []).unwrap();
        assert!(rel.is_empty());
        assert_eq!(rel.n_items(), 5);
        assert_eq!(rel.universe().len(), 5);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            DifferentPairs::new(3, [(0, 3)]),
            Err(SearchError::ItemOutOfRange {
                a: 0,
                b: 3,
                n_items: 3
            })
        );
    }

    #[test]
    fn test_self_pair_rejected() {
        assert_eq!(
            DifferentPairs::new(3, [(2, 2)]),
            Err(SearchError::SelfPair { item: 2 })
        );
    }

    #[test]
    fn test_universe_too_large_rejected() {
        assert_eq!(
            DifferentPairs::new(65, []),
            Err(SearchError::UniverseTooLarge {
                n_items: 65,
                max: MAX_ITEMS
            })
        );
    }

    #[test]
    fn test_splits() {
        let rel = DifferentPairs::new(4, [(0, 2)]).unwrap();
        let with = crate::subsets::all_pairs(ItemSet::full(3));
        let without = crate::subsets::all_pairs(
            ItemSet::from_items(&[Item::new(1), Item::new(2), Item::new(3)]),
        );
        assert!(rel.splits(&with));
        assert!(!rel.splits(&without));
    }
}
