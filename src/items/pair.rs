// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical unordered pair of distinct items.
//!
//! The "different" relation is commutative, so `(a,b)` and `(b,a)` must
//! compare and hash identically. The pair is canonicalized at
//! construction: the smaller item is always stored first, and the derived
//! Eq/Hash then do the right thing with no further normalization.

use crate::items::Item;
use std::fmt;

/// An unordered pair of two distinct items, stored as `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnorderedPair {
    lo: Item,
    hi: Item,
}

impl UnorderedPair {
    /// Create a canonical pair from two distinct items, in either order.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`. A reflexive pair is a contract violation by the
    /// caller; validated input paths use [`UnorderedPair::try_new`].
    pub fn new(a: Item, b: Item) -> Self {
        assert!(a != b, "UnorderedPair of equal items: {}", a);
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Try to create a canonical pair, returning None if the items are equal.
    pub fn try_new(a: Item, b: Item) -> Option<Self> {
        if a == b {
            None
        } else {
            Some(Self::new(a, b))
        }
    }

    /// The smaller item of the pair.
    pub fn lo(self) -> Item {
        self.lo
    }

    /// The larger item of the pair.
    pub fn hi(self) -> Item {
        self.hi
    }
}

impl fmt::Display for UnorderedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        // The pair should store the lowest value first
        let p = UnorderedPair::new(Item::new(10), Item::new(2));
        assert_eq!(p.lo().value(), 2);
        assert_eq!(p.hi().value(), 10);
    }

    #[test]
    fn test_orderless_equality() {
        let a = UnorderedPair::new(Item::new(3), Item::new(7));
        let b = UnorderedPair::new(Item::new(7), Item::new(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_collision_of_reversed_pairs() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(UnorderedPair::new(Item::new(1), Item::new(5)));
        assert!(!set.insert(UnorderedPair::new(Item::new(5), Item::new(1))));
        assert_eq!(set.len(), 1);
    }

    #[test]
    #[should_panic(expected = "UnorderedPair of equal items")]
    fn test_reflexive_pair_panics() {
        UnorderedPair::new(Item::new(4), Item::new(4));
    }

    #[test]
    fn test_try_new() {
        assert!(UnorderedPair::try_new(Item::new(0), Item::new(1)).is_some());
        assert!(UnorderedPair::try_new(Item::new(2), Item::new(2)).is_none());
    }

    #[test]
    fn test_display() {
        let p = UnorderedPair::new(Item::new(9), Item::new(0));
        assert_eq!(format!("{}", p), "(0,9)");
    }
}
