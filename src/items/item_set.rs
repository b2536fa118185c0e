// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ItemSet type for representing subsets of the universe as bitsets.
//!
//! An ItemSet is a compact representation of a set of items using a bitset,
//! where bit i represents the presence of item i.
//!
//! # Examples
//!
//! ```
//! use pairs2groups::items::{Item, ItemSet};
//!
//! // Create an item set
//! let mut set = ItemSet::empty();
//! set.insert(Item::new(0));
//! set.insert(Item::new(1));
//! set.insert(Item::new(4));
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(format!("{}", set), "{0,1,4}");
//!
//! // Iterate over items in the set, ascending
//! let items: Vec<usize> = set.iter().map(|i| i.as_usize()).collect();
//! assert_eq!(items, vec![0, 1, 4]);
//! ```

use crate::items::constants::MAX_ITEMS;
use crate::items::Item;
use std::fmt;

/// A set of items represented as a bitset.
///
/// Bit i (counting from LSB) is set if item i is in the set.
/// This provides O(1) insert, remove, and contains operations, and O(1)
/// equality/hash on the raw bits, which is what makes ItemSet usable
/// directly as the visited-set and memo-cache key during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemSet(u64);

impl ItemSet {
    /// Create an empty item set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create the full universe `{0, ..., n_items-1}`.
    ///
    /// # Panics
    ///
    /// Panics if `n_items > MAX_ITEMS`.
    pub fn full(n_items: usize) -> Self {
        assert!(
            n_items <= MAX_ITEMS,
            "Universe too large: {}",
            n_items
        );
        if n_items == MAX_ITEMS {
            Self(u64::MAX)
        } else {
            Self((1u64 << n_items) - 1)
        }
    }

    /// Create an item set from a slice of items.
    pub fn from_items(items: &[Item]) -> Self {
        let mut set = Self::empty();
        for &item in items {
            set.insert(item);
        }
        set
    }

    /// Create an item set from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Check if the set contains a specific item.
    pub fn contains(self, item: Item) -> bool {
        (self.0 >> item.value()) & 1 != 0
    }

    /// Insert an item into the set.
    pub fn insert(&mut self, item: Item) {
        self.0 |= 1 << item.value();
    }

    /// Remove an item from the set.
    pub fn remove(&mut self, item: Item) {
        self.0 &= !(1 << item.value());
    }

    /// Return a copy of the set with one item removed.
    ///
    /// This is the single-step descent primitive: the (n-1)-element
    /// subsets of a set are exactly `set.without(i)` for each member i.
    pub fn without(self, item: Item) -> Self {
        Self(self.0 & !(1 << item.value()))
    }

    /// Get the number of items in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether every member of `self` is also a member of `other`.
    ///
    /// Non-strict: a set is a subset of itself.
    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Iterate over all items in the set.
    ///
    /// Items are yielded in ascending order (0, 1, 2, ...).
    pub fn iter(self) -> impl Iterator<Item = Item> + Clone {
        ItemSetIter {
            bits: self.0,
            index: 0,
        }
    }

    /// Collect the members as ascending usize indices.
    pub fn to_indices(self) -> Vec<usize> {
        self.iter().map(Item::as_usize).collect()
    }
}

/// Iterator over items in an ItemSet.
///
/// Clone lets pair enumeration run `tuple_combinations` directly over it.
#[derive(Clone)]
struct ItemSetIter {
    bits: u64,
    index: u8,
}

impl Iterator for ItemSetIter {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        while (self.index as usize) < MAX_ITEMS {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Item::new(idx));
            }
        }
        None
    }
}

impl fmt::Display for ItemSet {
    /// Format an item set as "{0,1,4}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (n, item) in self.iter().enumerate() {
            if n > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}

impl From<&[Item]> for ItemSet {
    fn from(items: &[Item]) -> Self {
        Self::from_items(items)
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut set = Self::empty();
        for item in iter {
            set.insert(item);
        }
        set
    }
}
