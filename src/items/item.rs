// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Item type for universe members.
//!
//! An item is an opaque identity: an index in `[0, n)` for a universe of
//! `n` items. The newtype prevents mixing item indices with other integer
//! values (subset cardinalities, group indices, counters).

use crate::items::constants::MAX_ITEMS;
use std::fmt;

/// An item index in the range `0..MAX_ITEMS`.
///
/// Per-universe range checks (`index < n_items`) are enforced when a
/// [`DifferentPairs`](crate::search::DifferentPairs) relation is built;
/// this type only guarantees the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(u8);

impl Item {
    /// Create a new item, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= MAX_ITEMS`.
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < MAX_ITEMS,
            "Item out of range: {}",
            value
        );
        Self(value)
    }

    /// Try to create a new item, returning None if out of range.
    pub fn try_new(value: usize) -> Option<Self> {
        if value < MAX_ITEMS {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the item as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
