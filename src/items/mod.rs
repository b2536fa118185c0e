// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primitive value types for the item universe.
//!
//! This module contains type-safe representations of the data model:
//! - Item: universe member indices (0..MAX_ITEMS)
//! - ItemSet: bitset of items (subsets, candidate groups, frontiers)
//! - UnorderedPair: canonical 2-element relations between distinct items

pub mod constants;
pub mod item;
pub mod item_set;
pub mod pair;

// Re-export for convenience
pub use constants::*;
pub use item::Item;
pub use item_set::ItemSet;
pub use pair::UnorderedPair;
