// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time bounds for the item universe.

/// Maximum number of items in a universe.
///
/// Item sets are represented as u64 bitsets, so the universe is capped at
/// the bitset width. The search is exponential in the universe size, so
/// practical inputs are tens of items, well inside this bound.
pub const MAX_ITEMS: usize = 64;

/// Smallest subset worth descending into.
///
/// A non-homogeneous 2-element set has nothing below it: removing one
/// element leaves singletons, which this scheme does not report as groups.
pub const MIN_GROUP_SIZE: usize = 2;
