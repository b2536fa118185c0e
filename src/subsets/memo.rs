// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoization of the pure subset-engine generators.
//!
//! Subset and pair generation are referentially transparent, so their
//! results can be cached keyed on the canonical argument forms: the
//! `(k, ItemSet)` request for subsets, the bare `ItemSet` for pairs.
//! Both keys are small Copy values with O(1) hashing.
//!
//! The cache may outlive a single search: a `GroupSearch` that runs many
//! relations over same-sized universes revisits the same subsets, and
//! the cached generator output stays valid because it depends on nothing
//! but the arguments. Construct with [`SubsetMemo::disabled`] to fall
//! through to the raw generators on every call.

use crate::errors::SearchError;
use crate::items::{ItemSet, UnorderedPair};
use crate::subsets;
use rustc_hash::FxHashMap;

/// Cache for subset and pair generation.
#[derive(Debug)]
pub struct SubsetMemo {
    enabled: bool,
    subsets: FxHashMap<(usize, ItemSet), Vec<ItemSet>>,
    pairs: FxHashMap<ItemSet, Vec<UnorderedPair>>,
    hits: u64,
    misses: u64,
}

impl Default for SubsetMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsetMemo {
    fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            subsets: FxHashMap::default(),
            pairs: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Create an enabled, empty cache.
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// Create a disabled cache: every call recomputes.
    pub fn disabled() -> Self {
        Self::with_enabled(false)
    }

    /// Whether results are being cached.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Cached [`subsets::k_element_subsets`].
    ///
    /// Errors are not cached; the unsupported-cardinality guard is cheap
    /// and an erroring request indicates a caller bug anyway.
    pub fn k_element_subsets(
        &mut self,
        k: usize,
        t: ItemSet,
    ) -> Result<Vec<ItemSet>, SearchError> {
        if !self.enabled {
            return subsets::k_element_subsets(k, t);
        }
        if let Some(cached) = self.subsets.get(&(k, t)) {
            self.hits += 1;
            return Ok(cached.clone());
        }
        let computed = subsets::k_element_subsets(k, t)?;
        self.misses += 1;
        self.subsets.insert((k, t), computed.clone());
        Ok(computed)
    }

    /// Cached [`subsets::all_pairs`].
    pub fn all_pairs(&mut self, s: ItemSet) -> Vec<UnorderedPair> {
        if !self.enabled {
            return subsets::all_pairs(s);
        }
        if let Some(cached) = self.pairs.get(&s) {
            self.hits += 1;
            return cached.clone();
        }
        let computed = subsets::all_pairs(s);
        self.misses += 1;
        self.pairs.insert(s, computed.clone());
        computed
    }

    /// Drop all cached results, keeping the enabled/disabled setting.
    pub fn clear(&mut self) {
        self.subsets.clear();
        self.pairs.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Cache hit count since creation or [`SubsetMemo::clear`].
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Cache miss count since creation or [`SubsetMemo::clear`].
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Log cache effectiveness at trace level.
    pub fn log_summary(&self) {
        log::trace!(
            "subset memo: {} hits, {} misses, {} subset entries, {} pair entries",
            self.hits,
            self.misses,
            self.subsets.len(),
            self.pairs.len()
        );
    }
}
