// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for group search.
//!
//! Invalid-input errors are rejected before any search runs, so a failed
//! call never produces a partial group list. `UnsupportedCardinality` is
//! a programming-error class: the public entry point cannot trigger it,
//! but the subset engine still guards its one-step-descent contract.

use thiserror::Error;

/// Errors that can occur while validating input or running the search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The universe exceeds the bitset width.
    #[error("universe of {n_items} items exceeds the supported maximum of {max}")]
    UniverseTooLarge { n_items: usize, max: usize },

    /// A supplied pair references an item outside `[0, n_items)`.
    #[error("pair ({a},{b}) references an item outside the universe 0..{n_items}")]
    ItemOutOfRange { a: usize, b: usize, n_items: usize },

    /// A supplied pair relates an item to itself. The relation is
    /// irreflexive by contract.
    #[error("pair ({item},{item}) relates an item to itself")]
    SelfPair { item: usize },

    /// The subset engine was asked for a cardinality other than `len` or
    /// `len - 1`. The search descends one element at a time; any other
    /// request is a contract violation by an internal caller.
    #[error("unsupported subset cardinality {k} for a {len}-element set")]
    UnsupportedCardinality { k: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SearchError::ItemOutOfRange {
            a: 1,
            b: 9,
            n_items: 4,
        };
        assert_eq!(
            format!("{}", err),
            "pair (1,9) references an item outside the universe 0..4"
        );

        let err = SearchError::UnsupportedCardinality { k: 2, len: 5 };
        assert_eq!(
            format!("{}", err),
            "unsupported subset cardinality 2 for a 5-element set"
        );
    }
}
