// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Find homogeneous groups of items from pairwise difference information.
//!
//! Given `n` items and a set of unordered pairs marked "different"
//! (commutative but not transitive), this crate finds the minimal
//! complete set of maximal groups such that no two members of the same
//! group are marked different. The producer of the "different" relation
//! (typically a rank-based two-sample test with a multiple-comparison
//! correction) is an external collaborator; this crate only consumes its
//! output.
//!
//! # Architecture
//!
//! Two components, composed linearly:
//!
//! ## Subset Engine ([`subsets`])
//!
//! Pure combinatorial operations over bitset item sets:
//! - k-element subset generation, restricted to single-step descent
//! - unordered pair enumeration
//! - covered-set removal (subset-minimal cover)
//! - an optional memo cache for the pure generators
//!
//! ## Group Finder ([`search`])
//!
//! The recursive descend-and-prune search. Starting from the full
//! universe, every non-homogeneous subset is shrunk one element at a
//! time; homogeneous subsets are recorded as groups and not descended.
//! A per-search visited set prevents redundant re-exploration when
//! different descent paths converge on the same candidate subset.
//!
//! The [`label`] module is a thin boundary layer rendering group
//! membership as letter strings (`a`, `ab`, ...).
//!
//! # Example
//!
//! ```
//! use pairs2groups::find_homogeneous_groups;
//!
//! // Three items; 1 and 2 are different from each other.
//! let groups = find_homogeneous_groups(&[(1, 2)], 3).unwrap();
//! let indices: Vec<Vec<usize>> =
//!     groups.iter().map(|g| g.to_indices()).collect();
//! assert_eq!(indices, vec![vec![0, 1], vec![0, 2]]);
//! ```
//!
//! # Scaling
//!
//! The search is exponential in the universe size for dense relations;
//! the visited set bounds redundant work but not the asymptotic ceiling.
//! The universe is capped at [`items::constants::MAX_ITEMS`] (the bitset
//! width); practical inputs are tens of items.

pub mod errors;
pub mod items;
pub mod label;
pub mod search;
pub mod subsets;

// Re-export commonly used types
pub use errors::SearchError;
pub use items::{Item, ItemSet, UnorderedPair};
pub use label::{letter_labels, LabelPolicy};
pub use search::{find_homogeneous_groups, DifferentPairs, GroupSearch};
pub use subsets::SubsetMemo;
