// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Letter-label rendering of group membership.
//!
//! Each group gets a letter (group 0 is `a`, group 1 is `b`, ... with
//! bijective base-26 continuation `aa`, `ab`, ... past 26 groups). An
//! item's label is the concatenation of the letters of every group it
//! belongs to, so items sharing a letter are not different from each
//! other. This is the boundary layer that turns the search output into
//! the compact annotations used under boxplot-style figures.
//!
//! An item that belongs to no group has no letter. What to render for it
//! is a policy choice, not an algorithm property, so it is an explicit
//! parameter here rather than a hard-coded behavior.

use crate::items::ItemSet;

/// How to label an item that belongs to no group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// Leave the label empty. An item different from every other item
    /// simply gets no letter.
    #[default]
    OmitUngrouped,

    /// Give each ungrouped item its own fresh letter, continuing after
    /// the group letters in item order.
    SingletonFallback,
}

/// Render one label per item for a universe of `n_items` items.
///
/// Group order determines letters, so pass the deterministic list from
/// the search unmodified if labels must be reproducible.
pub fn letter_labels(groups: &[ItemSet], n_items: usize, policy: LabelPolicy) -> Vec<String> {
    let mut labels = vec![String::new(); n_items];

    for (group_index, group) in groups.iter().enumerate() {
        for item in group.iter() {
            if item.as_usize() < n_items {
                labels[item.as_usize()].push_str(&letter(group_index));
            }
        }
    }

    if policy == LabelPolicy::SingletonFallback {
        let mut next_index = groups.len();
        for label in labels.iter_mut() {
            if label.is_empty() {
                label.push_str(&letter(next_index));
                next_index += 1;
            }
        }
    }

    labels
}

/// Bijective base-26 letter for a label index: `a`..`z`, `aa`, `ab`, ...
fn letter(mut index: usize) -> String {
    let mut reversed = Vec::new();
    loop {
        reversed.push(b'a' + (index % 26) as u8);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    reversed.iter().rev().map(|&b| b as char).collect()
}
