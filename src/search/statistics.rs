// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters recording how much work one search did. They exist for test
//! assertions (the visited-set must actually suppress re-exploration) and
//! for the debug-level summary logged at the end of each search.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Candidate subsets expanded (pair check performed).
    SubsetsExpanded,
    /// Candidate subsets skipped because they were already visited.
    VisitedSkips,
    /// Homogeneous groups recorded before dedup/minimization.
    GroupsDiscovered,
    /// Groups dropped by covered-set removal (including duplicates).
    CoveredDropped,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Add to the specified counter.
    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
