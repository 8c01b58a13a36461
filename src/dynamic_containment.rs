// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! The dynamic containment list: a growable ordered bag of containment-free
//! levels, each a [`SortedIntervalSet`].
//!
//! An admitted interval joins the first level it does not conflict with;
//! when none will take it, a new level opens. Two intervals can overlap,
//! or one can contain the other, as long as they end up in different
//! levels — the composite allows everything a single level forbids, while
//! each level keeps the cheap neighbor-only conflict checking that
//! [`sorted_list`](crate::sorted_list) already provides.
//!
////////////////////////////////////////////////////////////////////////////////

use crate::collection::{Capabilities, IndexingSpeed, IntervalCollection, SortedIntervalCollection};
use crate::interval::Interval;
use crate::sorted_collection::SortedIntervalSet;


////////////////////////////////////////////////////////////////////////////////
// DynamicContainmentList
////////////////////////////////////////////////////////////////////////////////
/// A growable composite of containment-free levels.
pub struct DynamicContainmentList<T> {
    levels: Vec<SortedIntervalSet<T>>,
    allow_reference_duplicates: bool,
}

impl<T: Ord + Clone> DynamicContainmentList<T> {
    /// Creates an empty composite. `allow_reference_duplicates` governs
    /// whether the same interval value may be admitted more than once
    /// across the whole structure (duplicates across different levels are
    /// otherwise unremarkable, since each level is its own containment-free
    /// set).
    pub fn new(allow_reference_duplicates: bool) -> Self {
        DynamicContainmentList { levels: Vec::new(), allow_reference_duplicates }
    }

    /// Returns the number of levels currently open. A query's worst-case
    /// cost scales with this, not with the total number of intervals.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl<T: Ord + Clone> IntervalCollection<T> for DynamicContainmentList<T> {
    fn len(&self) -> usize {
        self.levels.iter().map(|l| l.len()).sum()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            allows_overlaps: true,
            allows_containments: true,
            allows_reference_duplicates: self.allow_reference_duplicates,
            is_read_only: false,
            is_find_overlaps_sorted: true,
        }
    }

    fn indexing_speed(&self) -> IndexingSpeed {
        IndexingSpeed::Linear
    }

    fn add(&mut self, interval: Interval<T>) -> bool {
        if !interval.is_valid() {
            return false;
        }
        if !self.allow_reference_duplicates && self.contains(&interval) {
            return false;
        }
        for level in &mut self.levels {
            if level.add(interval.clone()) {
                return true;
            }
        }
        // Each level is containment-free, not overlap-free: two intervals
        // that overlap without either containing the other may still share
        // a level. Only a containment conflict forces a cascade to a new
        // one.
        let mut level = SortedIntervalSet::new(true, false, self.allow_reference_duplicates);
        let admitted = level.add(interval);
        debug_assert!(admitted, "an empty containment-free level must accept any valid interval");
        self.levels.push(level);
        true
    }

    fn remove(&mut self, interval: &Interval<T>) -> bool {
        for i in 0..self.levels.len() {
            if self.levels[i].remove(interval) {
                if self.levels[i].is_empty() {
                    self.levels.remove(i);
                }
                return true;
            }
        }
        false
    }

    fn clear(&mut self) {
        self.levels.clear();
    }

    fn contains(&self, interval: &Interval<T>) -> bool {
        self.levels.iter().any(|l| l.contains(interval))
    }

    fn find_overlaps<'a>(&'a self, query: &Interval<T>) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let mut matches: Vec<Interval<T>> =
            self.levels.iter().flat_map(|l| l.find_overlaps(query)).collect();
        matches.sort_by(|a, b| a.interval_compare(b));
        Box::new(matches.into_iter())
    }

    fn sorted<'a>(&'a self) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let mut all: Vec<Interval<T>> = self.levels.iter().flat_map(|l| l.sorted()).collect();
        all.sort_by(|a, b| a.interval_compare(b));
        Box::new(all.into_iter())
    }
}

impl<T: Ord + Clone> SortedIntervalCollection<T> for DynamicContainmentList<T> {}

impl<T: Ord + Clone> crate::collection::ContainmentFreeIntervalCollection<T> for DynamicContainmentList<T> {}
