// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! The endpoint-sorted list: the simplest of the five index structures,
//! a `Vec` kept in [`Interval::interval_compare`] order.
//!
//! Conflict checking is deliberately cheap rather than exhaustive: a new
//! interval is only checked against its immediate neighbors in sort order
//! (`overlaps_neighbour`, `contains_neighbour`), not the full set. That is
//! sound when overlaps are already disallowed (an overlap-free list can
//! only conflict at the insertion point), but when overlaps *are* allowed
//! and only containments are forbidden, a neighbor-only check cannot catch
//! a distant interval that happens to enclose the new one; callers that
//! need an exhaustive containment guarantee should use
//! [`nested`](crate::nested) instead, which tracks containment directly.
//!
////////////////////////////////////////////////////////////////////////////////

use crate::collection::{Capabilities, IndexingSpeed, IntervalCollection, SortedIntervalCollection};
use crate::interval::Interval;

use std::cmp::Ordering;


////////////////////////////////////////////////////////////////////////////////
// SortedIntervalList
////////////////////////////////////////////////////////////////////////////////
/// An endpoint-sorted list of intervals, with configurable admission
/// policy.
#[derive(Debug, Clone)]
pub struct SortedIntervalList<T> {
    items: Vec<Interval<T>>,
    allow_overlaps: bool,
    allow_containments: bool,
    allow_reference_duplicates: bool,
}

impl<T: Ord + Clone> SortedIntervalList<T> {
    /// Creates an empty list with the given admission policy.
    ///
    /// `allow_containments` implies `allow_overlaps`: containment is a
    /// special case of overlap, so a list that forbids overlaps forbids
    /// containments for free.
    pub fn new(allow_overlaps: bool, allow_containments: bool, allow_reference_duplicates: bool) -> Self {
        SortedIntervalList {
            items: Vec::new(),
            allow_overlaps: allow_overlaps || allow_containments,
            allow_containments,
            allow_reference_duplicates,
        }
    }

    /// Creates an empty, containment-free, overlap-free list: the
    /// strictest policy, and the common case for a flat partition of the
    /// domain.
    pub fn disjoint() -> Self {
        Self::new(false, false, false)
    }

    fn insertion_index(&self, interval: &Interval<T>) -> Result<usize, usize> {
        self.items.binary_search_by(|probe| probe.interval_compare(interval))
    }

    /// Returns `true` if `interval` overlaps the item immediately before or
    /// after its sorted insertion point.
    fn overlaps_neighbour(&self, index: usize, interval: &Interval<T>) -> bool {
        let before = index.checked_sub(1).and_then(|i| self.items.get(i));
        let after = self.items.get(index);
        before.is_some_and(|n| n.overlaps(interval)) || after.is_some_and(|n| n.overlaps(interval))
    }

    /// Returns `true` if `interval` and the neighbor immediately before or
    /// after its sorted insertion point are in a containment relationship
    /// (in either direction).
    fn contains_neighbour(&self, index: usize, interval: &Interval<T>) -> bool {
        let before = index.checked_sub(1).and_then(|i| self.items.get(i));
        let after = self.items.get(index);
        let conflicts = |n: &Interval<T>| n.contains(interval) || interval.contains(n);
        before.is_some_and(conflicts) || after.is_some_and(conflicts)
    }

    /// Returns `true` if `interval` is interval-equal to the neighbor
    /// immediately before or after its sorted insertion point.
    fn duplicates_neighbour(&self, index: usize, interval: &Interval<T>) -> bool {
        let before = index.checked_sub(1).and_then(|i| self.items.get(i));
        let after = self.items.get(index);
        before.is_some_and(|n| n.interval_equals(interval)) || after.is_some_and(|n| n.interval_equals(interval))
    }
}

impl<T: Ord + Clone> IntervalCollection<T> for SortedIntervalList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            allows_overlaps: self.allow_overlaps,
            allows_containments: self.allow_containments,
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
        let index = match self.insertion_index(&interval) {
            Ok(idx) => idx,
            Err(idx) => idx,
        };
        if !self.allow_reference_duplicates && self.duplicates_neighbour(index, &interval) {
            return false;
        }
        if !self.allow_overlaps && self.overlaps_neighbour(index, &interval) {
            return false;
        }
        if !self.allow_containments && self.contains_neighbour(index, &interval) {
            return false;
        }
        self.items.insert(index, interval);
        true
    }

    fn remove(&mut self, interval: &Interval<T>) -> bool {
        match self.insertion_index(interval) {
            Ok(idx) => {
                self.items.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn contains(&self, interval: &Interval<T>) -> bool {
        self.insertion_index(interval).is_ok()
    }

    fn find_overlaps<'a>(&'a self, query: &Interval<T>) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let query = query.clone();
        Box::new(
            self.items
                .iter()
                .take_while(move |iv| iv.compare_low_high(&query) != Ordering::Greater)
                .filter(move |iv| iv.overlaps(&query))
                .cloned(),
        )
    }

    fn sorted<'a>(&'a self) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        Box::new(self.items.iter().cloned())
    }
}

impl<T: Ord + Clone> SortedIntervalCollection<T> for SortedIntervalList<T> {
    fn at(&self, i: usize) -> Option<Interval<T>> {
        self.items.get(i).cloned()
    }

    fn index_of(&self, query: &Interval<T>) -> Option<usize> {
        self.insertion_index(query).ok()
    }
}

impl<T: Ord + Clone> crate::collection::ContainmentFreeIntervalCollection<T> for SortedIntervalList<T> {}

// §4.B's overlap-free specialization: only meaningful while this list's
// `allow_overlaps` is actually `false` (see the trait's own doc comment),
// which is the policy `disjoint()` and any caller-chosen
// `new(false, false, _)` selects.
impl<T: Ord + Clone> crate::collection::FiniteIntervalCollection<T> for SortedIntervalList<T> {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_list_rejects_overlap() {
        let mut list = SortedIntervalList::disjoint();
        assert!(list.add(Interval::closed(1, 5)));
        assert!(!list.add(Interval::closed(4, 6)));
        assert!(list.add(Interval::right_open(5, 6)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn overlap_allowed_but_containment_rejected() {
        let mut list = SortedIntervalList::new(true, false, true);
        assert!(list.add(Interval::closed(1, 10)));
        assert!(list.add(Interval::closed(8, 20)));
        assert!(!list.add(Interval::closed(2, 9)));
    }

    #[test]
    fn reference_duplicates_rejected_by_default() {
        let mut list = SortedIntervalList::new(true, true, false);
        assert!(list.add(Interval::closed(1, 5)));
        assert!(!list.add(Interval::closed(1, 5)));
    }

    #[test]
    fn find_overlaps_sorted_and_bounded() {
        let mut list = SortedIntervalList::new(true, true, true);
        for iv in [Interval::closed(0, 2), Interval::closed(1, 4), Interval::closed(10, 12)] {
            list.add(iv);
        }
        let found: Vec<_> = list.find_overlaps(&Interval::closed(3, 11)).collect();
        assert_eq!(found, vec![Interval::closed(1, 4), Interval::closed(10, 12)]);
    }

    #[test]
    fn remove_and_contains() {
        let mut list = SortedIntervalList::disjoint();
        let iv = Interval::closed(1, 5);
        list.add(iv);
        assert!(list.contains(&iv));
        assert!(list.remove(&iv));
        assert!(!list.contains(&iv));
        assert!(!list.remove(&iv));
    }

    #[test]
    fn neighbors_of_a_point_between_two_disjoint_intervals() {
        use crate::collection::FiniteIntervalCollection;
        let mut list = SortedIntervalList::disjoint();
        list.add(Interval::closed(0, 5));
        list.add(Interval::closed(10, 15));
        let (before, after) = list.neighbors(&7);
        assert_eq!(before, Some(Interval::closed(0, 5)));
        assert_eq!(after, Some(Interval::closed(10, 15)));
    }

    #[test]
    fn neighbors_past_either_edge() {
        use crate::collection::FiniteIntervalCollection;
        let mut list = SortedIntervalList::disjoint();
        list.add(Interval::closed(0, 5));
        let (before, _) = list.neighbors(&-1);
        assert_eq!(before, None);
        let (_, after) = list.neighbors(&100);
        assert_eq!(after, None);
    }
}
