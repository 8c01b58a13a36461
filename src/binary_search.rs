// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! Binary interval search: a static index holding the same intervals
//! twice, once sorted by low and once sorted by high.
//!
//! A query `[lo, hi]` can only overlap an interval whose low is `<= hi`
//! (a prefix of the low-sorted array) and whose high is `>= lo` (a suffix
//! of the high-sorted array). Both candidate sets are found with one
//! binary search each; rather than intersect them, this scans whichever
//! one binary search found to be smaller, testing the other condition
//! directly on each candidate.
//!
////////////////////////////////////////////////////////////////////////////////

use crate::collection::{Capabilities, IndexingSpeed, IntervalCollection, SortedIntervalCollection};
use crate::interval::Interval;

use std::cmp::Ordering;


////////////////////////////////////////////////////////////////////////////////
// BinaryIntervalSearch
////////////////////////////////////////////////////////////////////////////////
/// A static, read-only index over a fixed set of intervals, supporting
/// logarithmic-time overlap queries via dual low/high-sorted arrays.
pub struct BinaryIntervalSearch<T> {
    by_low: Vec<Interval<T>>,
    by_high: Vec<Interval<T>>,
}

impl<T: Ord + Clone> BinaryIntervalSearch<T> {
    /// Builds an index over `items`, discarding any interval that is not
    /// [`Interval::is_valid`].
    pub fn build<I: IntoIterator<Item = Interval<T>>>(items: I) -> Self {
        let valid: Vec<Interval<T>> = items.into_iter().filter(|iv| iv.is_valid()).collect();
        let mut by_low = valid.clone();
        by_low.sort_by(|a, b| a.interval_compare(b));
        let mut by_high = valid;
        by_high.sort_by(|a, b| match a.compare_high(b) {
            Ordering::Equal => a.compare_low(b),
            ord => ord,
        });
        BinaryIntervalSearch { by_low, by_high }
    }
}

impl<T: Ord + Clone> IntervalCollection<T> for BinaryIntervalSearch<T> {
    fn len(&self) -> usize {
        self.by_low.len()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            allows_overlaps: true,
            allows_containments: true,
            allows_reference_duplicates: true,
            is_read_only: true,
            is_find_overlaps_sorted: true,
        }
    }

    fn indexing_speed(&self) -> IndexingSpeed {
        IndexingSpeed::Logarithmic
    }

    fn add(&mut self, _interval: Interval<T>) -> bool {
        false
    }

    fn remove(&mut self, _interval: &Interval<T>) -> bool {
        false
    }

    fn clear(&mut self) {
        // Read-only: a no-op, matching `add`/`remove`'s silent rejection
        // rather than panicking for a capability the caller can already
        // discover via `is_read_only`.
    }

    fn contains(&self, interval: &Interval<T>) -> bool {
        self.by_low.binary_search_by(|probe| probe.interval_compare(interval)).is_ok()
    }

    fn find_overlaps<'a>(&'a self, query: &Interval<T>) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let low_end = self.by_low.partition_point(|iv| iv.compare_low_high(query) != Ordering::Greater);
        let high_start = self.by_high.partition_point(|iv| iv.compare_high_low(query) == Ordering::Less);

        let mut matches: Vec<Interval<T>> = if low_end <= self.by_high.len() - high_start {
            self.by_low[..low_end].iter().filter(|iv| iv.overlaps(query)).cloned().collect()
        } else {
            self.by_high[high_start..].iter().filter(|iv| iv.overlaps(query)).cloned().collect()
        };
        matches.sort_by(|a, b| a.interval_compare(b));
        Box::new(matches.into_iter())
    }

    fn sorted<'a>(&'a self) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        Box::new(self.by_low.iter().cloned())
    }
}

impl<T: Ord + Clone> SortedIntervalCollection<T> for BinaryIntervalSearch<T> {
    fn at(&self, i: usize) -> Option<Interval<T>> {
        self.by_low.get(i).cloned()
    }

    fn index_of(&self, query: &Interval<T>) -> Option<usize> {
        self.by_low.binary_search_by(|probe| probe.interval_compare(query)).ok()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_overlaps_via_either_array() {
        let bis = BinaryIntervalSearch::build(vec![
            Interval::closed(0, 2),
            Interval::closed(1, 4),
            Interval::closed(10, 12),
            Interval::closed(-5, -1),
        ]);
        let found: Vec<_> = bis.find_overlaps(&Interval::closed(3, 11)).collect();
        assert_eq!(found, vec![Interval::closed(1, 4), Interval::closed(10, 12)]);
    }

    #[test]
    fn empty_query_region_returns_nothing() {
        let bis = BinaryIntervalSearch::build(vec![Interval::closed(0, 2), Interval::closed(10, 12)]);
        assert_eq!(bis.find_overlaps(&Interval::open(3, 9)).count(), 0);
    }

    #[test]
    fn contains_checks_interval_equality() {
        let bis = BinaryIntervalSearch::build(vec![Interval::closed(1, 3)]);
        assert!(bis.contains(&Interval::closed(1, 3)));
        assert!(!bis.contains(&Interval::right_open(1, 3)));
    }

    #[test]
    fn read_only() {
        let mut bis = BinaryIntervalSearch::build(vec![Interval::closed(1, 2)]);
        assert!(!bis.add(Interval::closed(3, 4)));
        assert!(!bis.remove(&Interval::closed(1, 2)));
        bis.clear();
        assert_eq!(bis.len(), 1);
    }
}
