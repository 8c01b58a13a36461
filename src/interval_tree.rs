// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! The static interval tree: a centered, augmented binary tree built by
//! repeated median splits.
//!
//! Each node picks a center value (the median low endpoint of its
//! intervals, found with [`slice::select_nth_unstable_by`] rather than a
//! full sort), buckets its intervals into those containing the center,
//! those entirely below it, and those entirely above it, and recurses on
//! the latter two. Every interval bucketed at a node contains that node's
//! center, so once a query is known to cover the center, the whole bucket
//! is a match with no per-interval check.
//!
////////////////////////////////////////////////////////////////////////////////

use crate::collection::{Capabilities, IndexingSpeed, IntervalCollection, SortedIntervalCollection};
use crate::interval::Interval;

use std::cmp::Ordering;


////////////////////////////////////////////////////////////////////////////////
// Node
////////////////////////////////////////////////////////////////////////////////
struct Node<T> {
    center: T,
    /// Intervals crossing `center`, sorted by low ascending: used when the
    /// query lies entirely above `center` (streaming stops once low exceeds
    /// the query's high).
    mid: Vec<Interval<T>>,
    /// The same intervals, sorted by high descending: used when the query
    /// lies entirely below `center` (streaming stops once high no longer
    /// reaches the query's low).
    mid_by_high: Vec<Interval<T>>,
    left: Option<usize>,
    right: Option<usize>,
}


////////////////////////////////////////////////////////////////////////////////
// IntervalTree
////////////////////////////////////////////////////////////////////////////////
/// A static, read-only index over a fixed set of intervals, supporting
/// logarithmic-time overlap queries via median-split centering.
pub struct IntervalTree<T> {
    arena: Vec<Node<T>>,
    root: Option<usize>,
    len: usize,
}

impl<T: Ord + Clone> IntervalTree<T> {
    /// Builds an index over `items`, discarding any interval that is not
    /// [`Interval::is_valid`].
    pub fn build<I: IntoIterator<Item = Interval<T>>>(items: I) -> Self {
        let valid: Vec<Interval<T>> = items.into_iter().filter(|iv| iv.is_valid()).collect();
        let len = valid.len();
        let mut arena = Vec::new();
        let root = Self::build_node(valid, &mut arena);
        IntervalTree { arena, root, len }
    }

    fn build_node(mut items: Vec<Interval<T>>, arena: &mut Vec<Node<T>>) -> Option<usize> {
        if items.is_empty() {
            return None;
        }
        let total = items.len();
        let k = total / 2;
        items.select_nth_unstable_by(k, |a, b| a.low().cmp(b.low()));
        let center = items[k].low().clone();

        let mut mid = Vec::new();
        let mut left = Vec::new();
        let mut right = Vec::new();
        for iv in items {
            if iv.contains_point(&center) {
                mid.push(iv);
            } else if iv.high() <= &center {
                left.push(iv);
            } else {
                right.push(iv);
            }
        }

        // Guard against the degenerate case (e.g. many duplicate intervals
        // that all straddle the chosen center without containing it) where
        // every item lands in a single bucket and the recursion would
        // never shrink: fold everything into this node instead.
        if left.len() == total || right.len() == total {
            mid.append(&mut left);
            mid.append(&mut right);
            left = Vec::new();
            right = Vec::new();
        }

        mid.sort_by(|a, b| a.interval_compare(b));
        let mut mid_by_high = mid.clone();
        mid_by_high.sort_by(|a, b| b.compare_high(a));
        let node_idx = arena.len();
        arena.push(Node { center, mid, mid_by_high, left: None, right: None });
        let left_idx = Self::build_node(left, arena);
        let right_idx = Self::build_node(right, arena);
        arena[node_idx].left = left_idx;
        arena[node_idx].right = right_idx;
        Some(node_idx)
    }

    fn query_node(&self, idx: usize, query: &Interval<T>, out: &mut Vec<Interval<T>>) {
        let node = &self.arena[idx];
        if query.contains_point(&node.center) {
            // Every mid interval contains the center, which the query also
            // covers, so the whole bucket matches unconditionally; both
            // subtrees may still hold overlapping intervals.
            out.extend(node.mid.iter().cloned());
            if let Some(l) = node.left {
                self.query_node(l, query, out);
            }
            if let Some(r) = node.right {
                self.query_node(r, query, out);
            }
            return;
        }
        let go_right = match node.center.cmp(query.low()) {
            Ordering::Less => true,
            Ordering::Equal => !query.low_included(),
            Ordering::Greater => false,
        };
        if go_right {
            // The center lies below the query: a mid interval can still
            // reach into the query from below, so stream it (sorted by
            // high, descending) while it still overlaps.
            for iv in node.mid_by_high.iter() {
                if iv.overlaps(query) {
                    out.push(iv.clone());
                } else {
                    break;
                }
            }
            if let Some(r) = node.right {
                self.query_node(r, query, out);
            }
        } else {
            for iv in node.mid.iter() {
                if iv.overlaps(query) {
                    out.push(iv.clone());
                } else {
                    break;
                }
            }
            if let Some(l) = node.left {
                self.query_node(l, query, out);
            }
        }
    }
}

impl<T: Ord + Clone> IntervalCollection<T> for IntervalTree<T> {
    fn len(&self) -> usize {
        self.len
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
        self.sorted().any(|iv| iv.interval_equals(interval))
    }

    fn find_overlaps<'a>(&'a self, query: &Interval<T>) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.query_node(root, query, &mut out);
        }
        out.sort_by(|a, b| a.interval_compare(b));
        Box::new(out.into_iter())
    }

    fn sorted<'a>(&'a self) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let mut all: Vec<Interval<T>> = self.arena.iter().flat_map(|n| n.mid.iter().cloned()).collect();
        all.sort_by(|a, b| a.interval_compare(b));
        Box::new(all.into_iter())
    }
}

impl<T: Ord + Clone> SortedIntervalCollection<T> for IntervalTree<T> {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_a_center_and_finds_overlaps() {
        let tree = IntervalTree::build(vec![
            Interval::closed(0, 5),
            Interval::closed(10, 15),
            Interval::closed(20, 25),
            Interval::closed(4, 11),
        ]);
        assert_eq!(tree.len(), 4);
        let found: Vec<_> = tree.find_overlaps(&Interval::point(12)).collect();
        assert_eq!(found, vec![Interval::closed(4, 11), Interval::closed(10, 15)]);
    }

    #[test]
    fn wide_mid_interval_reached_from_the_opposite_side_of_center() {
        // With center chosen as B's low (40), a query entirely above center
        // must still find A, whose mid bucket crosses that center.
        let tree = IntervalTree::build(vec![
            Interval::closed(0, 100),
            Interval::closed(40, 45),
            Interval::closed(60, 65),
        ]);
        let found: Vec<_> = tree.find_overlaps(&Interval::closed(70, 80)).collect();
        assert_eq!(found, vec![Interval::closed(0, 100)]);
    }

    #[test]
    fn query_entirely_left_or_right_of_every_center() {
        let tree = IntervalTree::build(vec![Interval::closed(100, 200), Interval::closed(300, 400)]);
        assert_eq!(tree.find_overlaps(&Interval::closed(0, 50)).count(), 0);
        assert_eq!(tree.find_overlaps(&Interval::closed(500, 600)).count(), 0);
    }

    #[test]
    fn degenerate_all_overlapping_no_containment_terminates() {
        let items: Vec<_> = (0..50).map(|i| Interval::closed(i, i + 100)).collect();
        let tree = IntervalTree::build(items.clone());
        assert_eq!(tree.len(), 50);
        let found: Vec<_> = tree.find_overlaps(&Interval::point(75)).collect();
        assert_eq!(found.len(), items.len());
    }

    #[test]
    fn sorted_enumerates_every_interval_once() {
        let tree = IntervalTree::build(vec![Interval::closed(5, 6), Interval::closed(0, 10), Interval::closed(1, 2)]);
        let out: Vec<_> = tree.sorted().collect();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn read_only_rejects_mutation() {
        let mut tree = IntervalTree::build(vec![Interval::closed(1, 2)]);
        assert!(!tree.add(Interval::closed(3, 4)));
        assert!(!tree.remove(&Interval::closed(1, 2)));
        tree.clear();
        assert_eq!(tree.len(), 1);
    }
}
