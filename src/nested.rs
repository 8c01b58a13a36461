// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! The nested containment list: a static index that turns the sorted
//! sequence of admitted intervals directly into a containment forest, so a
//! query can skip an entire contained subtree once its root is known not to
//! overlap, and can skip the overlap check entirely for a subtree once its
//! root is known to already lie inside the query (the `take_all`
//! shortcut).
//!
//! The forest lives in a flat arena rather than boxed nodes; each node
//! records its first child and next sibling by arena index, matching the
//! sibling-chain shape `veldsla_nclist` builds over a sort-then-partition
//! pass.
//!
////////////////////////////////////////////////////////////////////////////////

use crate::collection::{Capabilities, IndexingSpeed, IntervalCollection, SortedIntervalCollection};
use crate::interval::Interval;

use std::cmp::Ordering;


////////////////////////////////////////////////////////////////////////////////
// NclNode
////////////////////////////////////////////////////////////////////////////////
struct NclNode<T> {
    interval: Interval<T>,
    first_child: Option<usize>,
    next_sibling: Option<usize>,
}


////////////////////////////////////////////////////////////////////////////////
// NestedContainmentList
////////////////////////////////////////////////////////////////////////////////
/// A static, read-only containment forest over a fixed set of intervals.
pub struct NestedContainmentList<T> {
    arena: Vec<NclNode<T>>,
    top: Option<usize>,
}

impl<T: Ord + Clone> NestedContainmentList<T> {
    /// Builds an index over `items`, discarding any interval that is not
    /// [`Interval::is_valid`].
    ///
    /// Because construction consumes the sorted input strictly left to
    /// right, never revisiting an earlier position, the arena's insertion
    /// order is itself a pre-order traversal of the forest. That
    /// construction order sorts by low ascending but high *descending*
    /// (a containing parent sorts before its nested child), so it is not
    /// `interval_compare` order; [`sorted`](IntervalCollection::sorted)
    /// re-sorts the arena rather than reusing it.
    pub fn build<I: IntoIterator<Item = Interval<T>>>(items: I) -> Self {
        let mut sorted: Vec<Interval<T>> = items.into_iter().filter(|iv| iv.is_valid()).collect();
        sorted.sort_by(|a, b| match a.compare_low(b) {
            Ordering::Equal => b.compare_high(a),
            ord => ord,
        });

        let mut arena = Vec::with_capacity(sorted.len());
        let mut pos = 0usize;
        let top = Self::build_level(&sorted, &mut pos, None, &mut arena);
        NestedContainmentList { arena, top }
    }

    fn build_level(
        sorted: &[Interval<T>],
        pos: &mut usize,
        parent: Option<&Interval<T>>,
        arena: &mut Vec<NclNode<T>>,
    ) -> Option<usize> {
        let mut head: Option<usize> = None;
        let mut prev: Option<usize> = None;
        while *pos < sorted.len() {
            if let Some(p) = parent {
                if !p.contains(&sorted[*pos]) {
                    break;
                }
            }
            let iv = sorted[*pos].clone();
            *pos += 1;
            let node_idx = arena.len();
            arena.push(NclNode { interval: iv.clone(), first_child: None, next_sibling: None });
            let child_head = Self::build_level(sorted, pos, Some(&iv), arena);
            arena[node_idx].first_child = child_head;
            if head.is_none() {
                head = Some(node_idx);
            }
            if let Some(prev_idx) = prev {
                arena[prev_idx].next_sibling = Some(node_idx);
            }
            prev = Some(node_idx);
        }
        head
    }

    fn collect(&self, idx: usize, query: &Interval<T>, all: bool, out: &mut Vec<Interval<T>>) {
        let node = &self.arena[idx];
        if all || node.interval.overlaps(query) {
            out.push(node.interval.clone());
            if let Some(child) = node.first_child {
                let child_all = all || query.contains(&node.interval);
                self.collect_siblings(child, query, child_all, out);
            }
        }
    }

    fn collect_siblings(&self, start: usize, query: &Interval<T>, inherited_all: bool, out: &mut Vec<Interval<T>>) {
        let mut cur = Some(start);
        while let Some(idx) = cur {
            let node = &self.arena[idx];
            if !inherited_all && node.interval.compare_low_high(query) == Ordering::Greater {
                break;
            }
            self.collect(idx, query, inherited_all, out);
            cur = node.next_sibling;
        }
    }
}

impl<T: Ord + Clone> IntervalCollection<T> for NestedContainmentList<T> {
    fn len(&self) -> usize {
        self.arena.len()
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
        self.arena.iter().any(|n| n.interval.interval_equals(interval))
    }

    fn find_overlaps<'a>(&'a self, query: &Interval<T>) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let mut out = Vec::new();
        if let Some(top) = self.top {
            self.collect_siblings(top, query, false, &mut out);
        }
        out.sort_by(|a, b| a.interval_compare(b));
        Box::new(out.into_iter())
    }

    fn sorted<'a>(&'a self) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        // The arena is in construction order (low ascending, high
        // descending — a containing parent precedes its nested child),
        // not `interval_compare` order: re-sort rather than reuse it.
        let mut all: Vec<Interval<T>> = self.arena.iter().map(|n| n.interval.clone()).collect();
        all.sort_by(|a, b| a.interval_compare(b));
        Box::new(all.into_iter())
    }
}

impl<T: Ord + Clone> SortedIntervalCollection<T> for NestedContainmentList<T> {}
