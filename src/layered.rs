// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! The layered containment list: a static index built by peeling the
//! admitted intervals into layers of mutually non-nested intervals, each
//! kept sorted by low with a running maximum-high array for pruning.
//!
//! Grounded in the layered decomposition `gtars_overlaprs::ailist` builds:
//! an interval joins the first layer whose current tail does not strictly
//! contain it, opening a new layer only when every existing layer's tail would
//! nest it. A query then only has to touch, per layer, the prefix a
//! galloping search on the running max-high can't rule out.
//!
////////////////////////////////////////////////////////////////////////////////

use crate::collection::{Capabilities, IndexingSpeed, IntervalCollection, SortedIntervalCollection};
use crate::interval::Interval;


////////////////////////////////////////////////////////////////////////////////
// Layer
////////////////////////////////////////////////////////////////////////////////
struct Layer<T> {
    items: Vec<Interval<T>>,
    /// `running_max[i] == max(items[0..=i].high())`, used to prune a whole
    /// prefix of the layer without visiting it.
    running_max: Vec<T>,
}

impl<T: Ord + Clone> Layer<T> {
    fn new(items: Vec<Interval<T>>) -> Self {
        let mut running_max = Vec::with_capacity(items.len());
        let mut max: Option<T> = None;
        for iv in &items {
            max = Some(match max {
                Some(m) if m >= *iv.high() => m,
                _ => iv.high().clone(),
            });
            running_max.push(max.clone().unwrap());
        }
        Layer { items, running_max }
    }

    fn find_overlaps(&self, query: &Interval<T>) -> Vec<Interval<T>> {
        let end = self
            .items
            .partition_point(|iv| iv.compare_low_high(query) != std::cmp::Ordering::Greater);
        let start = self.running_max[..end].partition_point(|h| h < query.low());
        self.items[start..end]
            .iter()
            .filter(|iv| iv.overlaps(query))
            .cloned()
            .collect()
    }
}


////////////////////////////////////////////////////////////////////////////////
// LayeredContainmentList
////////////////////////////////////////////////////////////////////////////////
/// A static, read-only index built from a fixed set of intervals, indexed
/// for logarithmic-time overlap queries via layered galloping search.
pub struct LayeredContainmentList<T> {
    layers: Vec<Layer<T>>,
    len: usize,
}

impl<T: Ord + Clone> LayeredContainmentList<T> {
    /// Builds an index over `items`, discarding any interval that is not
    /// [`Interval::is_valid`].
    pub fn build<I: IntoIterator<Item = Interval<T>>>(items: I) -> Self {
        let mut sorted: Vec<Interval<T>> = items.into_iter().filter(|iv| iv.is_valid()).collect();
        sorted.sort_by(|a, b| a.interval_compare(b));

        let mut layers: Vec<Vec<Interval<T>>> = Vec::new();
        for iv in sorted {
            let mut placed = false;
            for layer in layers.iter_mut() {
                if !layer.last().expect("layer is never left empty").strictly_contains(&iv) {
                    layer.push(iv.clone());
                    placed = true;
                    break;
                }
            }
            if !placed {
                layers.push(vec![iv]);
            }
        }

        let len = layers.iter().map(Vec::len).sum();
        let layers = layers.into_iter().map(Layer::new).collect();
        LayeredContainmentList { layers, len }
    }
}

impl<T: Ord + Clone> IntervalCollection<T> for LayeredContainmentList<T> {
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
        self.layers.iter().any(|layer| {
            layer
                .items
                .binary_search_by(|probe| probe.interval_compare(interval))
                .is_ok()
        })
    }

    fn find_overlaps<'a>(&'a self, query: &Interval<T>) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let mut matches: Vec<Interval<T>> = self.layers.iter().flat_map(|l| l.find_overlaps(query)).collect();
        matches.sort_by(|a, b| a.interval_compare(b));
        Box::new(matches.into_iter())
    }

    fn sorted<'a>(&'a self) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        let mut all: Vec<Interval<T>> = self.layers.iter().flat_map(|l| l.items.iter().cloned()).collect();
        all.sort_by(|a, b| a.interval_compare(b));
        Box::new(all.into_iter())
    }
}

impl<T: Ord + Clone> SortedIntervalCollection<T> for LayeredContainmentList<T> {}
