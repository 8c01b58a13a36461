// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! The endpoint-sorted dynamic collection: an endpoint-sorted list with
//! change notification and a version stamp a caller can use to detect that
//! a long-lived lazy sequence has been invalidated by a mutation.
//!
////////////////////////////////////////////////////////////////////////////////

use crate::collection::{Capabilities, IndexingSpeed, IntervalCollection, SortedIntervalCollection};
use crate::error::{CollectionError, Result};
use crate::interval::Interval;
use crate::observer::{CollectionEvent, ObserverSet, SubscriptionId};
use crate::sorted_list::SortedIntervalList;


////////////////////////////////////////////////////////////////////////////////
// SortedIntervalSet
////////////////////////////////////////////////////////////////////////////////
/// An endpoint-sorted, observable interval collection.
///
/// Wraps a [`SortedIntervalList`] for its admission policy and endpoint
/// ordering, and layers on top of it an [`ObserverSet`] that fires
/// [`CollectionEvent`]s on every mutation and advances a version counter.
/// Since Rust's borrow checker already prevents mutating `self` while a
/// borrowed sequence from it is alive, the version stamp is meaningful
/// across an `Rc<RefCell<_>>` boundary: take a
/// [`version_stamp`](Self::version_stamp) before releasing the borrow,
/// resume scanning later, and [`verify`](Self::verify) the stamp before
/// trusting a stale `Vec` snapshot.
pub struct SortedIntervalSet<T> {
    list: SortedIntervalList<T>,
    observers: ObserverSet<T>,
}

impl<T: Ord + Clone> SortedIntervalSet<T> {
    /// Creates an empty collection with the given admission policy.
    pub fn new(allow_overlaps: bool, allow_containments: bool, allow_reference_duplicates: bool) -> Self {
        SortedIntervalSet {
            list: SortedIntervalList::new(allow_overlaps, allow_containments, allow_reference_duplicates),
            observers: ObserverSet::new(),
        }
    }

    /// Creates an empty, containment-free, overlap-free collection.
    pub fn disjoint() -> Self {
        Self::new(false, false, false)
    }

    /// Registers `observer` to be called on every subsequent mutation.
    pub fn subscribe(&mut self, observer: Box<dyn FnMut(&CollectionEvent<T>)>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Removes a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Returns the current version stamp. Mutating the collection always
    /// advances it.
    pub fn version_stamp(&self) -> u64 {
        self.observers.version()
    }

    /// Returns `Ok(())` if `stamp` still matches the current version, or
    /// [`CollectionError::Invalidated`] if the collection has been mutated
    /// since `stamp` was taken.
    pub fn verify(&self, stamp: u64) -> Result<()> {
        if self.observers.version() == stamp {
            Ok(())
        } else {
            Err(CollectionError::Invalidated)
        }
    }
}

impl<T: Ord + Clone> IntervalCollection<T> for SortedIntervalSet<T> {
    fn len(&self) -> usize {
        self.list.len()
    }

    fn capabilities(&self) -> Capabilities {
        self.list.capabilities()
    }

    fn indexing_speed(&self) -> IndexingSpeed {
        self.list.indexing_speed()
    }

    fn add(&mut self, interval: Interval<T>) -> bool {
        if self.list.add(interval.clone()) {
            self.observers.notify_added(vec![interval]);
            true
        } else {
            false
        }
    }

    fn remove(&mut self, interval: &Interval<T>) -> bool {
        if self.list.remove(interval) {
            self.observers.notify_removed(vec![interval.clone()]);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        if !self.list.is_empty() {
            self.list.clear();
            self.observers.notify_cleared();
        }
    }

    fn contains(&self, interval: &Interval<T>) -> bool {
        self.list.contains(interval)
    }

    fn find_overlaps<'a>(&'a self, query: &Interval<T>) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        self.list.find_overlaps(query)
    }

    fn sorted<'a>(&'a self) -> Box<dyn Iterator<Item = Interval<T>> + 'a> {
        self.list.sorted()
    }
}

impl<T: Ord + Clone> SortedIntervalCollection<T> for SortedIntervalSet<T> {
    fn at(&self, i: usize) -> Option<Interval<T>> {
        self.list.at(i)
    }

    fn index_of(&self, query: &Interval<T>) -> Option<usize> {
        self.list.index_of(query)
    }
}

impl<T: Ord + Clone> crate::collection::ContainmentFreeIntervalCollection<T> for SortedIntervalSet<T> {}

// See the analogous impl on `sorted_list::SortedIntervalList`: only
// meaningful while `allow_overlaps` is `false`.
impl<T: Ord + Clone> crate::collection::FiniteIntervalCollection<T> for SortedIntervalSet<T> {}
