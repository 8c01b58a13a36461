// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! Change notification for the dynamic collections.
//!
//! The corpus this crate is built from used a multicast delegate for this;
//! an observer set of boxed closures is the natural single-threaded Rust
//! substitute. Every mutation also advances a version counter, which the
//! dynamic collections (`sorted_collection`, `dynamic_containment`) use to
//! invalidate any outstanding lazy sequence taken out before the mutation.
//!
////////////////////////////////////////////////////////////////////////////////

use crate::interval::Interval;


////////////////////////////////////////////////////////////////////////////////
// CollectionEvent
////////////////////////////////////////////////////////////////////////////////
/// A change reported to a collection's observers.
///
/// `CollectionChanged` fires after every other event, as a catch-all for
/// observers that only care that *something* happened.
#[derive(Debug, Clone)]
pub enum CollectionEvent<T> {
    /// One or more intervals were admitted.
    ItemsAdded(Vec<Interval<T>>),
    /// One or more intervals were removed.
    ItemsRemoved(Vec<Interval<T>>),
    /// Every admitted interval was removed at once.
    CollectionCleared,
    /// A catch-all fired after any of the above.
    CollectionChanged,
}


////////////////////////////////////////////////////////////////////////////////
// ObserverSet
////////////////////////////////////////////////////////////////////////////////
/// A token identifying a subscribed observer, returned by
/// [`ObserverSet::subscribe`] for later use with
/// [`ObserverSet::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

struct Slot<T> {
    id: SubscriptionId,
    observer: Box<dyn FnMut(&CollectionEvent<T>)>,
}

/// Holds the observers subscribed to a collection, and the version counter
/// that invalidates lazy sequences across a mutation.
pub struct ObserverSet<T> {
    slots: Vec<Slot<T>>,
    next_id: usize,
    version: u64,
}

impl<T> Default for ObserverSet<T> {
    fn default() -> Self {
        ObserverSet { slots: Vec::new(), next_id: 0, version: 0 }
    }
}

impl<T> ObserverSet<T> {
    /// Creates an empty observer set at version zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current version. Any lazy sequence captured at a given
    /// version is no longer valid once this advances.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Registers `observer`, returning a handle that can later be passed to
    /// [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, observer: Box<dyn FnMut(&CollectionEvent<T>)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot { id, observer });
        id
    }

    /// Removes a previously registered observer. Returns `false` if `id`
    /// does not name a current subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.id != id);
        self.slots.len() != before
    }

    fn fire(&mut self, event: CollectionEvent<T>) {
        self.version += 1;
        for slot in &mut self.slots {
            (slot.observer)(&event);
        }
        for slot in &mut self.slots {
            (slot.observer)(&CollectionEvent::CollectionChanged);
        }
    }

    /// Reports that `items` were admitted, and advances the version
    /// counter.
    pub fn notify_added(&mut self, items: Vec<Interval<T>>) {
        if items.is_empty() {
            return;
        }
        self.fire(CollectionEvent::ItemsAdded(items));
    }

    /// Reports that `items` were removed, and advances the version
    /// counter.
    pub fn notify_removed(&mut self, items: Vec<Interval<T>>) {
        if items.is_empty() {
            return;
        }
        self.fire(CollectionEvent::ItemsRemoved(items));
    }

    /// Reports that the collection was cleared, and advances the version
    /// counter.
    pub fn notify_cleared(&mut self) {
        self.fire(CollectionEvent::CollectionCleared);
    }
}
