// Copyright 2024 Skylor R. Schermer.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
////////////////////////////////////////////////////////////////////////////////
//!
//! Error types for collection preconditions.
//!
////////////////////////////////////////////////////////////////////////////////

use thiserror::Error;


////////////////////////////////////////////////////////////////////////////////
// CollectionError
////////////////////////////////////////////////////////////////////////////////
/// Failures that propagate out of the library rather than being reported as
/// a return value.
///
/// `add`/`remove`/`find_overlap` report rejection or absence as `false` or
/// `None`; lazy sequences never fail for absence. `CollectionError` is
/// reserved for precondition violations (caller bugs) and the distinguished
/// [`NoSuchItem`](CollectionError::NoSuchItem) case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The collection is read-only and does not support the attempted
    /// mutation.
    #[error("collection is read-only")]
    ReadOnly,

    /// The operation (`span`, `lowest_interval`, `highest_interval`, ...)
    /// requires a non-empty collection.
    #[error("operation requires a non-empty collection")]
    EmptyCollection,

    /// `choose()` was called on an empty collection.
    #[error("no such item in collection")]
    NoSuchItem,

    /// A lazy sequence was advanced after the collection it was derived
    /// from was mutated.
    #[error("iterator invalidated by a concurrent mutation")]
    Invalidated,
}

/// A `Result` alias for fallible collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
