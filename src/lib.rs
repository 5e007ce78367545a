//! # colleq
//!
//! Typed ordered collections unified under a shared enumeration and
//! query protocol.
//!
//! ## Overview
//!
//! This library provides in-memory containers — [`List`], [`Dictionary`],
//! [`Queue`], and [`Stack`] — that all speak the same two protocols:
//!
//! - **Enumeration**: every container produces a [`PositionalEnumerator`],
//!   a cursor over a snapshot of its key-value pairs supporting
//!   current/advance/rewind/seek/valid operations.
//! - **Query**: every container gets the full LINQ-style operator set
//!   (`all`, `any`, `distinct`, `except`, `first`, `last`, `element_at`,
//!   `skip`, `filter`, ...) for free through the [`Query`] extension trait,
//!   which is blanket-implemented for anything [`Enumerable`].
//!
//! Ordering and de-duplication are pluggable through the [`Comparer`] and
//! [`EqualityComparer`] capabilities, injected per call rather than stored
//! as container state.
//!
//! ## Error Semantics
//!
//! Every fallible operation validates its arguments before touching any
//! state and reports failures through [`CollectionError`]: out-of-range
//! indices, structurally-empty sources (`first` on nothing, `dequeue` on an
//! empty queue), and duplicate dictionary keys. No operation leaves a
//! container partially mutated on failure.
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for all containers. Sequences
//!   round-trip in order; dictionaries re-validate key uniqueness while
//!   decoding.
//!
//! ## Example
//!
//! ```rust
//! use colleq::prelude::*;
//!
//! let mut list = List::from(vec!["one", "two", "two", "three"]);
//! list.add("four");
//!
//! assert_eq!(list.count(), 5);
//! assert_eq!(list.distinct().to_vec(), vec!["one", "two", "three", "four"]);
//! assert_eq!(list.first(), Ok("one"));
//! assert!(list.all(|word| !word.is_empty()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use colleq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compare::*;
    pub use crate::container::*;
    pub use crate::enumerate::*;
    pub use crate::error::*;
    pub use crate::query::*;
}

pub mod compare;
pub mod container;
pub mod enumerate;
pub mod error;
pub mod query;

pub use compare::{
    CaseInsensitiveStringComparer, Comparer, DefaultComparer, DefaultEqualityComparer,
    EqualityComparer, NaturalStringComparer,
};
pub use container::{Dictionary, List, Queue, ReadOnlyList, Stack};
pub use enumerate::{Enumerable, KeyValue, PositionalEnumerator};
pub use error::CollectionError;
pub use query::{DynamicElement, DynamicQuery, Query};
