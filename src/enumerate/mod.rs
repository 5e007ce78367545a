//! The enumeration protocol shared by every container.
//!
//! This module provides the pieces every container composes over:
//!
//! - [`KeyValue`]: an immutable key-value pair, the unit of enumeration.
//! - [`PositionalEnumerator`]: a cursor over a **snapshot** of a container's
//!   pairs, supporting current/advance/rewind/seek/valid operations.
//! - [`Enumerable`]: the capability to produce such an enumerator, which is
//!   all a type needs to gain the full query operator set through
//!   [`Query`](crate::query::Query).
//!
//! # Snapshot Semantics
//!
//! An enumerator copies the source's pairs at construction. Mutating the
//! container afterwards never affects an in-flight enumerator, and two
//! enumerators over the same container never interfere:
//!
//! ```rust
//! use colleq::prelude::*;
//!
//! let mut list = List::from(vec![1, 2, 3]);
//! let enumerator = list.enumerator();
//! list.clear();
//!
//! // The enumerator still sees the three elements it snapshotted.
//! assert_eq!(enumerator.len(), 3);
//! assert_eq!(list.count(), 0);
//! ```

mod enumerator;
mod pair;

pub use enumerator::{Enumerable, PositionalEnumerator};
pub use pair::KeyValue;
