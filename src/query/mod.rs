//! The query operator set shared by every enumerable source.
//!
//! [`Query`] is a default-method extension trait blanket-implemented for
//! everything that is [`Enumerable`](crate::enumerate::Enumerable), so
//! [`List`](crate::container::List), [`Dictionary`](crate::container::Dictionary),
//! [`Queue`](crate::container::Queue), and [`Stack`](crate::container::Stack)
//! all answer the same operators with identical semantics. Every operator
//! drives a fresh enumerator over a snapshot of the source and never
//! mutates it.
//!
//! Operators that filter (`distinct`, `except`, `filter`, `skip`) return a
//! new [`List`](crate::container::List) preserving the source's relative
//! order; operators that select a single element (`first`, `last`,
//! `element_at`) fail with a [`CollectionError`](crate::error::CollectionError)
//! on empty or out-of-range sources unless the `_or_default` variant is
//! used.
//!
//! ```rust
//! use colleq::prelude::*;
//!
//! let queue = Queue::from(vec![1, 2, 2, 3, 4]);
//!
//! assert_eq!(queue.distinct().to_vec(), vec![1, 2, 3, 4]);
//! assert_eq!(queue.count_where(|n| n % 2 == 0), 3);
//! assert_eq!(queue.last(), Ok(4));
//! assert_eq!(queue.skip(3).to_vec(), vec![3, 4]);
//! ```
//!
//! [`DynamicQuery`] supplements the set with `of_type`, a runtime-type
//! filter for sources holding dynamically-typed elements.

mod dynamic;
mod operators;

pub use dynamic::{DynamicElement, DynamicQuery, dynamic};
pub use operators::Query;
