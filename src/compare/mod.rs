//! Ordering and equality capabilities.
//!
//! Containers never hardcode how their elements are ordered or compared for
//! equality. Instead, operations that need either take a capability object:
//!
//! - [`Comparer`]: a three-way ordering between two elements, with
//!   [`DefaultComparer`] (natural ordering), [`CaseInsensitiveStringComparer`],
//!   and [`NaturalStringComparer`] (alphanumeric ordering where digit runs
//!   compare by numeric value) as stock implementations.
//! - [`EqualityComparer`]: a boolean equivalence test, with
//!   [`DefaultEqualityComparer`] (value equality) as the stock
//!   implementation, used by `distinct` and `except`.
//!
//! All stock comparers are zero-sized and `Default`-constructible, so the
//! natural way to supply one is a fresh value at the call site:
//!
//! ```rust
//! use colleq::prelude::*;
//!
//! let mut list = List::from(vec!["img10.png", "img2.png"]);
//! list.sort_with(&NaturalStringComparer);
//! assert_eq!(list.to_vec(), vec!["img2.png", "img10.png"]);
//! ```

mod comparer;
mod equality;

pub use comparer::{
    CaseInsensitiveStringComparer, Comparer, DefaultComparer, NaturalStringComparer,
};
pub use equality::{DefaultEqualityComparer, EqualityComparer};

static_assertions::assert_obj_safe!(Comparer<i32>, EqualityComparer<i32>);
