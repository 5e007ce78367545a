//! Runtime-type filtering for dynamically-typed elements.

use std::any::Any;
use std::rc::Rc;

use crate::container::List;
use crate::enumerate::Enumerable;

/// A dynamically-typed element: a shared handle to any `'static` value.
///
/// Containers of `DynamicElement` hold elements of mixed runtime types and
/// gain the [`DynamicQuery::of_type`] filter on top of the regular query
/// operators.
pub type DynamicElement = Rc<dyn Any>;

/// Wraps a value as a [`DynamicElement`].
///
/// ```rust
/// use colleq::prelude::*;
///
/// let list = List::from(vec![dynamic(1_i32), dynamic("two"), dynamic(3_i32)]);
/// assert_eq!(list.of_type::<i32>().to_vec(), vec![1, 3]);
/// ```
pub fn dynamic<T: Any>(value: T) -> DynamicElement {
    Rc::new(value)
}

/// Query operators available when the element type is dynamically typed.
///
/// Blanket-implemented for every enumerable whose item is a
/// [`DynamicElement`].
pub trait DynamicQuery: Enumerable<Item = DynamicElement> {
    /// Keeps only the elements whose runtime type is `U`, preserving the
    /// source order.
    ///
    /// The match is a runtime type-tag comparison: an element kept here is
    /// exactly one that [`Any::downcast_ref`] resolves to `U`.
    fn of_type<U: Any + Clone>(&self) -> List<U> {
        let mut results: Vec<U> = Vec::new();
        let mut enumerator = self.enumerator();
        while let Some(element) = enumerator.current() {
            if let Some(matched) = element.downcast_ref::<U>() {
                results.push(matched.clone());
            }
            enumerator.advance();
        }
        List::from(results)
    }
}

impl<E: Enumerable<Item = DynamicElement> + ?Sized> DynamicQuery for E {}
