//! A read-only view over a list.

use std::fmt;

use crate::enumerate::{Enumerable, PositionalEnumerator};
use crate::error::CollectionError;

use super::List;

/// A borrowed, read-only view over a [`List`].
///
/// Exposes lookup and enumeration but no mutation surface at all; obtained
/// through [`List::as_read_only`] or from a
/// [`Dictionary`](crate::container::Dictionary)'s `keys`/`values`
/// accessors. Being [`Enumerable`], the view answers the full
/// [`Query`](crate::query::Query) operator set.
///
/// # Examples
///
/// ```rust
/// use colleq::prelude::*;
///
/// let list = List::from(vec![1, 2, 3]);
/// let view = list.as_read_only();
///
/// assert_eq!(view.len(), 3);
/// assert_eq!(view.get(1), Ok(&2));
/// assert_eq!(view.last(), Ok(3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReadOnlyList<'a, T> {
    inner: &'a List<T>,
}

impl<'a, T> ReadOnlyList<'a, T> {
    pub(crate) const fn new(inner: &'a List<T>) -> Self {
        Self { inner }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when the underlying list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&'a T, CollectionError> {
        self.inner.get(index)
    }

    /// Returns `true` when some element equals `object`.
    pub fn contains(&self, object: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.contains(object)
    }

    /// Copies the elements into `target` starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when the elements do not
    /// fit, in which case nothing is written.
    pub fn copy_to(&self, target: &mut [T], index: usize) -> Result<(), CollectionError>
    where
        T: Clone,
    {
        self.inner.copy_to(target, index)
    }

    /// Returns the underlying elements as a slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> IntoIterator for &ReadOnlyList<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.as_slice().iter()
    }
}

impl<T: Clone> Enumerable for ReadOnlyList<'_, T> {
    type Key = usize;
    type Item = T;

    fn enumerator(&self) -> PositionalEnumerator<usize, T> {
        self.inner.enumerator()
    }
}

impl<T: fmt::Display> fmt::Display for ReadOnlyList<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(formatter)
    }
}
