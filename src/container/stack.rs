//! A last-in, first-out stack.

use std::fmt;

use crate::enumerate::{Enumerable, PositionalEnumerator};
use crate::error::CollectionError;

use super::copy_into;

/// A last-in, first-out stack over a contiguous backing sequence.
///
/// Enumeration walks the backing sequence bottom to top, so `last()` is
/// the element [`pop`](Self::pop) would return.
///
/// # Examples
///
/// ```rust
/// use colleq::prelude::*;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    objects: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Pushes an element on top.
    pub fn push(&mut self, object: T) {
        self.objects.push(object);
    }

    /// Removes and returns the element on top.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] when the stack is
    /// empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.objects
            .pop()
            .ok_or_else(|| CollectionError::invalid_operation("pop", "the stack is empty"))
    }

    /// Returns the element on top without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] when the stack is
    /// empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.objects
            .last()
            .ok_or_else(|| CollectionError::invalid_operation("peek", "the stack is empty"))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` when the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Copies the elements, bottom to top, into `target` starting at
    /// `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when the elements do not
    /// fit, in which case nothing is written.
    pub fn copy_to(&self, target: &mut [T], index: usize) -> Result<(), CollectionError>
    where
        T: Clone,
    {
        copy_into(&self.objects, target, index)
    }

    /// Returns a copy of the backing sequence, bottom to top.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.objects.clone()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(objects: Vec<T>) -> Self {
        Self { objects }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            objects: iterator.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl<T: Clone> Enumerable for Stack<T> {
    type Key = usize;
    type Item = T;

    fn enumerator(&self) -> PositionalEnumerator<usize, T> {
        PositionalEnumerator::from_values(self.objects.iter().cloned())
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Stack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_lifo_ordering() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
    }

    #[rstest]
    fn test_pop_empty_fails() {
        let mut stack: Stack<i32> = Stack::new();
        let error = stack.pop().unwrap_err();
        assert_eq!(
            error,
            CollectionError::invalid_operation("pop", "the stack is empty")
        );
    }

    #[rstest]
    fn test_peek_returns_top_without_removing() {
        let mut stack = Stack::from(vec![1, 2]);
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(2));
    }

    #[rstest]
    fn test_peek_empty_fails() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.peek().is_err());
    }

    #[rstest]
    fn test_copy_to() {
        let stack = Stack::from(vec![1, 2, 3]);
        let mut target = [0; 4];
        stack.copy_to(&mut target, 0).unwrap();
        assert_eq!(target, [1, 2, 3, 0]);
    }

    #[rstest]
    fn test_enumeration_is_bottom_to_top() {
        use crate::query::Query;

        let stack = Stack::from(vec![1, 2, 3]);
        assert_eq!(stack.first(), Ok(1));
        assert_eq!(stack.last(), Ok(3));
    }
}
