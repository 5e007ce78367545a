//! A first-in, first-out queue.

use std::fmt;

use crate::enumerate::{Enumerable, PositionalEnumerator};
use crate::error::CollectionError;

use super::copy_into;

/// A first-in, first-out queue over a contiguous backing sequence.
///
/// Enumeration walks the queue front to back, so `first()` is the next
/// element to be dequeued.
///
/// # Examples
///
/// ```rust
/// use colleq::prelude::*;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.peek(), Ok(&1));
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    objects: Vec<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Appends an element at the back.
    pub fn enqueue(&mut self, object: T) {
        self.objects.push(object);
    }

    /// Removes and returns the element at the front.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] when the queue is
    /// empty.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.objects.is_empty() {
            return Err(CollectionError::invalid_operation(
                "dequeue",
                "the queue is empty",
            ));
        }
        Ok(self.objects.remove(0))
    }

    /// Returns the element at the front without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] when the queue is
    /// empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.objects
            .first()
            .ok_or_else(|| CollectionError::invalid_operation("peek", "the queue is empty"))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` when the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Copies the elements, front to back, into `target` starting at
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

    /// Returns a copy of the backing sequence, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.objects.clone()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(objects: Vec<T>) -> Self {
        Self { objects }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            objects: iterator.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl<T: Clone> Enumerable for Queue<T> {
    type Key = usize;
    type Item = T;

    fn enumerator(&self) -> PositionalEnumerator<usize, T> {
        PositionalEnumerator::from_values(self.objects.iter().cloned())
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
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
impl<T: serde::Serialize> serde::Serialize for Queue<T> {
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
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Queue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
