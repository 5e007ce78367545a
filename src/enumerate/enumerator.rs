//! The positional enumerator and the capability to produce one.

use crate::error::CollectionError;

use super::KeyValue;

/// A cursor over a snapshot of an ordered sequence of key-value pairs.
///
/// The enumerator owns a copy of the pairs taken at construction, so a
/// source mutated afterwards is never reflected in an in-flight enumerator.
/// The cursor starts on the first pair; [`valid`](Self::valid) reports
/// whether the cursor currently indexes an existing pair.
///
/// # Examples
///
/// ```rust
/// use colleq::prelude::*;
///
/// let list = List::from(vec!["one", "two", "three"]);
/// let mut enumerator = list.enumerator();
///
/// assert_eq!(enumerator.current(), Some(&"one"));
/// enumerator.advance();
/// assert_eq!(enumerator.current(), Some(&"two"));
///
/// enumerator.seek(2).unwrap();
/// assert_eq!(enumerator.key(), Some(&2));
/// assert_eq!(enumerator.current(), Some(&"three"));
///
/// enumerator.advance();
/// assert!(!enumerator.valid());
/// ```
#[derive(Debug, Clone)]
pub struct PositionalEnumerator<K, V> {
    pairs: Vec<KeyValue<K, V>>,
    position: usize,
}

impl<K, V> PositionalEnumerator<K, V> {
    /// Creates an enumerator over the given pairs, cursor on the first.
    pub fn from_pairs(pairs: Vec<KeyValue<K, V>>) -> Self {
        Self { pairs, position: 0 }
    }

    /// Returns the value at the cursor, or `None` when the cursor is past
    /// the end.
    pub fn current(&self) -> Option<&V> {
        self.value_at(self.position)
    }

    /// Returns the key at the cursor, or `None` when the cursor is past
    /// the end.
    pub fn key(&self) -> Option<&K> {
        self.pairs.get(self.position).map(KeyValue::key)
    }

    /// Returns the value at the given position without moving the cursor.
    pub fn value_at(&self, position: usize) -> Option<&V> {
        self.pairs.get(position).map(KeyValue::value)
    }

    /// Advances the cursor by one position.
    ///
    /// Advancing past the end is a no-op as far as safety goes: subsequent
    /// [`valid`](Self::valid) calls simply return `false`.
    pub fn advance(&mut self) {
        if self.position < self.pairs.len() {
            self.position += 1;
        }
    }

    /// Resets the cursor to the first pair.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `position >= len`.
    pub fn seek(&mut self, position: usize) -> Result<(), CollectionError> {
        if position >= self.pairs.len() {
            return Err(CollectionError::out_of_range(
                "position",
                position,
                self.pairs.len(),
            ));
        }
        self.position = position;
        Ok(())
    }

    /// Returns `true` when a pair exists at the cursor.
    pub fn valid(&self) -> bool {
        self.position < self.pairs.len()
    }

    /// Returns the number of pairs in the snapshot.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` when the snapshot holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<V> PositionalEnumerator<usize, V> {
    /// Creates an enumerator over values keyed by their 0-based position.
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        let pairs = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| KeyValue::new(position, value))
            .collect();
        Self::from_pairs(pairs)
    }
}

/// Iteration yields owned pairs cloned from the snapshot, starting at the
/// current cursor position and advancing it, so a partially-driven
/// enumerator resumes where it left off.
impl<K: Clone, V: Clone> Iterator for PositionalEnumerator<K, V> {
    type Item = KeyValue<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.pairs.get(self.position).cloned();
        if pair.is_some() {
            self.position += 1;
        }
        pair
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pairs.len() - self.position.min(self.pairs.len());
        (remaining, Some(remaining))
    }
}

impl<K: Clone, V: Clone> ExactSizeIterator for PositionalEnumerator<K, V> {}

/// The capability to produce a positional enumerator.
///
/// Implementing this is all a container needs to gain the full query
/// operator set: [`Query`](crate::query::Query) is blanket-implemented for
/// every `Enumerable`.
pub trait Enumerable {
    /// The key type emitted by enumeration (`usize` positions for
    /// list-like containers, the dictionary's own key type otherwise).
    type Key: Clone;

    /// The element type emitted by enumeration.
    type Item: Clone;

    /// Produces an enumerator over a snapshot of the current contents.
    fn enumerator(&self) -> PositionalEnumerator<Self::Key, Self::Item>;
}
