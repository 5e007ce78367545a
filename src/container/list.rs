//! A growable ordered list over a contiguous backing sequence.

use std::fmt;

use crate::compare::{Comparer, DefaultComparer};
use crate::enumerate::{Enumerable, PositionalEnumerator};
use crate::error::CollectionError;

use super::ReadOnlyList;
use super::copy_into;

/// An ordered list of elements backed by a contiguous sequence.
///
/// Valid indices are exactly `0..len()` at all times: removal re-packs the
/// backing sequence, shifting later elements down. Index-taking operations
/// validate their arguments before mutating anything and report failures
/// as [`CollectionError`].
///
/// `List` implements [`Enumerable`] (keyed by 0-based position) and so
/// carries the whole [`Query`](crate::query::Query) operator set.
///
/// # Examples
///
/// ```rust
/// use colleq::prelude::*;
///
/// let mut list = List::new();
/// list.add("one");
/// list.add("three");
/// list.insert(1, "two").unwrap();
///
/// assert_eq!(list.to_vec(), vec!["one", "two", "three"]);
/// assert_eq!(list.index_of(&"two"), Some(1));
///
/// let removed = list.remove_at(0).unwrap();
/// assert_eq!(removed, "one");
/// assert_eq!(list.get(0), Ok(&"two"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T> {
    objects: Vec<T>,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Appends an element at the end.
    pub fn add(&mut self, object: T) {
        self.objects.push(object);
    }

    /// Appends every element of an enumerable source, in source order.
    pub fn add_range<E>(&mut self, enumerable: &E)
    where
        T: Clone,
        E: Enumerable<Item = T> + ?Sized,
    {
        let mut enumerator = enumerable.enumerator();
        while let Some(value) = enumerator.current() {
            self.objects.push(value.clone());
            enumerator.advance();
        }
    }

    /// Returns a read-only view over this list.
    pub const fn as_read_only(&self) -> ReadOnlyList<'_, T> {
        ReadOnlyList::new(self)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Returns `true` when some element equals `object`.
    pub fn contains(&self, object: &T) -> bool
    where
        T: PartialEq,
    {
        self.objects.contains(object)
    }

    /// Copies the elements into `target` starting at `index`, leaving
    /// elements before `index` untouched.
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

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns `true` when some element satisfies the predicate.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.objects.iter().any(predicate)
    }

    /// Returns the first element satisfying the predicate, if any.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.objects.iter().find(|&object| predicate(object))
    }

    /// Returns a new list of every element satisfying the predicate, in
    /// source order.
    pub fn find_all<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Self::from(
            self.objects
                .iter()
                .filter(|&object| predicate(object))
                .cloned()
                .collect::<Vec<_>>(),
        )
    }

    /// Returns the index of the first element equal to `object`, if any.
    pub fn index_of(&self, object: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.objects.iter().position(|candidate| candidate == object)
    }

    /// Inserts an element at `index`, shifting later elements up.
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index > len()`.
    pub fn insert(&mut self, index: usize, object: T) -> Result<(), CollectionError> {
        if index > self.objects.len() {
            return Err(CollectionError::out_of_range(
                "index",
                index,
                self.objects.len(),
            ));
        }
        self.objects.insert(index, object);
        Ok(())
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.objects
            .get(index)
            .ok_or_else(|| CollectionError::out_of_range("index", index, self.objects.len()))
    }

    /// Returns a mutable reference to the element at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.objects.get_mut(index)
    }

    /// Overwrites the element at an existing `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`;
    /// unlike [`insert`](Self::insert), `set` never grows the list.
    pub fn set(&mut self, index: usize, object: T) -> Result<(), CollectionError> {
        let length = self.objects.len();
        match self.objects.get_mut(index) {
            Some(slot) => {
                *slot = object;
                Ok(())
            }
            None => Err(CollectionError::out_of_range("index", index, length)),
        }
    }

    /// Removes every element equal to `object`, re-packing the sequence.
    /// Returns `true` when at least one element was removed.
    pub fn remove(&mut self, object: &T) -> bool
    where
        T: PartialEq,
    {
        let before = self.objects.len();
        self.objects.retain(|candidate| candidate != object);
        before != self.objects.len()
    }

    /// Removes every element satisfying the predicate, returning how many
    /// were removed.
    pub fn remove_all<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.objects.len();
        self.objects.retain(|candidate| !predicate(candidate));
        before - self.objects.len()
    }

    /// Removes and returns the element at `index`, shifting later
    /// elements down.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.objects.len() {
            return Err(CollectionError::out_of_range(
                "index",
                index,
                self.objects.len(),
            ));
        }
        Ok(self.objects.remove(index))
    }

    /// Removes `count` elements starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index > len()` or the
    /// range `index..index + count` reaches past the end (checked
    /// addition, so a huge `count` cannot wrap around the bound). Nothing
    /// is removed on failure.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<(), CollectionError> {
        let length = self.objects.len();
        if index > length {
            return Err(CollectionError::out_of_range("index", index, length));
        }
        let end = index
            .checked_add(count)
            .ok_or_else(|| CollectionError::out_of_range("count", count, length - index))?;
        if end > length {
            return Err(CollectionError::out_of_range("count", count, length - index));
        }
        self.objects.drain(index..end);
        Ok(())
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        self.objects.reverse();
    }

    /// Sorts the elements in place by natural ordering.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        self.sort_with(&DefaultComparer);
    }

    /// Sorts the elements in place with the given comparer.
    ///
    /// ```rust
    /// use colleq::prelude::*;
    ///
    /// let mut files = List::from(vec!["img10.png", "img2.png", "img1.png"]);
    /// files.sort_with(&NaturalStringComparer);
    /// assert_eq!(files.to_vec(), vec!["img1.png", "img2.png", "img10.png"]);
    /// ```
    pub fn sort_with<C>(&mut self, comparer: &C)
    where
        C: Comparer<T> + ?Sized,
    {
        self.objects.sort_by(|x, y| comparer.compare(x, y));
    }

    /// Returns the backing sequence as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.objects
    }

    /// Returns a copy of the backing sequence.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.objects.clone()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(objects: Vec<T>) -> Self {
        Self { objects }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            objects: iterator.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.objects.extend(iterator);
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl<T: Clone> Enumerable for List<T> {
    type Key = usize;
    type Item = T;

    fn enumerator(&self) -> PositionalEnumerator<usize, T> {
        PositionalEnumerator::from_values(self.objects.iter().cloned())
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
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

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
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
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut objects = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            objects.push(element);
        }
        Ok(List::from(objects))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty_list() {
        let list: List<i32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[rstest]
    fn test_add_appends_in_order() {
        let mut list = List::new();
        list.add(1);
        list.add(2);
        list.add(3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_add_range_appends_source_order() {
        let mut list = List::from(vec![1, 2]);
        let other = List::from(vec![3, 4]);
        list.add_range(&other);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_insert_in_middle_shifts_later_elements() {
        let mut list = List::from(vec!["one", "three"]);
        list.insert(1, "two").unwrap();
        assert_eq!(list.to_vec(), vec!["one", "two", "three"]);
    }

    #[rstest]
    fn test_insert_at_length_appends() {
        let mut list = List::from(vec![1, 2]);
        list.insert(2, 3).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_insert_past_length_fails() {
        let mut list = List::from(vec![1, 2]);
        let error = list.insert(3, 9).unwrap_err();
        assert_eq!(error, CollectionError::out_of_range("index", 3, 2));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_get_and_set() {
        let mut list = List::from(vec![1, 2, 3]);
        assert_eq!(list.get(1), Ok(&2));
        list.set(1, 9).unwrap();
        assert_eq!(list.get(1), Ok(&9));
    }

    #[rstest]
    fn test_set_past_length_fails() {
        let mut list = List::from(vec![1]);
        let error = list.set(1, 9).unwrap_err();
        assert_eq!(error, CollectionError::out_of_range("index", 1, 1));
    }

    #[rstest]
    fn test_remove_drops_every_equal_element() {
        let mut list = List::from(vec![1, 2, 1, 3, 1]);
        assert!(list.remove(&1));
        assert_eq!(list.to_vec(), vec![2, 3]);
        assert!(!list.remove(&1));
    }

    #[rstest]
    fn test_remove_at_shifts_later_elements_down() {
        let mut list = List::from(vec!["one", "two", "three"]);
        assert_eq!(list.remove_at(0), Ok("one"));
        assert_eq!(list.get(0), Ok(&"two"));
        assert_eq!(list.get(1), Ok(&"three"));
    }

    #[rstest]
    fn test_remove_at_out_of_range_fails() {
        let mut list = List::from(vec![1]);
        let error = list.remove_at(1).unwrap_err();
        assert_eq!(error, CollectionError::out_of_range("index", 1, 1));
    }

    #[rstest]
    fn test_remove_all_returns_removed_count() {
        let mut list = List::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(list.remove_all(|n| n % 2 == 0), 2);
        assert_eq!(list.to_vec(), vec![1, 3, 5]);
    }

    #[rstest]
    fn test_remove_range_in_bounds() {
        let mut list = List::from(vec![1, 2, 3, 4, 5]);
        list.remove_range(1, 3).unwrap();
        assert_eq!(list.to_vec(), vec![1, 5]);
    }

    #[rstest]
    fn test_remove_range_zero_count_is_noop() {
        let mut list = List::from(vec![1, 2]);
        list.remove_range(2, 0).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_remove_range_past_end_fails_without_mutating() {
        let mut list = List::from(vec![1, 2, 3]);
        let error = list.remove_range(1, 3).unwrap_err();
        assert_eq!(error, CollectionError::out_of_range("count", 3, 2));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_remove_range_overflowing_count_fails() {
        let mut list = List::from(vec![1, 2, 3]);
        assert!(list.remove_range(1, usize::MAX).is_err());
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_index_of_finds_first_match() {
        let list = List::from(vec![1, 2, 2, 3]);
        assert_eq!(list.index_of(&2), Some(1));
        assert_eq!(list.index_of(&9), None);
    }

    #[rstest]
    fn test_find_and_find_all() {
        let list = List::from(vec![1, 2, 3, 4]);
        assert_eq!(list.find(|n| n % 2 == 0), Some(&2));
        assert_eq!(list.find(|n| *n > 9), None);
        assert_eq!(list.find_all(|n| n % 2 == 0).to_vec(), vec![2, 4]);
    }

    #[rstest]
    fn test_exists() {
        let list = List::from(vec![1, 2, 3]);
        assert!(list.exists(|n| *n == 2));
        assert!(!list.exists(|n| *n == 9));
    }

    #[rstest]
    fn test_copy_to_writes_contiguously_from_index() {
        let list = List::from(vec![7, 8]);
        let mut target = [0, 1, 2, 3, 4];
        list.copy_to(&mut target, 2).unwrap();
        assert_eq!(target, [0, 1, 7, 8, 4]);
    }

    #[rstest]
    fn test_copy_to_that_does_not_fit_writes_nothing() {
        let list = List::from(vec![7, 8, 9]);
        let mut target = [0, 1, 2, 3];
        let error = list.copy_to(&mut target, 2).unwrap_err();
        assert_eq!(error, CollectionError::out_of_range("index", 2, 4));
        assert_eq!(target, [0, 1, 2, 3]);
    }

    #[rstest]
    fn test_reverse() {
        let mut list = List::from(vec![1, 2, 3]);
        list.reverse();
        assert_eq!(list.to_vec(), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_sort_by_natural_ordering() {
        let mut list = List::from(vec![3, 1, 2]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_sort_with_comparer() {
        use crate::compare::CaseInsensitiveStringComparer;

        let mut list = List::from(vec!["banana", "Apple", "cherry"]);
        list.sort_with(&CaseInsensitiveStringComparer);
        assert_eq!(list.to_vec(), vec!["Apple", "banana", "cherry"]);
    }

    #[rstest]
    fn test_clear() {
        let mut list = List::from(vec![1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_display() {
        let list = List::from(vec![1, 2, 3]);
        assert_eq!(format!("{list}"), "[1, 2, 3]");
        let empty: List<i32> = List::new();
        assert_eq!(format!("{empty}"), "[]");
    }

    #[rstest]
    fn test_indices_stay_contiguous_after_mixed_mutations() {
        let mut list = List::from(vec![0, 1, 2, 3, 4, 5]);
        list.remove_at(2).unwrap();
        list.insert(0, 9).unwrap();
        list.remove_range(3, 2).unwrap();
        list.remove(&9);

        for index in 0..list.len() {
            assert!(list.get(index).is_ok());
        }
        assert!(list.get(list.len()).is_err());
    }
}
