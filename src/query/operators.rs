//! The cross-container query operators.

use crate::compare::{DefaultEqualityComparer, EqualityComparer};
use crate::container::List;
use crate::enumerate::{Enumerable, KeyValue};
use crate::error::CollectionError;

/// LINQ-style query operators over any enumerable source.
///
/// Blanket-implemented for every [`Enumerable`]; containers only provide
/// the enumerator capability and inherit the whole operator set. Each
/// operator takes one pass (short-circuiting where documented) over a
/// fresh snapshot enumerator and leaves the source untouched.
pub trait Query: Enumerable {
    /// Returns `true` when every element satisfies the predicate.
    ///
    /// Vacuously `true` on an empty source; short-circuits on the first
    /// element that fails.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut enumerator = self.enumerator();
        while let Some(value) = enumerator.current() {
            if !predicate(value) {
                return false;
            }
            enumerator.advance();
        }
        true
    }

    /// Returns `true` when the source holds at least one element.
    fn any(&self) -> bool {
        self.enumerator().valid()
    }

    /// Returns `true` when at least one element satisfies the predicate.
    ///
    /// Short-circuits on the first match.
    fn any_where<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut enumerator = self.enumerator();
        while let Some(value) = enumerator.current() {
            if predicate(value) {
                return true;
            }
            enumerator.advance();
        }
        false
    }

    /// Returns `true` when some element equals `object` by value equality.
    fn contains(&self, object: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.any_where(|value| value == object)
    }

    /// Returns the total number of elements.
    fn count(&self) -> usize {
        self.enumerator().len()
    }

    /// Returns the number of elements satisfying the predicate.
    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matches = 0;
        let mut enumerator = self.enumerator();
        while let Some(value) = enumerator.current() {
            if predicate(value) {
                matches += 1;
            }
            enumerator.advance();
        }
        matches
    }

    /// Returns the distinct elements under value equality, keeping the
    /// first occurrence of each and preserving the source order.
    fn distinct(&self) -> List<Self::Item>
    where
        Self::Item: PartialEq,
    {
        self.distinct_where(&DefaultEqualityComparer)
    }

    /// Returns the distinct elements under the given equality comparer,
    /// keeping the first occurrence of each equivalence class.
    ///
    /// Linear scan of the accumulated result per element, O(n·m); fine for
    /// the in-memory, moderate-size sources this library targets.
    fn distinct_where<C>(&self, comparer: &C) -> List<Self::Item>
    where
        C: EqualityComparer<Self::Item> + ?Sized,
    {
        let mut results: Vec<Self::Item> = Vec::new();
        let mut enumerator = self.enumerator();
        while let Some(value) = enumerator.current() {
            if !results.iter().any(|seen| comparer.equals(seen, value)) {
                results.push(value.clone());
            }
            enumerator.advance();
        }
        List::from(results)
    }

    /// Returns the element at `index` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= count`.
    fn element_at(&self, index: usize) -> Result<Self::Item, CollectionError> {
        let enumerator = self.enumerator();
        enumerator
            .value_at(index)
            .cloned()
            .ok_or_else(|| CollectionError::out_of_range("index", index, enumerator.len()))
    }

    /// Returns the element at `index`, or `default` when out of range.
    fn element_at_or_default(&self, index: usize, default: Self::Item) -> Self::Item {
        self.enumerator().value_at(index).cloned().unwrap_or(default)
    }

    /// Returns the elements with no equal counterpart in `excluded`,
    /// preserving the source order.
    fn except(&self, excluded: &[Self::Item]) -> List<Self::Item>
    where
        Self::Item: PartialEq,
    {
        self.except_where(excluded, &DefaultEqualityComparer)
    }

    /// Returns the elements with no equivalent (under the comparer) in
    /// `excluded`, preserving the source order.
    fn except_where<C>(&self, excluded: &[Self::Item], comparer: &C) -> List<Self::Item>
    where
        C: EqualityComparer<Self::Item> + ?Sized,
    {
        let mut results: Vec<Self::Item> = Vec::new();
        let mut enumerator = self.enumerator();
        while let Some(value) = enumerator.current() {
            if !excluded.iter().any(|banned| comparer.equals(value, banned)) {
                results.push(value.clone());
            }
            enumerator.advance();
        }
        List::from(results)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] when the source is
    /// empty.
    fn first(&self) -> Result<Self::Item, CollectionError> {
        self.enumerator().value_at(0).cloned().ok_or_else(|| {
            CollectionError::invalid_operation("first", "the source sequence is empty")
        })
    }

    /// Returns the first element satisfying the predicate.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] when no element
    /// matches.
    fn first_where<P>(&self, mut predicate: P) -> Result<Self::Item, CollectionError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut enumerator = self.enumerator();
        while let Some(value) = enumerator.current() {
            if predicate(value) {
                return Ok(value.clone());
            }
            enumerator.advance();
        }
        Err(CollectionError::invalid_operation(
            "first_where",
            "no element satisfies the predicate",
        ))
    }

    /// Returns the first element, or `default` when the source is empty.
    fn first_or_default(&self, default: Self::Item) -> Self::Item {
        self.enumerator().value_at(0).cloned().unwrap_or(default)
    }

    /// Returns the first element satisfying the predicate, or `default`
    /// when none matches.
    fn first_or_default_where<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.first_where(predicate).unwrap_or(default)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] when the source is
    /// empty.
    fn last(&self) -> Result<Self::Item, CollectionError> {
        let enumerator = self.enumerator();
        enumerator
            .len()
            .checked_sub(1)
            .and_then(|position| enumerator.value_at(position))
            .cloned()
            .ok_or_else(|| {
                CollectionError::invalid_operation("last", "the source sequence is empty")
            })
    }

    /// Returns the last element satisfying the predicate.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] when no element
    /// matches.
    fn last_where<P>(&self, mut predicate: P) -> Result<Self::Item, CollectionError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matched: Option<Self::Item> = None;
        let mut enumerator = self.enumerator();
        while let Some(value) = enumerator.current() {
            if predicate(value) {
                matched = Some(value.clone());
            }
            enumerator.advance();
        }
        matched.ok_or_else(|| {
            CollectionError::invalid_operation("last_where", "no element satisfies the predicate")
        })
    }

    /// Returns the last element, or `default` when the source is empty.
    fn last_or_default(&self, default: Self::Item) -> Self::Item {
        self.last().unwrap_or(default)
    }

    /// Returns the last element satisfying the predicate, or `default`
    /// when none matches.
    fn last_or_default_where<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.last_where(predicate).unwrap_or(default)
    }

    /// Drops the first `number` elements, preserving the order of the
    /// remainder. Returns an empty list when `number >= count`.
    fn skip(&self, number: usize) -> List<Self::Item> {
        let mut results: Vec<Self::Item> = Vec::new();
        let mut enumerator = self.enumerator();
        let mut dropped = 0_usize;
        while let Some(value) = enumerator.current() {
            if dropped < number {
                dropped += 1;
            } else {
                results.push(value.clone());
            }
            enumerator.advance();
        }
        List::from(results)
    }

    /// Materializes the full sequence as pairs, preserving the keys
    /// emitted by the source's enumerator.
    fn to_array(&self) -> Vec<KeyValue<Self::Key, Self::Item>> {
        self.enumerator().collect()
    }

    /// Returns the elements satisfying the predicate, preserving the
    /// source order.
    fn filter<P>(&self, mut predicate: P) -> List<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut results: Vec<Self::Item> = Vec::new();
        let mut enumerator = self.enumerator();
        while let Some(value) = enumerator.current() {
            if predicate(value) {
                results.push(value.clone());
            }
            enumerator.advance();
        }
        List::from(results)
    }
}

impl<E: Enumerable + ?Sized> Query for E {}
