//! An insertion-ordered dictionary over two parallel sequences.

use std::fmt;

use crate::enumerate::{Enumerable, KeyValue, PositionalEnumerator};
use crate::error::CollectionError;

use super::{List, ReadOnlyList, copy_into};

/// An insertion-ordered dictionary built from two parallel [`List`]s.
///
/// Keys and values live in two backing sequences that stay the same length
/// and index-aligned at all times: `keys[i]` corresponds to `values[i]`
/// for every `i`. Every mutation updates both sequences before returning.
/// Key lookup is a linear scan, which keeps insertion order observable
/// through enumeration.
///
/// [`add`](Self::add) refuses a key that is already present;
/// [`set`](Self::set) is the overwrite-or-insert counterpart. The two
/// contracts are intentionally different.
///
/// # Examples
///
/// ```rust
/// use colleq::prelude::*;
///
/// let mut dictionary = Dictionary::new();
/// dictionary.add("one", 1).unwrap();
/// dictionary.add("two", 2).unwrap();
///
/// assert!(dictionary.add("one", 99).is_err());
/// dictionary.set("one", 99);
///
/// assert_eq!(dictionary.get(&"one"), Some(&99));
/// assert!(dictionary.remove(&"two"));
/// assert!(!dictionary.contains_key(&"two"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary<K, V> {
    keys: List<K>,
    values: List<V>,
}

impl<K, V> Dictionary<K, V> {
    /// Creates an empty dictionary.
    pub const fn new() -> Self {
        Self {
            keys: List::new(),
            values: List::new(),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Returns a read-only view over the keys, in insertion order.
    pub const fn keys(&self) -> ReadOnlyList<'_, K> {
        self.keys.as_read_only()
    }

    /// Returns a read-only view over the values, in insertion order.
    pub const fn values(&self) -> ReadOnlyList<'_, V> {
        self.values.as_read_only()
    }

    /// Iterates the entries as `(&key, &value)` in insertion order.
    pub fn iter(&self) -> std::iter::Zip<std::slice::Iter<'_, K>, std::slice::Iter<'_, V>> {
        self.keys.as_slice().iter().zip(self.values.as_slice())
    }
}

impl<K: PartialEq, V> Dictionary<K, V> {
    /// Adds a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] when the key is already
    /// present; the dictionary is unchanged. Use [`set`](Self::set) to
    /// overwrite instead.
    pub fn add(&mut self, key: K, value: V) -> Result<(), CollectionError>
    where
        K: fmt::Debug,
    {
        if self.contains_key(&key) {
            return Err(CollectionError::duplicate_key(format!("{key:?}")));
        }
        self.keys.add(key);
        self.values.add(value);
        Ok(())
    }

    /// Overwrites the value for `key`, inserting the entry when the key is
    /// not present yet.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(index) = self.keys.index_of(&key) {
            if let Some(slot) = self.values.get_mut(index) {
                *slot = value;
            }
        } else {
            self.keys.add(key);
            self.values.add(value);
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.keys
            .index_of(key)
            .and_then(|index| self.values.as_slice().get(index))
    }

    /// Returns `true` when `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Returns `true` when some entry holds `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values.contains(value)
    }

    /// Removes the entry for `key`, returning `true` when one existed.
    ///
    /// Both backing sequences are updated together before returning, so
    /// the parallel alignment holds on exit.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(index) = self.keys.index_of(key) else {
            return false;
        };
        // The index comes from the keys sequence and the two sequences are
        // the same length, so both removals are in range.
        let _ = self.keys.remove_at(index);
        let _ = self.values.remove_at(index);
        true
    }
}

impl<K: Clone, V: Clone> Dictionary<K, V> {
    /// Copies the entries, as pairs in insertion order, into `target`
    /// starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when the entries do not
    /// fit, in which case nothing is written.
    pub fn copy_to(
        &self,
        target: &mut [KeyValue<K, V>],
        index: usize,
    ) -> Result<(), CollectionError> {
        let pairs: Vec<KeyValue<K, V>> = self
            .iter()
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect();
        copy_into(&pairs, target, index)
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collecting pairs uses [`set`](Dictionary::set) semantics: a later pair
/// with the same key overwrites the earlier one.
impl<K: PartialEq, V> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iterator {
            dictionary.set(key, value);
        }
        dictionary
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::iter::Zip<std::slice::Iter<'a, K>, std::slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Clone, V: Clone> Enumerable for Dictionary<K, V> {
    type Key = K;
    type Item = V;

    fn enumerator(&self) -> PositionalEnumerator<K, V> {
        let pairs = self
            .iter()
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect();
        PositionalEnumerator::from_pairs(pairs)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Dictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for Dictionary<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct DictionaryVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for DictionaryVisitor<K, V>
where
    K: serde::Deserialize<'de> + PartialEq + fmt::Debug,
    V: serde::Deserialize<'de>,
{
    type Value = Dictionary<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    /// Rebuilds the dictionary by replaying `add` for each decoded pair,
    /// so a duplicate key in the input is a deserialization error.
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut dictionary = Dictionary::new();
        while let Some((key, value)) = map.next_entry()? {
            dictionary
                .add(key, value)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(dictionary)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Dictionary<K, V>
where
    K: serde::Deserialize<'de> + PartialEq + fmt::Debug,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DictionaryVisitor {
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

    fn sample() -> Dictionary<&'static str, i32> {
        let mut dictionary = Dictionary::new();
        dictionary.add("one", 1).unwrap();
        dictionary.add("two", 2).unwrap();
        dictionary.add("three", 3).unwrap();
        dictionary
    }

    #[rstest]
    fn test_add_and_get() {
        let dictionary = sample();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.get(&"two"), Some(&2));
        assert_eq!(dictionary.get(&"four"), None);
    }

    #[rstest]
    fn test_add_duplicate_key_fails_without_overwriting() {
        let mut dictionary = sample();
        let error = dictionary.add("one", 99).unwrap_err();
        assert!(matches!(error, CollectionError::DuplicateKey(_)));
        assert_eq!(dictionary.get(&"one"), Some(&1));
        assert_eq!(dictionary.len(), 3);
    }

    #[rstest]
    fn test_set_overwrites_existing_key() {
        let mut dictionary = sample();
        dictionary.set("one", 99);
        assert_eq!(dictionary.get(&"one"), Some(&99));
        assert_eq!(dictionary.len(), 3);
    }

    #[rstest]
    fn test_set_inserts_missing_key() {
        let mut dictionary = sample();
        dictionary.set("four", 4);
        assert_eq!(dictionary.get(&"four"), Some(&4));
        assert_eq!(dictionary.len(), 4);
    }

    #[rstest]
    fn test_remove_drops_key_and_value_together() {
        let mut dictionary = sample();
        assert!(dictionary.remove(&"two"));
        assert!(!dictionary.contains_key(&"two"));
        assert!(!dictionary.contains_value(&2));
        assert_eq!(dictionary.keys().len(), dictionary.values().len());
        assert!(!dictionary.remove(&"two"));
    }

    #[rstest]
    fn test_removing_then_readding_validates_duplicates_again() {
        let mut dictionary = sample();
        dictionary.remove(&"two");
        dictionary.add("two", 22).unwrap();
        assert_eq!(dictionary.get(&"two"), Some(&22));
        assert!(dictionary.add("two", 2).is_err());
    }

    #[rstest]
    fn test_insertion_order_is_preserved() {
        let dictionary = sample();
        let keys: Vec<_> = dictionary.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["one", "two", "three"]);
    }

    #[rstest]
    fn test_enumeration_carries_dictionary_keys() {
        let dictionary = sample();
        let mut enumerator = dictionary.enumerator();
        assert_eq!(enumerator.key(), Some(&"one"));
        assert_eq!(enumerator.current(), Some(&1));
        enumerator.advance();
        assert_eq!(enumerator.key(), Some(&"two"));
    }

    #[rstest]
    fn test_query_operators_over_values() {
        use crate::query::Query;

        let dictionary = sample();
        assert_eq!(dictionary.count(), 3);
        assert!(dictionary.contains(&2));
        assert_eq!(dictionary.filter(|value| *value > 1).to_vec(), vec![2, 3]);
    }

    #[rstest]
    fn test_copy_to_writes_pairs_in_order() {
        let dictionary = sample();
        let mut target = vec![KeyValue::new("", 0); 4];
        dictionary.copy_to(&mut target, 1).unwrap();
        assert_eq!(target[1], KeyValue::new("one", 1));
        assert_eq!(target[3], KeyValue::new("three", 3));
        assert_eq!(target[0], KeyValue::new("", 0));
    }

    #[rstest]
    fn test_parallel_sequences_stay_aligned_under_mutation() {
        let mut dictionary = Dictionary::new();
        for index in 0..10 {
            dictionary.add(index, index * 10).unwrap();
        }
        dictionary.remove(&3);
        dictionary.remove(&7);
        dictionary.set(4, 400);
        dictionary.add(100, 1000).unwrap();

        assert_eq!(dictionary.keys().len(), dictionary.values().len());
        for (key, value) in &dictionary {
            let expected = if *key == 4 { 400 } else { key * 10 };
            assert_eq!(*value, expected);
        }
    }

    #[rstest]
    fn test_display() {
        let dictionary = sample();
        assert_eq!(format!("{dictionary}"), "{one: 1, two: 2, three: 3}");
    }

    #[rstest]
    fn test_from_iterator_uses_set_semantics() {
        let dictionary: Dictionary<&str, i32> =
            vec![("one", 1), ("two", 2), ("one", 99)].into_iter().collect();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get(&"one"), Some(&99));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_preserves_insertion_order() {
        let mut dictionary = Dictionary::new();
        dictionary.add("one", 1).unwrap();
        dictionary.add("two", 2).unwrap();
        assert_eq!(
            serde_json::to_string(&dictionary).unwrap(),
            "{\"one\":1,\"two\":2}"
        );
    }

    #[rstest]
    fn test_round_trip_replays_add() {
        let mut dictionary = Dictionary::new();
        dictionary.add(String::from("one"), 1).unwrap();
        dictionary.add(String::from("two"), 2).unwrap();
        let json = serde_json::to_string(&dictionary).unwrap();
        let decoded: Dictionary<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, dictionary);
    }

    #[rstest]
    fn test_duplicate_key_in_input_is_an_error() {
        let result: Result<Dictionary<String, i32>, _> =
            serde_json::from_str("{\"one\":1,\"one\":2}");
        assert!(result.is_err());
    }
}
