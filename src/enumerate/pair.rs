//! The immutable key-value pair yielded by enumeration.

/// An immutable pair of key and value.
///
/// Created once at construction and never mutated. Two pairs are equal
/// exactly when both fields are equal; there is no identity beyond that.
///
/// List-like containers enumerate pairs keyed by 0-based position;
/// [`Dictionary`](crate::container::Dictionary) enumerates pairs carrying
/// its own keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValue<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Creates a pair from a key and a value.
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the pair, returning key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: std::fmt::Display, V: std::fmt::Display> std::fmt::Display for KeyValue<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_accessors() {
        let pair = KeyValue::new("one", 1);
        assert_eq!(pair.key(), &"one");
        assert_eq!(pair.value(), &1);
    }

    #[rstest]
    fn test_structural_equality() {
        assert_eq!(KeyValue::new("one", 1), KeyValue::new("one", 1));
        assert_ne!(KeyValue::new("one", 1), KeyValue::new("one", 2));
        assert_ne!(KeyValue::new("one", 1), KeyValue::new("uno", 1));
    }

    #[rstest]
    fn test_into_pair() {
        let (key, value) = KeyValue::new(0_usize, "zero").into_pair();
        assert_eq!(key, 0);
        assert_eq!(value, "zero");
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", KeyValue::new("one", 1)), "one: 1");
    }
}
