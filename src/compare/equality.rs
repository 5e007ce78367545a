//! Boolean equivalence comparers.

/// A capability producing a boolean equivalence test between two elements.
///
/// Used by the `distinct` and `except` query operators to decide which
/// elements belong to the same equivalence class.
///
/// # Examples
///
/// ```rust
/// use colleq::compare::EqualityComparer;
///
/// struct LengthEqualityComparer;
///
/// impl EqualityComparer<&str> for LengthEqualityComparer {
///     fn equals(&self, x: &&str, y: &&str) -> bool {
///         x.len() == y.len()
///     }
/// }
///
/// assert!(LengthEqualityComparer.equals(&"two", &"dos"));
/// ```
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` when `x` and `y` belong to the same equivalence class.
    fn equals(&self, x: &T, y: &T) -> bool;
}

/// Value equality of the element type.
///
/// Matches the notion of "equal" used by [`DefaultComparer`]'s natural
/// ordering: two elements are equal when `x == y`.
///
/// [`DefaultComparer`]: crate::compare::DefaultComparer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEqualityComparer;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultEqualityComparer {
    fn equals(&self, x: &T, y: &T) -> bool {
        x == y
    }
}
