//! Error types shared by every container and query operator.
//!
//! All documented fault conditions surface as a [`CollectionError`]:
//! out-of-range index/count/position arguments, operations that require a
//! non-empty source, and duplicate dictionary keys. Validation always runs
//! before any mutation, so a returned error guarantees the container is
//! unchanged.
//!
//! Index, count, and position parameters are `usize` at every API boundary,
//! so "argument is not a number" is unrepresentable; the remaining failures
//! are programmer-error-class and carry enough context to name the faulty
//! argument.

/// Represents an index, count, or position argument outside the valid bound
/// for an operation.
///
/// # Examples
///
/// ```rust
/// use colleq::error::OutOfRangeError;
///
/// let error = OutOfRangeError {
///     argument: "index",
///     value: 5,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "index is out of range: the value is 5 but the length is 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The name of the offending argument.
    pub argument: &'static str,
    /// The value that failed validation.
    pub value: usize,
    /// The bound the value was checked against.
    pub length: usize,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} is out of range: the value is {} but the length is {}",
            self.argument, self.value, self.length
        )
    }
}

impl std::error::Error for OutOfRangeError {}

/// Represents an operation that is structurally invalid for the current
/// state of the container, such as `first` or `dequeue` on an empty source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOperationError {
    /// The name of the operation that failed.
    pub operation: &'static str,
    /// Why the operation could not proceed.
    pub reason: &'static str,
}

impl std::fmt::Display for InvalidOperationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.operation, self.reason)
    }
}

impl std::error::Error for InvalidOperationError {}

/// Represents an attempt to `add` a key that a dictionary already contains.
///
/// Only `Dictionary::add` raises this; `Dictionary::set` deliberately
/// overwrites instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    /// Debug rendering of the key that was already present.
    pub key: String,
}

impl std::fmt::Display for DuplicateKeyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "an entry with the same key already exists: {}",
            self.key
        )
    }
}

impl std::error::Error for DuplicateKeyError {}

/// Represents errors that can occur in collection and query operations.
///
/// This enum provides a unified error type across all containers: the same
/// fault produces the same error kind no matter which container raised it.
///
/// # Examples
///
/// ```rust
/// use colleq::prelude::*;
///
/// let queue: Queue<i32> = Queue::new();
/// let error = queue.peek().unwrap_err();
/// assert!(matches!(error, CollectionError::InvalidOperation(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An index, count, or position argument is outside the valid bound.
    OutOfRange(OutOfRangeError),
    /// The operation requires a state the container is not in.
    InvalidOperation(InvalidOperationError),
    /// The key is already present in the dictionary.
    DuplicateKey(DuplicateKeyError),
}

impl CollectionError {
    /// Creates an [`OutOfRangeError`] for the named argument.
    pub const fn out_of_range(argument: &'static str, value: usize, length: usize) -> Self {
        Self::OutOfRange(OutOfRangeError {
            argument,
            value,
            length,
        })
    }

    /// Creates an [`InvalidOperationError`] for the named operation.
    pub const fn invalid_operation(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidOperation(InvalidOperationError { operation, reason })
    }

    /// Creates a [`DuplicateKeyError`] from a debug rendering of the key.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey(DuplicateKeyError { key: key.into() })
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(error) => write!(formatter, "{error}"),
            Self::InvalidOperation(error) => write!(formatter, "{error}"),
            Self::DuplicateKey(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfRange(error) => Some(error),
            Self::InvalidOperation(error) => Some(error),
            Self::DuplicateKey(error) => Some(error),
        }
    }
}
