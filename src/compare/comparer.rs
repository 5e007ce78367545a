//! Three-way ordering comparers.

use std::cmp::Ordering;
use std::iter::Peekable;

/// A capability producing a three-way ordering between two elements.
///
/// Implementations are stateless and injected per call; a container never
/// stores a comparer as permanent state.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use colleq::compare::{Comparer, DefaultComparer};
///
/// assert_eq!(DefaultComparer.compare(&1, &2), Ordering::Less);
/// assert_eq!(DefaultComparer.compare(&2, &2), Ordering::Equal);
/// ```
pub trait Comparer<T: ?Sized> {
    /// Compares `x` against `y`, returning `Less`, `Equal`, or `Greater`.
    fn compare(&self, x: &T, y: &T) -> Ordering;
}

/// The natural ordering of the element type.
///
/// Mirrors the `x < y`, `x > y`, else-equal contract exactly: pairs that
/// are incomparable under `PartialOrd` (such as two NaN floats) fall
/// through to `Equal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultComparer;

impl<T: PartialOrd + ?Sized> Comparer<T> for DefaultComparer {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        if x < y {
            Ordering::Less
        } else if x > y {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Case-insensitive lexicographic ordering of strings.
///
/// Characters are compared after Unicode lowercase folding, so
/// `"Apple"` and `"apple"` are equal and `"Banana"` sorts after
/// `"apple"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitiveStringComparer;

impl<T: AsRef<str> + ?Sized> Comparer<T> for CaseInsensitiveStringComparer {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        let left = x.as_ref().chars().flat_map(char::to_lowercase);
        let right = y.as_ref().chars().flat_map(char::to_lowercase);
        left.cmp(right)
    }
}

/// Natural (alphanumeric) ordering of strings.
///
/// Embedded runs of ASCII digits compare by numeric value rather than
/// character by character, so `"img2.png"` sorts before `"img10.png"`.
/// Digit runs are compared with leading zeros stripped and magnitude
/// decided by run length first, so arbitrarily long runs never overflow.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use colleq::compare::{Comparer, NaturalStringComparer};
///
/// assert_eq!(
///     NaturalStringComparer.compare("img2.png", "img10.png"),
///     Ordering::Less
/// );
/// assert_eq!(
///     NaturalStringComparer.compare("a10b2", "a10b10"),
///     Ordering::Less
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalStringComparer;

impl<T: AsRef<str> + ?Sized> Comparer<T> for NaturalStringComparer {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        let mut left = x.as_ref().chars().peekable();
        let mut right = y.as_ref().chars().peekable();

        loop {
            match (left.peek().copied(), right.peek().copied()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(first), Some(second)) => {
                    if first.is_ascii_digit() && second.is_ascii_digit() {
                        let ordering = compare_digit_runs(&mut left, &mut right);
                        if ordering != Ordering::Equal {
                            return ordering;
                        }
                    } else {
                        let ordering = first.cmp(&second);
                        if ordering != Ordering::Equal {
                            return ordering;
                        }
                        left.next();
                        right.next();
                    }
                }
            }
        }
    }
}

/// Consumes the digit run at the front of each cursor and compares the two
/// runs by numeric value.
fn compare_digit_runs<I, J>(left: &mut Peekable<I>, right: &mut Peekable<J>) -> Ordering
where
    I: Iterator<Item = char>,
    J: Iterator<Item = char>,
{
    let left_run = take_digit_run(left);
    let right_run = take_digit_run(right);

    let left_digits = left_run.trim_start_matches('0');
    let right_digits = right_run.trim_start_matches('0');

    // Longer run of significant digits means larger number; equal lengths
    // fall back to lexicographic compare, which is numeric for digits.
    left_digits
        .len()
        .cmp(&right_digits.len())
        .then_with(|| left_digits.cmp(right_digits))
}

fn take_digit_run<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> String {
    let mut run = String::new();
    while let Some(&character) = chars.peek() {
        if !character.is_ascii_digit() {
            break;
        }
        run.push(character);
        chars.next();
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 1, Ordering::Greater)]
    #[case(2, 2, Ordering::Equal)]
    fn test_default_comparer_integers(#[case] x: i32, #[case] y: i32, #[case] expected: Ordering) {
        assert_eq!(DefaultComparer.compare(&x, &y), expected);
    }

    #[rstest]
    fn test_default_comparer_strings() {
        assert_eq!(
            DefaultComparer.compare("apple", "banana"),
            Ordering::Less
        );
    }

    #[rstest]
    fn test_default_comparer_incomparable_is_equal() {
        assert_eq!(
            DefaultComparer.compare(&f64::NAN, &f64::NAN),
            Ordering::Equal
        );
    }

    #[rstest]
    #[case("apple", "APPLE", Ordering::Equal)]
    #[case("apple", "Banana", Ordering::Less)]
    #[case("Cherry", "banana", Ordering::Greater)]
    fn test_case_insensitive_comparer(
        #[case] x: &str,
        #[case] y: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(CaseInsensitiveStringComparer.compare(x, y), expected);
    }

    #[rstest]
    #[case("img2.png", "img10.png", Ordering::Less)]
    #[case("img10.png", "img2.png", Ordering::Greater)]
    #[case("img10.png", "img10.png", Ordering::Equal)]
    #[case("a10b2", "a10b10", Ordering::Less)]
    #[case("abc", "abd", Ordering::Less)]
    #[case("file", "file1", Ordering::Less)]
    #[case("007", "8", Ordering::Less)]
    fn test_natural_comparer(#[case] x: &str, #[case] y: &str, #[case] expected: Ordering) {
        assert_eq!(NaturalStringComparer.compare(x, y), expected);
    }

    #[rstest]
    fn test_natural_comparer_long_runs_do_not_overflow() {
        let small = format!("a{}b", "9".repeat(40));
        let large = format!("a1{}b", "0".repeat(40));
        assert_eq!(
            NaturalStringComparer.compare(small.as_str(), large.as_str()),
            Ordering::Less
        );
    }
}
