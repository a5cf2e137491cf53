//! Total accessors that answer with `Option` instead of panicking.

use std::str::FromStr;

/// Returns the element at `index`, or `None` when out of bounds.
///
/// # Examples
///
/// ```rust
/// use railway::control::safe_get;
///
/// assert_eq!(safe_get(&[10, 20, 30], 1), Some(&20));
/// assert_eq!(safe_get(&[10, 20, 30], 5), None);
/// ```
#[inline]
pub fn safe_get<T>(items: &[T], index: usize) -> Option<&T> {
    items.get(index)
}

/// First element of a slice.
#[inline]
pub fn head<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Last element of a slice.
#[inline]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Parses an integer in the given radix (2..=36).
///
/// Surrounding whitespace is ignored. An unsupported radix yields `None`
/// rather than panicking.
///
/// # Examples
///
/// ```rust
/// use railway::control::safe_parse_int;
///
/// assert_eq!(safe_parse_int(" 42 ", 10), Some(42));
/// assert_eq!(safe_parse_int("ff", 16), Some(255));
/// assert_eq!(safe_parse_int("forty-two", 10), None);
/// ```
pub fn safe_parse_int(text: &str, radix: u32) -> Option<i64> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    i64::from_str_radix(text.trim(), radix).ok()
}

/// Parses a finite floating point number.
///
/// `NaN` and infinities (`inf`, `Infinity`) are rejected, as is trailing text.
pub fn safe_parse_float(text: &str) -> Option<f64> {
    f64::from_str(text.trim()).ok().filter(|value| value.is_finite())
}
