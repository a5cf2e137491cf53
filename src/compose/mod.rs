//! Function composition helpers.
//!
//! - [`identity`], [`constant`], [`flip`]: the classic combinators
//! - [`compose!`](crate::compose): right-to-left composition, `f(g(x))`
//! - [`flow!`](crate::flow): left-to-right composition, `g(f(x))`
//! - [`pipe!`](crate::pipe): push a value through functions left to right
//! - [`curry2!`](crate::curry2), [`curry3!`](crate::curry3),
//!   [`curry4!`](crate::curry4): one argument at a time
//! - [`partial!`](crate::partial): fix some arguments, leave `__` open
//!
//! # Examples
//!
//! ```
//! use railway::{compose, flow, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(flow!(add_one, double)(5), 12);
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```

mod macros;

/// Returns its argument unchanged; the unit of composition.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its input and returns `value`.
///
/// # Examples
///
/// ```
/// use railway::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// `flip(flip(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use railway::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// let subtract_from = flip(subtract);
/// assert_eq!(subtract_from(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_is_unit_of_compose() {
        let double = |x: i32| x * 2;
        let left = crate::compose!(identity, double);
        let right = crate::compose!(double, identity);
        for value in [-3, 0, 8] {
            assert_eq!(left(value), double(value));
            assert_eq!(right(value), double(value));
        }
    }

    #[rstest]
    fn test_double_flip() {
        let power = |base: i32, exponent: u32| base.pow(exponent);
        let twice = flip(flip(power));
        assert_eq!(twice(2, 10), 1024);
    }
}
