//! Either type - a computation that failed (`Left`) or succeeded (`Right`).
//!
//! `Either<L, R>` is the synchronous half of the railway: every fallible step
//! returns one, and the combinators here thread a `Left` through untouched
//! while transforming a `Right`.
//!
//! Two failure policies are supported, and they are different combinators:
//!
//! - **Short-circuit**: [`Either::flat_map`] stops at the first `Left`.
//! - **Aggregation**: [`collect_all`](super::collect_all) and
//!   [`validate_all`](super::validate_all) run every check and gather every `Left`.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Either;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! let result = parse("20").flat_map(|n| if n > 0 { Either::Right(n + 1) } else {
//!     Either::Left("must be positive".to_string())
//! });
//! assert_eq!(result, Either::Right(21));
//!
//! let message = parse("x").fold(|error| error, |n| n.to_string());
//! assert_eq!(message, "not a number: x");
//! ```

use std::fmt;
use std::hash::Hash;

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// The type itself carries no priority between the two channels; by
/// convention every combinator in this crate short-circuits on `Left`.
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map_right(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure channel.
    Left(L),
    /// The success channel.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<L>`, discarding a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a `Left`.
    ///
    /// This is the `eitherToOption` bridge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both channels, producing an `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the `Left` payload; a `Right` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the `Right` payload; a `Left` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Alias for [`Either::map_right`]; the success channel is the mapped one.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map_right(function)
    }

    /// Applies one of two functions depending on the active channel.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Chains a dependent step on the `Right` channel.
    ///
    /// If this is `Left`, it is returned unchanged and `function` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else {
    ///     Either::Left(format!("{n} is odd"))
    /// };
    ///
    /// assert_eq!(Either::Right(8).flat_map(halve).flat_map(halve), Either::Right(2));
    /// assert_eq!(Either::Right(6).flat_map(halve).flat_map(halve), Either::Left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    /// Recovers from a `Left` by running `function` on its payload.
    ///
    /// A `Right` is returned unchanged.
    #[inline]
    pub fn or_else<E, F>(self, function: F) -> Either<E, R>
    where
        F: FnOnce(L) -> Either<E, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Either`; exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Returns the right value or `default` for a `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Exchanges the channels: `Left(x)` becomes `Right(x)` and vice versa.
    ///
    /// `swap` is an involution: `either.swap().swap() == either`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a pair of `Option`s.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    /// Converts into a `Result`, `Right` being `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the `Left` payload as `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }

    /// Keeps the success, discarding any error.
    #[inline]
    pub fn to_option(self) -> Option<R> {
        self.right()
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Result Interop
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Point-free Combinators
// =============================================================================

/// Constructs a `Left`.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Constructs a `Right`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Curried [`Either::map_right`]: `map_either(f)(either)`.
pub fn map_either<L, R, U, F>(function: F) -> impl Fn(Either<L, R>) -> Either<L, U>
where
    F: Fn(R) -> U,
{
    move |either| either.map_right(&function)
}

/// Curried [`Either::map_left`].
pub fn map_left<L, R, U, F>(function: F) -> impl Fn(Either<L, R>) -> Either<U, R>
where
    F: Fn(L) -> U,
{
    move |either| either.map_left(&function)
}

/// Curried [`Either::flat_map`].
///
/// # Examples
///
/// ```rust
/// use railway::control::{Either, flat_map_either};
///
/// let reciprocal = flat_map_either(|n: f64| {
///     if n == 0.0 { Either::Left("division by zero") } else { Either::Right(1.0 / n) }
/// });
/// assert_eq!(reciprocal(Either::Right(4.0)), Either::Right(0.25));
/// assert_eq!(reciprocal(Either::Left("earlier failure")), Either::Left("earlier failure"));
/// ```
pub fn flat_map_either<L, R, U, F>(function: F) -> impl Fn(Either<L, R>) -> Either<L, U>
where
    F: Fn(R) -> Either<L, U>,
{
    move |either| either.flat_map(&function)
}

/// Curried [`Either::fold`].
pub fn fold_either<L, R, T, F, G>(on_left: F, on_right: G) -> impl Fn(Either<L, R>) -> T
where
    F: Fn(L) -> T,
    G: Fn(R) -> T,
{
    move |either| either.fold(&on_left, &on_right)
}

/// Free-function form of [`Either::swap`].
#[inline]
pub fn swap<L, R>(either: Either<L, R>) -> Either<R, L> {
    either.swap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn test_flat_map_does_not_run_on_left() {
        let mut calls = 0;
        let value: Either<&str, i32> = Either::Left("boom");
        let result = value.flat_map(|n| {
            calls += 1;
            Either::Right(n + 1)
        });
        assert_eq!(result, Either::Left("boom"));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_or_else_recovers_left_only() {
        let recovered: Either<String, usize> = Either::Left("abc").or_else(|s: &str| Either::Right(s.len()));
        assert_eq!(recovered, Either::Right(3));

        let untouched: Either<String, usize> =
            Either::<&str, usize>::Right(7).or_else(|s| Either::Left(s.to_uppercase()));
        assert_eq!(untouched, Either::Right(7));
    }

    #[rstest]
    #[case(Either::Left(1), "Left(1)")]
    #[case(Either::Right("ok"), "Right(ok)")]
    fn test_display(#[case] value: Either<i32, &str>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        assert_eq!(either.into_result(), Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either.into_result(), Err("error".to_string()));
    }
}
