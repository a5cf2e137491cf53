//! Option helpers.
//!
//! `Option<T>` is the standard library's; this module adds the vocabulary the
//! rest of the crate speaks: an eliminator (`fold`), an `Either` bridge and
//! curried point-free forms for pipelines.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{map_option, OptionExt};
//!
//! let double = map_option(|n: i32| n * 2);
//! assert_eq!(double(Some(5)), Some(10));
//! assert_eq!(double(None), None);
//!
//! let described = Some(3).fold(|| "nothing".to_string(), |n| format!("got {n}"));
//! assert_eq!(described, "got 3");
//! ```

use super::Either;

/// Method-style additions to `Option`.
pub trait OptionExt<T> {
    /// Eliminates the option; exactly one branch runs.
    fn fold<U, N, S>(self, on_none: N, on_some: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U;

    /// Unwraps `Some` or substitutes `default`. Never panics.
    fn get_or_else(self, default: T) -> T;

    /// Keeps `Some(v)` only when `predicate(&v)` holds.
    fn filter_option<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// Promotes `Some(v)` to `Right(v)` and `None` to `Left(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Either, OptionExt};
    ///
    /// assert_eq!(Some(1).to_either("missing"), Either::Right(1));
    /// assert_eq!(None::<i32>.to_either("missing"), Either::Left("missing"));
    /// ```
    fn to_either<L>(self, error: L) -> Either<L, T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn fold<U, N, S>(self, on_none: N, on_some: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn get_or_else(self, default: T) -> T {
        self.unwrap_or(default)
    }

    #[inline]
    fn filter_option<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(predicate)
    }

    #[inline]
    fn to_either<L>(self, error: L) -> Either<L, T> {
        match self {
            Some(value) => Either::Right(value),
            None => Either::Left(error),
        }
    }
}

// =============================================================================
// Point-free Combinators
// =============================================================================

/// Curried `map`: `map_option(f)(option)`.
pub fn map_option<T, U, F>(function: F) -> impl Fn(Option<T>) -> Option<U>
where
    F: Fn(T) -> U,
{
    move |option| option.map(&function)
}

/// Curried `flat_map`; `None` short-circuits without calling `function`.
pub fn flat_map_option<T, U, F>(function: F) -> impl Fn(Option<T>) -> Option<U>
where
    F: Fn(T) -> Option<U>,
{
    move |option| option.and_then(&function)
}

/// Curried [`OptionExt::get_or_else`].
pub fn get_or_else<T: Clone>(default: T) -> impl Fn(Option<T>) -> T {
    move |option| option.unwrap_or_else(|| default.clone())
}

/// Curried [`OptionExt::fold`].
pub fn fold_option<T, U, N, S>(on_none: N, on_some: S) -> impl Fn(Option<T>) -> U
where
    N: Fn() -> U,
    S: Fn(T) -> U,
{
    move |option| option.fold(&on_none, &on_some)
}

/// Curried [`OptionExt::filter_option`].
pub fn filter_option<T, P>(predicate: P) -> impl Fn(Option<T>) -> Option<T>
where
    P: Fn(&T) -> bool,
{
    move |option| option.filter(&predicate)
}

/// Curried [`OptionExt::to_either`]: turns a missing lookup into a reportable failure.
pub fn option_to_either<L: Clone, T>(error: L) -> impl Fn(Option<T>) -> Either<L, T> {
    move |option| option.to_either(error.clone())
}

/// Demotes an `Either` to an `Option`, dropping the `Left` payload.
#[inline]
pub fn either_to_option<L, R>(either: Either<L, R>) -> Option<R> {
    either.right()
}
