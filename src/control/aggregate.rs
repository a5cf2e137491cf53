//! Error aggregation: run every independent check, then decide.
//!
//! Where [`Either::flat_map`] stops at the first `Left`, the functions here
//! never stop early. They gather every failure in input order and only
//! return `Right` when nothing failed.

use super::Either;

/// Partitions a sequence of results, keeping every failure.
///
/// Returns `Left(errors)` if at least one element is `Left`, otherwise
/// `Right(values)`. Both vectors preserve input order.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Either, collect_all};
///
/// let all_good: Vec<Either<&str, i32>> = vec![Either::Right(1), Either::Right(2)];
/// assert_eq!(collect_all(all_good), Either::Right(vec![1, 2]));
///
/// let mixed = vec![Either::Right(1), Either::Left("e1"), Either::Left("e2")];
/// assert_eq!(collect_all(mixed), Either::Left(vec!["e1", "e2"]));
/// ```
pub fn collect_all<L, R, I>(results: I) -> Either<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut errors = Vec::new();
    let mut values = Vec::new();

    for result in results {
        match result {
            Either::Left(error) => errors.push(error),
            Either::Right(value) if errors.is_empty() => values.push(value),
            Either::Right(_) => {}
        }
    }

    if errors.is_empty() {
        Either::Right(values)
    } else {
        Either::Left(errors)
    }
}

/// Runs every check against `value` and reports all failures together.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Either, validate_all};
///
/// fn positive(n: &i32) -> Either<&'static str, ()> {
///     if *n > 0 { Either::Right(()) } else { Either::Left("must be positive") }
/// }
/// fn even(n: &i32) -> Either<&'static str, ()> {
///     if n % 2 == 0 { Either::Right(()) } else { Either::Left("must be even") }
/// }
///
/// assert_eq!(validate_all(4, &[positive, even]), Either::Right(4));
/// assert_eq!(
///     validate_all(-3, &[positive, even]),
///     Either::Left(vec!["must be positive", "must be even"]),
/// );
/// ```
pub fn validate_all<T, E, F>(value: T, checks: &[F]) -> Either<Vec<E>, T>
where
    F: Fn(&T) -> Either<E, ()>,
{
    let errors: Vec<E> = checks
        .iter()
        .filter_map(|check| check(&value).left())
        .collect();

    if errors.is_empty() {
        Either::Right(value)
    } else {
        Either::Left(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_collect_all_empty_is_right() {
        let empty: Vec<Either<String, i32>> = Vec::new();
        assert_eq!(collect_all(empty), Either::Right(Vec::new()));
    }

    #[rstest]
    fn test_collect_all_keeps_error_order_after_success() {
        let results = vec![
            Either::Left("first"),
            Either::Right(10),
            Either::Left("second"),
        ];
        assert_eq!(collect_all(results), Either::Left(vec!["first", "second"]));
    }

    #[rstest]
    fn test_validate_all_runs_every_check() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let failing = |_: &u8| -> Either<&str, ()> {
            calls.set(calls.get() + 1);
            Either::Left("no")
        };
        let result = validate_all(1u8, &[&failing, &failing, &failing]);
        assert_eq!(result, Either::Left(vec!["no", "no", "no"]));
        assert_eq!(calls.get(), 3);
    }
}
