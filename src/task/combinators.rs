//! Combinators over collections of tasks.

use futures::future::join_all;

use super::TaskEither;
use crate::control::{Either, collect_all};

/// Runs every task concurrently and aggregates the outcome.
///
/// Settles as `Right` with every value in input order when all tasks succeed,
/// otherwise as `Left` with every error in input order. Completion order
/// does not matter.
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
/// use railway::task::{TaskEither, parallel};
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let outcome = parallel(vec![
///     TaskEither::of(1),
///     TaskEither::left("e1"),
///     TaskEither::left("e2"),
/// ]);
/// assert_eq!(outcome.run().await, Either::Left(vec!["e1", "e2"]));
/// # });
/// ```
pub fn parallel<L, R, I>(tasks: I) -> TaskEither<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = TaskEither<L, R>>,
    L: Send + 'static,
    R: Send + 'static,
{
    let tasks: Vec<TaskEither<L, R>> = tasks.into_iter().collect();
    TaskEither::new(async move { collect_all(join_all(tasks).await) })
}

/// Invokes every factory up front, then behaves like [`parallel`].
pub fn collect_errors<L, R, F, I>(operations: I) -> TaskEither<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> TaskEither<L, R>,
    L: Send + 'static,
    R: Send + 'static,
{
    parallel(operations.into_iter().map(|operation| operation()))
}

/// Runs the factories one after another, stopping at the first failure.
///
/// Factory `k + 1` is invoked only after task `k` settled as `Right`, so
/// nothing after a failure is started.
pub fn sequence<L, R, F, I>(operations: I) -> TaskEither<L, Vec<R>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> TaskEither<L, R> + Send + 'static,
    L: Send + 'static,
    R: Send + 'static,
{
    let operations: Vec<F> = operations.into_iter().collect();
    TaskEither::new(async move {
        let mut values = Vec::with_capacity(operations.len());
        for operation in operations {
            match operation().await {
                Either::Left(error) => return Either::Left(error),
                Either::Right(value) => values.push(value),
            }
        }
        Either::Right(values)
    })
}

/// Processes `items` in chunks of `batch_size`.
///
/// Chunks run one after another; the items inside a chunk run concurrently.
/// Every chunk is processed even if an earlier one failed, and the result
/// aggregates like [`parallel`] over the whole input. A `batch_size` of zero
/// is treated as one.
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
/// use railway::task::{TaskEither, batch};
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let doubled = batch(vec![1, 2, 3, 4, 5], |n| TaskEither::<String, i32>::of(n * 2), 2);
/// assert_eq!(doubled.run().await, Either::Right(vec![2, 4, 6, 8, 10]));
/// # });
/// ```
pub fn batch<T, L, R, F>(items: Vec<T>, processor: F, batch_size: usize) -> TaskEither<Vec<L>, Vec<R>>
where
    T: Send + 'static,
    F: Fn(T) -> TaskEither<L, R> + Send + 'static,
    L: Send + 'static,
    R: Send + 'static,
{
    let batch_size = batch_size.max(1);
    TaskEither::new(async move {
        let mut settled = Vec::with_capacity(items.len());
        let mut remaining = items.into_iter().peekable();
        while remaining.peek().is_some() {
            let chunk: Vec<TaskEither<L, R>> = remaining.by_ref().take(batch_size).map(&processor).collect();
            tracing::trace!(size = chunk.len(), "processing batch");
            settled.extend(join_all(chunk).await);
        }
        collect_all(settled)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[rstest]
    #[tokio::test]
    async fn test_parallel_empty_is_right() {
        let outcome = parallel(Vec::<TaskEither<String, i32>>::new());
        assert_eq!(outcome.await, Either::Right(Vec::new()));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_parallel_preserves_input_order() {
        let delayed = |value: u64| {
            TaskEither::<String, u64>::new(async move {
                tokio::time::sleep(Duration::from_millis(100 - value * 10)).await;
                Either::Right(value)
            })
        };
        let outcome = parallel(vec![delayed(1), delayed(2), delayed(3)]);
        assert_eq!(outcome.await, Either::Right(vec![1, 2, 3]));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_parallel_runs_concurrently() {
        let start = tokio::time::Instant::now();
        let sleeper = || {
            TaskEither::<(), ()>::new(async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Either::Right(())
            })
        };
        let _ = parallel(vec![sleeper(), sleeper(), sleeper()]).await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[rstest]
    #[tokio::test]
    async fn test_sequence_stops_at_first_failure() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let operations: Vec<Box<dyn FnOnce() -> TaskEither<String, usize> + Send>> = (0..4usize)
            .map(|index| {
                let invoked = Arc::clone(&invoked);
                Box::new(move || {
                    invoked.fetch_add(1, Ordering::SeqCst);
                    if index == 1 {
                        TaskEither::left(format!("failed at {index}"))
                    } else {
                        TaskEither::of(index)
                    }
                }) as Box<dyn FnOnce() -> TaskEither<String, usize> + Send>
            })
            .collect();

        let outcome = sequence(operations).await;

        assert_eq!(outcome, Either::Left("failed at 1".to_string()));
        assert_eq!(invoked.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_sequence_collects_in_order() {
        let outcome = sequence((1..=3).map(|n| move || TaskEither::<(), i32>::of(n * n))).await;
        assert_eq!(outcome, Either::Right(vec![1, 4, 9]));
    }

    #[rstest]
    #[tokio::test]
    async fn test_collect_errors_aggregates_all() {
        let outcome = collect_errors((0..4).map(|n| {
            move || {
                if n % 2 == 0 {
                    TaskEither::of(n)
                } else {
                    TaskEither::left(format!("odd {n}"))
                }
            }
        }))
        .await;
        assert_eq!(outcome, Either::Left(vec!["odd 1".to_string(), "odd 3".to_string()]));
    }

    #[rstest]
    #[tokio::test]
    async fn test_batch_keeps_processing_after_failed_chunk() {
        let processed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&processed);
        let outcome = batch(
            vec![1, 2, 3, 4, 5],
            move |n| {
                counter.fetch_add(1, Ordering::SeqCst);
                if n == 2 {
                    TaskEither::left(format!("bad {n}"))
                } else {
                    TaskEither::of(n)
                }
            },
            2,
        )
        .await;

        assert_eq!(outcome, Either::Left(vec!["bad 2".to_string()]));
        assert_eq!(processed.load(Ordering::SeqCst), 5);
    }

    #[rstest]
    #[tokio::test]
    async fn test_batch_zero_size_is_one() {
        let outcome = batch(vec!['a', 'b'], |c| TaskEither::<(), char>::of(c.to_ascii_uppercase()), 0).await;
        assert_eq!(outcome, Either::Right(vec!['A', 'B']));
    }
}
