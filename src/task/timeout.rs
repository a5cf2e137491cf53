//! Bounding a task by wall-clock time.

use std::time::Duration;

use super::TaskEither;
use crate::control::Either;
use crate::error::TimeoutError;

/// Races `task` against a timer of `duration`.
///
/// If the task settles first its outcome is returned unchanged. If the timer
/// fires first the result is `Left(TimeoutError { duration }.into())` and the
/// inner task is dropped, which cancels it at its next suspension point. Work
/// the task handed to `tokio::spawn` is not affected.
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
/// use railway::error::{AppError, TimeoutError};
/// use railway::task::{TaskEither, with_timeout};
/// use std::time::Duration;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
/// # runtime.block_on(async {
/// let slow = TaskEither::<AppError, ()>::new(async {
///     tokio::time::sleep(Duration::from_secs(5)).await;
///     Either::Right(())
/// });
/// let outcome = with_timeout(slow, Duration::from_millis(5)).run().await;
/// assert_eq!(
///     outcome,
///     Either::Left(AppError::Timeout(TimeoutError { duration: Duration::from_millis(5) }))
/// );
/// # });
/// ```
pub fn with_timeout<L, R>(task: TaskEither<L, R>, duration: Duration) -> TaskEither<L, R>
where
    L: From<TimeoutError> + Send + 'static,
    R: Send + 'static,
{
    TaskEither::new(async move {
        match tokio::time::timeout(duration, task).await {
            Ok(settled) => settled,
            Err(_) => {
                tracing::debug!(?duration, "task timed out");
                Either::Left(L::from(TimeoutError { duration }))
            }
        }
    })
}
