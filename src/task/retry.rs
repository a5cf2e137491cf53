//! Retry with exponential backoff.

use super::TaskEither;
use crate::config::RetryPolicy;
use crate::control::Either;

/// Re-invokes `operation` while it fails with a retryable error.
///
/// The first attempt runs immediately. After a failure, if retries remain and
/// `retry_condition` accepts the error, the task sleeps for
/// [`RetryPolicy::delay_for`] and invokes the factory again. The operation is
/// therefore invoked at most `policy.max_retries + 1` times. The result is
/// the first success, or the last error once the budget is spent or the
/// condition rejects an error.
///
/// Pass [`AppError::is_retryable`](crate::error::AppError::is_retryable) as
/// the condition to retry transient network failures only.
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
/// use railway::error::AppError;
/// use railway::task::{RetryPolicy, TaskEither, with_retry};
/// use std::time::Duration;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
/// # runtime.block_on(async {
/// let mut attempts = 0;
/// let task = with_retry(
///     move || {
///         attempts += 1;
///         if attempts < 3 {
///             TaskEither::left(AppError::network("flaky"))
///         } else {
///             TaskEither::of(attempts)
///         }
///     },
///     RetryPolicy::default().with_initial_delay(Duration::from_millis(1)),
///     AppError::is_retryable,
/// );
/// assert_eq!(task.run().await, Either::Right(3));
/// # });
/// ```
pub fn with_retry<L, R, Op, C>(mut operation: Op, policy: RetryPolicy, retry_condition: C) -> TaskEither<L, R>
where
    Op: FnMut() -> TaskEither<L, R> + Send + 'static,
    C: Fn(&L) -> bool + Send + 'static,
    L: Send + 'static,
    R: Send + 'static,
{
    TaskEither::new(async move {
        let mut retries = 0;
        loop {
            let error = match operation().await {
                Either::Right(value) => return Either::Right(value),
                Either::Left(error) => error,
            };

            if retries >= policy.max_retries {
                tracing::warn!(attempts = retries + 1, "retries exhausted");
                return Either::Left(error);
            }
            if !retry_condition(&error) {
                tracing::debug!(attempt = retries + 1, "error is not retryable");
                return Either::Left(error);
            }

            retries += 1;
            let delay = policy.delay_for(retries);
            tracing::debug!(retry = retries, ?delay, "operation failed, retrying");
            tokio::time::sleep(delay).await;
        }
    })
}
