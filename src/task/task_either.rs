//! `TaskEither` - an asynchronous computation that settles to an `Either`.
//!
//! A `TaskEither<L, R>` is the asynchronous half of the railway. It owns a
//! boxed future yielding `Either<L, R>`; every transformation consumes the
//! receiver and returns a new task, so an in-flight chain is never shared.
//!
//! # Lifecycle
//!
//! A task is created with [`TaskEither::of`], [`TaskEither::left`] or
//! [`TaskEither::from_future`], transformed with [`TaskEither::map`],
//! [`TaskEither::map_left`] and [`TaskEither::flat_map`], and finally
//! observed with [`TaskEither::run`], [`TaskEither::fold`] or by awaiting it
//! directly.
//!
//! # Run-once
//!
//! Rust futures do not memoize, so a `TaskEither` is consumed when it is run.
//! Code that needs to execute an operation again (retries, circuit breakers,
//! sequences) takes a factory `FnMut() -> TaskEither<L, R>` instead.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Either;
//! use railway::task::TaskEither;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let result = TaskEither::<String, i32>::of(21).map(|x| x * 2).run().await;
//! assert_eq!(result, Either::Right(42));
//!
//! let parsed = TaskEither::from_future(async { "17".parse::<i32>() }, |error| error.to_string())
//!     .flat_map(|n| if n > 10 { TaskEither::of(n) } else { TaskEither::left("too small".to_string()) });
//! assert_eq!(parsed.await, Either::Right(17));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use crate::control::Either;
use crate::error::TimeoutError;

type BoxedSettlement<L, R> = Pin<Box<dyn Future<Output = Either<L, R>> + Send + 'static>>;

/// An asynchronous computation that eventually yields `Either<L, R>`.
///
/// `TaskEither` implements [`Future`], so it can be awaited directly; the
/// output is the settled `Either`.
///
/// # Laws
///
/// - `TaskEither::of(a).flat_map(f)` settles like `f(a)`
/// - `task.flat_map(TaskEither::of)` settles like `task`
/// - `task.map(|x| x)` settles like `task`
#[must_use = "a TaskEither does nothing unless it is run or awaited"]
pub struct TaskEither<L, R> {
    settlement: BoxedSettlement<L, R>,
}

static_assertions::assert_impl_all!(TaskEither<String, i32>: Send, Unpin);

// =============================================================================
// Constructors
// =============================================================================

impl<L, R> TaskEither<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    /// Wraps a future that already yields an `Either`.
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Either<L, R>> + Send + 'static,
    {
        Self {
            settlement: Box::pin(future),
        }
    }

    /// An immediately successful task.
    pub fn of(value: R) -> Self {
        Self::from_either(Either::Right(value))
    }

    /// An immediately failed task.
    pub fn left(error: L) -> Self {
        Self::from_either(Either::Left(error))
    }

    /// Alias for [`TaskEither::left`].
    pub fn fail(error: L) -> Self {
        Self::left(error)
    }

    /// Lifts a settled `Either`.
    pub fn from_either(either: Either<L, R>) -> Self {
        Self::new(std::future::ready(either))
    }

    /// Lifts a `Result`, `Err` becoming `Left`.
    pub fn from_result(result: Result<R, L>) -> Self {
        Self::from_either(result.into())
    }

    /// Adapts an external fallible future.
    ///
    /// This is the boundary where a collaborator's failure becomes a typed
    /// domain error: `Ok(value)` settles as `Right(value)` and `Err(error)`
    /// settles as `Left(on_error(error))`. Nothing else in this crate
    /// converts failures implicitly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    /// use railway::error::AppError;
    /// use railway::task::TaskEither;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let fetch = async { Err::<String, _>(std::io::Error::other("connection reset")) };
    /// let task = TaskEither::from_future(fetch, |error| AppError::network(error.to_string()));
    /// assert_eq!(task.run().await, Either::Left(AppError::network("connection reset")));
    /// # });
    /// ```
    pub fn from_future<Fut, E, F>(future: Fut, on_error: F) -> Self
    where
        Fut: Future<Output = Result<R, E>> + Send + 'static,
        F: FnOnce(E) -> L + Send + 'static,
    {
        Self::new(async move {
            match future.await {
                Ok(value) => Either::Right(value),
                Err(error) => Either::Left(on_error(error)),
            }
        })
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<L, R> TaskEither<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    /// Transforms the success value once the task settles.
    pub fn map<U, F>(self, function: F) -> TaskEither<L, U>
    where
        F: FnOnce(R) -> U + Send + 'static,
        U: Send + 'static,
    {
        TaskEither::new(async move { self.await.map_right(function) })
    }

    /// Transforms the error value once the task settles.
    pub fn map_left<E, F>(self, function: F) -> TaskEither<E, R>
    where
        F: FnOnce(L) -> E + Send + 'static,
        E: Send + 'static,
    {
        TaskEither::new(async move { self.await.map_left(function) })
    }

    /// Chains a dependent asynchronous step.
    ///
    /// `function` runs only after this task settles as `Right`; its task is
    /// then awaited in turn. A `Left` short-circuits and `function` is never
    /// invoked.
    pub fn flat_map<U, F>(self, function: F) -> TaskEither<L, U>
    where
        F: FnOnce(R) -> TaskEither<L, U> + Send + 'static,
        U: Send + 'static,
    {
        TaskEither::new(async move {
            match self.await {
                Either::Left(error) => Either::Left(error),
                Either::Right(value) => function(value).await,
            }
        })
    }

    /// Alias for [`TaskEither::flat_map`].
    pub fn and_then<U, F>(self, function: F) -> TaskEither<L, U>
    where
        F: FnOnce(R) -> TaskEither<L, U> + Send + 'static,
        U: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Recovers from a failure with another task; a success passes through.
    pub fn or_else<E, F>(self, function: F) -> TaskEither<E, R>
    where
        F: FnOnce(L) -> TaskEither<E, R> + Send + 'static,
        E: Send + 'static,
    {
        TaskEither::new(async move {
            match self.await {
                Either::Left(error) => function(error).await,
                Either::Right(value) => Either::Right(value),
            }
        })
    }

    /// Runs `inspect` on the error without changing it. Useful for logging.
    pub fn inspect_left<F>(self, inspect: F) -> Self
    where
        F: FnOnce(&L) + Send + 'static,
    {
        Self::new(async move {
            let settled = self.await;
            if let Either::Left(error) = &settled {
                inspect(error);
            }
            settled
        })
    }

    /// Fails with a [`TimeoutError`] if the task does not settle within
    /// `duration`. See [`with_timeout`](super::with_timeout).
    pub fn timeout(self, duration: Duration) -> Self
    where
        L: From<TimeoutError>,
    {
        super::with_timeout(self, duration)
    }
}

// =============================================================================
// Terminal Operations
// =============================================================================

impl<L, R> TaskEither<L, R> {
    /// Awaits settlement and returns both channels uncollapsed.
    pub async fn run(self) -> Either<L, R> {
        self.await
    }

    /// Awaits settlement and applies exactly one of the two functions.
    pub async fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.await.fold(on_left, on_right)
    }

    /// Awaits settlement as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the `Left` payload as `Err`.
    pub async fn into_result(self) -> Result<R, L> {
        self.await.into()
    }
}

impl<L, R> Future for TaskEither<L, R> {
    type Output = Either<L, R>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().settlement.as_mut().poll(context)
    }
}

impl<L, R> fmt::Debug for TaskEither<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TaskEither").finish_non_exhaustive()
    }
}

impl<L, R> From<Either<L, R>> for TaskEither<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    fn from(either: Either<L, R>) -> Self {
        Self::from_either(either)
    }
}
