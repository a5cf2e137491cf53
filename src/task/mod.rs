//! Asynchronous railway: [`TaskEither`] and the combinators built on it.
//!
//! This module requires the `async` feature flag.
//!
//! - [`TaskEither`]: a future that settles to `Either<L, R>`
//! - [`parallel`], [`collect_errors`], [`batch`]: concurrent execution with
//!   error aggregation
//! - [`sequence`]: strictly ordered, short-circuiting execution
//! - [`with_retry`]: re-run a factory with exponential backoff
//! - [`with_timeout`]: race a task against a timer
//! - [`CircuitBreaker`]: stop calling a failing dependency for a while
//!
//! Every combinator returns a new `TaskEither`; failures stay on the `Left`
//! channel and nothing here panics on a failed operation.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Either;
//! use railway::task::{TaskEither, parallel, sequence};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let all = parallel(vec![
//!     TaskEither::<String, i32>::of(1),
//!     TaskEither::of(2),
//!     TaskEither::of(3),
//! ]);
//! assert_eq!(all.run().await, Either::Right(vec![1, 2, 3]));
//!
//! let first_failure = sequence(vec![
//!     Box::new(|| TaskEither::<&'static str, i32>::of(1)) as Box<dyn FnOnce() -> TaskEither<&'static str, i32> + Send>,
//!     Box::new(|| TaskEither::left("stop")),
//!     Box::new(|| unreachable!("never invoked after a failure")),
//! ]);
//! assert_eq!(first_failure.run().await, Either::Left("stop"));
//! # });
//! ```

mod circuit_breaker;
mod combinators;
mod retry;
mod task_either;
mod timeout;

pub use circuit_breaker::{CircuitBreaker, CircuitState};
pub use combinators::{batch, collect_errors, parallel, sequence};
pub use retry::with_retry;
pub use task_either::TaskEither;
pub use timeout::with_timeout;

pub use crate::config::{CircuitBreakerConfig, RetryPolicy};
pub use crate::error::{CircuitOpenError, TimeoutError};
