//! Circuit breaker guarding a fallible asynchronous operation.
//!
//! # State machine
//!
//! ```text
//!            failures >= threshold
//!   CLOSED ------------------------> OPEN
//!     ^                               |
//!     | trial succeeds                | cooldown elapsed since last failure
//!     |                               v
//!     +------------------------- HALF_OPEN
//!                                     |
//!            trial fails              |
//!   OPEN <----------------------------+
//! ```
//!
//! Any success resets the failure count and closes the circuit. While open,
//! calls are rejected with [`CircuitOpenError`] without invoking the
//! operation. Once the cooldown has elapsed a single trial call is admitted;
//! other calls keep being rejected until the trial settles.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::time::Instant;

use super::TaskEither;
use crate::config::CircuitBreakerConfig;
use crate::control::Either;
use crate::error::CircuitOpenError;

/// Observable state of a [`CircuitBreaker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircuitState {
    /// Calls pass through and failures are counted.
    Closed,
    /// Calls are rejected until the cooldown elapses.
    Open,
    /// A single trial call decides whether to close again.
    HalfOpen,
}

impl fmt::Display for CircuitState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Closed => "CLOSED",
            Self::Open => "OPEN",
            Self::HalfOpen => "HALF_OPEN",
        };
        formatter.write_str(name)
    }
}

#[derive(Debug)]
struct BreakerState {
    state: CircuitState,
    failure_count: u32,
    last_failure: Option<Instant>,
    trial_in_flight: bool,
}

impl BreakerState {
    const fn new() -> Self {
        Self {
            state: CircuitState::Closed,
            failure_count: 0,
            last_failure: None,
            trial_in_flight: false,
        }
    }

    fn transition(&mut self, next: CircuitState) {
        if self.state != next {
            tracing::info!(from = %self.state, to = %next, failures = self.failure_count, "circuit state changed");
            self.state = next;
        }
    }
}

type Operation<L, R> = dyn Fn() -> TaskEither<L, R> + Send + Sync;

/// Wraps an operation factory and stops calling it after repeated failures.
///
/// Clones share the same state, so a breaker can guard one dependency from
/// many call sites.
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
/// use railway::error::AppError;
/// use railway::task::{CircuitBreaker, CircuitBreakerConfig, CircuitState, TaskEither};
/// use std::time::Duration;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
/// # runtime.block_on(async {
/// let breaker = CircuitBreaker::new(
///     || TaskEither::<AppError, ()>::left(AppError::network("refused")),
///     CircuitBreakerConfig::new(2, Duration::from_secs(30)),
/// );
///
/// let _ = breaker.execute().await;
/// let _ = breaker.execute().await;
/// assert_eq!(breaker.state(), CircuitState::Open);
///
/// let rejected = breaker.execute().await;
/// assert_eq!(rejected, Either::Left(AppError::CircuitOpen(railway::error::CircuitOpenError)));
/// # });
/// ```
pub struct CircuitBreaker<L, R> {
    operation: Arc<Operation<L, R>>,
    config: CircuitBreakerConfig,
    state: Arc<Mutex<BreakerState>>,
}

impl<L, R> Clone for CircuitBreaker<L, R> {
    fn clone(&self) -> Self {
        Self {
            operation: Arc::clone(&self.operation),
            config: self.config,
            state: Arc::clone(&self.state),
        }
    }
}

impl<L, R> fmt::Debug for CircuitBreaker<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CircuitBreaker")
            .field("config", &self.config)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl<L, R> CircuitBreaker<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    /// Creates a closed breaker around `operation`.
    pub fn new<Op>(operation: Op, config: CircuitBreakerConfig) -> Self
    where
        Op: Fn() -> TaskEither<L, R> + Send + Sync + 'static,
    {
        Self {
            operation: Arc::new(operation),
            config,
            state: Arc::new(Mutex::new(BreakerState::new())),
        }
    }

    /// Returns a task that runs the operation if the circuit admits it.
    ///
    /// Admission is decided when the task is first polled, not when it is
    /// created. A rejected call settles as `Left(CircuitOpenError.into())`
    /// and the operation is not invoked.
    pub fn execute(&self) -> TaskEither<L, R>
    where
        L: From<CircuitOpenError>,
    {
        let operation = Arc::clone(&self.operation);
        let state = Arc::clone(&self.state);
        let config = self.config;

        TaskEither::new(async move {
            let Some(permit) = Permit::acquire(state, config) else {
                tracing::debug!("call rejected by open circuit");
                return Either::Left(L::from(CircuitOpenError));
            };
            let settled = operation().await;
            permit.record(settled.is_right());
            settled
        })
    }

    /// The current state. An open circuit whose cooldown has elapsed still
    /// reports `Open` until the next call turns it half-open.
    pub fn state(&self) -> CircuitState {
        self.state.lock().state
    }

    /// Failures counted since the last success.
    pub fn failure_count(&self) -> u32 {
        self.state.lock().failure_count
    }

    /// Forces the circuit closed and clears the failure count.
    pub fn reset(&self) {
        let mut guard = self.state.lock();
        guard.failure_count = 0;
        guard.last_failure = None;
        guard.transition(CircuitState::Closed);
    }
}

/// Admission to run the operation once.
///
/// A trial permit that is dropped without being recorded (the task was
/// cancelled or the operation panicked) frees the half-open slot.
struct Permit {
    state: Arc<Mutex<BreakerState>>,
    config: CircuitBreakerConfig,
    trial: bool,
}

impl Permit {
    fn acquire(state: Arc<Mutex<BreakerState>>, config: CircuitBreakerConfig) -> Option<Self> {
        let trial = {
            let mut guard = state.lock();
            match guard.state {
                CircuitState::Closed => false,
                CircuitState::Open => {
                    let cooled_down = guard
                        .last_failure
                        .is_none_or(|failed_at| failed_at.elapsed() > config.timeout);
                    if !cooled_down {
                        return None;
                    }
                    guard.transition(CircuitState::HalfOpen);
                    guard.trial_in_flight = true;
                    true
                }
                CircuitState::HalfOpen => {
                    if guard.trial_in_flight {
                        return None;
                    }
                    guard.trial_in_flight = true;
                    true
                }
            }
        };
        Some(Self { state, config, trial })
    }

    fn record(mut self, succeeded: bool) {
        let mut guard = self.state.lock();
        if self.trial {
            guard.trial_in_flight = false;
            self.trial = false;
        }

        if succeeded {
            guard.failure_count = 0;
            guard.transition(CircuitState::Closed);
            return;
        }

        let was_trial = guard.state == CircuitState::HalfOpen;
        guard.failure_count = guard.failure_count.saturating_add(1);
        guard.last_failure = Some(Instant::now());
        if was_trial || guard.failure_count >= self.config.threshold.max(1) {
            guard.transition(CircuitState::Open);
        }
    }
}

impl Drop for Permit {
    fn drop(&mut self) {
        if self.trial {
            self.state.lock().trial_in_flight = false;
        }
    }
}
