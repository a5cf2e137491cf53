//! Resilience configuration.
//!
//! Retry, circuit breaker and timeout settings with defaults, plus loading
//! from environment variables.
//!
//! # Environment Variables
//!
//! All optional; unset variables keep the default.
//!
//! - `RAILWAY_MAX_RETRIES`: additional attempts after the first (default: 3)
//! - `RAILWAY_RETRY_DELAY_MS`: delay before the first retry (default: 1000)
//! - `RAILWAY_BACKOFF_MULTIPLIER`: growth factor of the delay (default: 2.0)
//! - `RAILWAY_BREAKER_THRESHOLD`: consecutive failures that open the circuit (default: 5)
//! - `RAILWAY_BREAKER_TIMEOUT_MS`: cooldown before a trial call (default: 60000)
//! - `RAILWAY_TIMEOUT_MS`: per-operation timeout (default: 30000)
//!
//! # Example
//!
//! ```rust
//! use railway::config::ResilienceConfig;
//! use std::time::Duration;
//!
//! let config = ResilienceConfig::from_lookup(|key| match key {
//!     "RAILWAY_MAX_RETRIES" => Some("5".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.retry.max_retries, 5);
//! assert_eq!(config.retry.initial_delay, Duration::from_secs(1));
//! ```

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while loading a [`ResilienceConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// How `with_retry` spaces out its attempts.
///
/// The delay before retry `k` (1-based) is
/// `initial_delay * backoff_multiplier^(k - 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Attempts allowed after the first one.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Factor applied to the delay after every retry.
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(max_retries: u32, initial_delay: Duration, backoff_multiplier: f64) -> Self {
        Self {
            max_retries,
            initial_delay,
            backoff_multiplier,
        }
    }

    /// Returns a copy with a different retry budget.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Returns a copy with a different initial delay.
    #[must_use]
    pub const fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    /// Returns a copy with a different multiplier.
    #[must_use]
    pub const fn with_backoff_multiplier(mut self, backoff_multiplier: f64) -> Self {
        self.backoff_multiplier = backoff_multiplier;
        self
    }

    /// The delay to wait before retry number `retry` (1-based).
    ///
    /// Saturates instead of overflowing for large exponents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::config::RetryPolicy;
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::default().with_initial_delay(Duration::from_millis(100));
    /// assert_eq!(policy.delay_for(1), Duration::from_millis(100));
    /// assert_eq!(policy.delay_for(3), Duration::from_millis(400));
    /// ```
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let factor = self.backoff_multiplier.max(0.0).powi(exponent);
        Duration::try_from_secs_f64(self.initial_delay.as_secs_f64() * factor)
            .unwrap_or(Duration::MAX)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1), 2.0)
    }
}

/// When a `CircuitBreaker` opens and how long it stays open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures that flip the circuit to open. Values below 1
    /// are treated as 1.
    pub threshold: u32,
    /// Time since the last failure after which a trial call is admitted.
    pub timeout: Duration,
}

impl CircuitBreakerConfig {
    /// Creates a configuration.
    #[must_use]
    pub const fn new(threshold: u32, timeout: Duration) -> Self {
        Self { threshold, timeout }
    }
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(60))
    }
}

/// All resilience settings in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResilienceConfig {
    /// Retry spacing.
    pub retry: RetryPolicy,
    /// Circuit breaker thresholds.
    pub breaker: CircuitBreakerConfig,
    /// Per-operation timeout.
    pub timeout: Duration,
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            breaker: CircuitBreakerConfig::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ResilienceConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value
    /// that does not parse or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value does not parse or is
    /// out of range.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_retries = get_optional_parsed(&lookup, "RAILWAY_MAX_RETRIES", defaults.retry.max_retries)?;
        let initial_delay = get_optional_millis(&lookup, "RAILWAY_RETRY_DELAY_MS", defaults.retry.initial_delay)?;
        let backoff_multiplier = get_optional_parsed(
            &lookup,
            "RAILWAY_BACKOFF_MULTIPLIER",
            defaults.retry.backoff_multiplier,
        )?;
        if !backoff_multiplier.is_finite() || backoff_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                key: "RAILWAY_BACKOFF_MULTIPLIER".to_string(),
                message: "must be a finite number of at least 1".to_string(),
            });
        }

        let threshold = get_optional_parsed(&lookup, "RAILWAY_BREAKER_THRESHOLD", defaults.breaker.threshold)?;
        if threshold == 0 {
            return Err(ConfigError::InvalidValue {
                key: "RAILWAY_BREAKER_THRESHOLD".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let breaker_timeout = get_optional_millis(&lookup, "RAILWAY_BREAKER_TIMEOUT_MS", defaults.breaker.timeout)?;
        let timeout = get_optional_millis(&lookup, "RAILWAY_TIMEOUT_MS", defaults.timeout)?;

        let config = Self {
            retry: RetryPolicy::new(max_retries, initial_delay, backoff_multiplier),
            breaker: CircuitBreakerConfig::new(threshold, breaker_timeout),
            timeout,
        };
        tracing::debug!(?config, "loaded resilience configuration");
        Ok(config)
    }
}

fn get_optional_parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}

fn get_optional_millis<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_millis = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    get_optional_parsed(lookup, key, default_millis).map(Duration::from_millis)
}
