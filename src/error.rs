//! Error types shared by the combinators and their callers.
//!
//! Failures travel as values on the `Left` channel. Each subsystem gets a
//! closed set of variants carrying exactly the fields its call sites need,
//! so a `match` over them stays exhaustive.
//!
//! - [`TimeoutError`]: produced by `with_timeout` when the timer wins
//! - [`CircuitOpenError`]: produced by a `CircuitBreaker` that rejects a call
//! - [`AppError`]: the application-level taxonomy with category, severity and
//!   the default retry classification
//!
//! # Examples
//!
//! ```rust
//! use railway::error::{AppError, ErrorCategory, Severity};
//!
//! let error = AppError::network("connection reset");
//! assert_eq!(error.category(), ErrorCategory::Network);
//! assert_eq!(error.severity(), Severity::Medium);
//! assert!(error.is_retryable());
//! assert_eq!(error.to_string(), "network error: connection reset");
//! ```

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// The timer fired before the guarded task settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation timed out after {duration:?}")]
pub struct TimeoutError {
    /// The timeout duration that was exceeded.
    pub duration: Duration,
}

/// A circuit breaker refused to run its operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("circuit breaker is open")]
pub struct CircuitOpenError;

/// Broad classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport-level failures.
    Network,
    /// Input rejected by a validator.
    Validation,
    /// The caller may not access the resource.
    Authorization,
    /// Domain rule violations such as missing entities.
    Business,
    /// Failures of the system itself.
    System,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Validation => "validation",
            Self::Authorization => "authorization",
            Self::Business => "business",
            Self::System => "system",
        };
        formatter.write_str(name)
    }
}

/// How serious an [`AppError`] is. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Expected and recoverable by the user.
    Low,
    /// Transient or localized.
    Medium,
    /// Needs attention.
    High,
    /// The system cannot proceed.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        formatter.write_str(name)
    }
}

/// Application error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The transport failed before a response was obtained.
    #[error("network error: {message}")]
    Network {
        /// Description of the failure.
        message: String,
    },
    /// A field failed validation.
    #[error("invalid {field}: {message}")]
    Validation {
        /// The offending field.
        field: String,
        /// Why it was rejected.
        message: String,
    },
    /// Access to a resource was denied.
    #[error("access denied to {resource}")]
    Unauthorized {
        /// The protected resource.
        resource: String,
    },
    /// A looked-up entity does not exist.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Kind of entity.
        resource: String,
        /// The identifier that was looked up.
        id: String,
    },
    /// The operation did not settle in time.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
    /// A circuit breaker rejected the call.
    #[error(transparent)]
    CircuitOpen(#[from] CircuitOpenError),
    /// An internal failure.
    #[error("system error: {message}")]
    System {
        /// Description of the failure.
        message: String,
    },
}

impl AppError {
    /// Creates a [`AppError::Network`].
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a [`AppError::Validation`].
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a [`AppError::Unauthorized`].
    #[must_use]
    pub fn unauthorized(resource: impl Into<String>) -> Self {
        Self::Unauthorized {
            resource: resource.into(),
        }
    }

    /// Creates a [`AppError::NotFound`].
    #[must_use]
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Creates a [`AppError::System`].
    #[must_use]
    pub fn system(message: impl Into<String>) -> Self {
        Self::System {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for the variant.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Network { .. } => "NETWORK_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Timeout(_) => "TIMEOUT",
            Self::CircuitOpen(_) => "CIRCUIT_OPEN",
            Self::System { .. } => "SYSTEM_ERROR",
        }
    }

    /// The category this error belongs to.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Network { .. } | Self::Timeout(_) => ErrorCategory::Network,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Unauthorized { .. } => ErrorCategory::Authorization,
            Self::NotFound { .. } => ErrorCategory::Business,
            Self::CircuitOpen(_) | Self::System { .. } => ErrorCategory::System,
        }
    }

    /// How serious this error is.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Validation { .. } => Severity::Low,
            Self::Network { .. } | Self::Timeout(_) | Self::NotFound { .. } => Severity::Medium,
            Self::Unauthorized { .. } => Severity::High,
            Self::CircuitOpen(_) | Self::System { .. } => Severity::Critical,
        }
    }

    /// Default retry classification: network failures that are not critical.
    ///
    /// Pass `AppError::is_retryable` as the retry condition of `with_retry`
    /// when no domain-specific rule applies.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Network && self.severity() != Severity::Critical
    }
}

/// Emits `error` through `tracing`, choosing the level from its severity.
///
/// Critical errors log at `ERROR`, high at `WARN`, everything else at `INFO`.
pub fn log_error(error: &AppError) {
    let code = error.code();
    let category = error.category();
    let severity = error.severity();
    match severity {
        Severity::Critical => {
            tracing::error!(code, %category, %severity, "{error}");
        }
        Severity::High => {
            tracing::warn!(code, %category, %severity, "{error}");
        }
        Severity::Low | Severity::Medium => {
            tracing::info!(code, %category, %severity, "{error}");
        }
    }
}
