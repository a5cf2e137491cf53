//! # railway
//!
//! Railway-oriented error handling for Rust: an `Either` type with its
//! Option companions, and an asynchronous `TaskEither` for chaining fallible
//! steps.
//!
//! ## Overview
//!
//! - **Control**: [`Either`](control::Either), Option helpers, safe accessors
//!   and error aggregation
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!`..`curry4!`, `partial!`
//! - **Task**: `TaskEither` with `parallel`, `sequence`, `with_retry`,
//!   `with_timeout` and a `CircuitBreaker`
//! - **Validation**: immutable builder validators that report every failure
//! - **Cache**: explicitly owned LRU and TTL memoization caches
//!
//! ## Feature Flags
//!
//! - `control`: `Either` and Option helpers
//! - `compose`: Function composition utilities
//! - `json`: Null-aware bridge between `serde_json::Value` and `Option`
//! - `validation`: Builder validators
//! - `cache`: `LruCache` and `ExpiringMemo`
//! - `async`: `TaskEither` and its combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! let parsed = safe_parse_int("21", 10)
//!     .to_either("not a number")
//!     .map_right(|value| value * 2);
//! assert_eq!(parsed, Either::Right(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    pub use crate::config::*;
    pub use crate::error::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "validation")]
    pub use crate::validation::*;

    #[cfg(feature = "cache")]
    pub use crate::cache::*;

    #[cfg(feature = "async")]
    pub use crate::task::*;
}

pub mod config;
pub mod error;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "validation")]
pub mod validation;

#[cfg(feature = "cache")]
pub mod cache;

#[cfg(feature = "async")]
pub mod task;
