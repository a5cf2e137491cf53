//! Builder validators that report every failure.
//!
//! This module requires the `validation` feature flag.
//!
//! A [`Validator`] checks one field and yields
//! `Either<Vec<ValidationError>, T>`. Several fields are combined with
//! [`collect_all`](crate::control::collect_all), which keeps every error from
//! every field.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Either, collect_all};
//! use railway::validation::Validator;
//!
//! let name = Validator::<String>::new("name").non_empty().min_length(2);
//! let email = Validator::<String>::new("email").email();
//!
//! let outcome = collect_all([
//!     name.validate("J".to_string()),
//!     email.validate("not-an-email".to_string()),
//! ]);
//!
//! let errors: Vec<_> = outcome
//!     .left()
//!     .unwrap_or_default()
//!     .into_iter()
//!     .flatten()
//!     .map(|error| error.field)
//!     .collect();
//! assert_eq!(errors, ["name", "email"]);
//! ```

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::Validator;
