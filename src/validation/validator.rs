//! Immutable builder validators.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::ValidationError;
use crate::control::Either;

/// Loose address shape: something, `@`, something, a dot, something.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"));

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("Invalid URL regex pattern"));

type Check<T> = dyn Fn(&T) -> Option<ValidationError> + Send + Sync;

/// A named list of checks applied to one field.
///
/// Every combinator returns a new validator and leaves the receiver
/// untouched, so a partially built validator can be shared and extended in
/// different directions.
///
/// All checks run; [`Validator::validate`] reports every failure, not just
/// the first.
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
/// use railway::validation::Validator;
///
/// let username = Validator::<String>::new("username").non_empty().min_length(3).max_length(20);
///
/// assert_eq!(username.validate("ada_l".to_string()), Either::Right("ada_l".to_string()));
///
/// let errors = username.validate(String::new()).left().unwrap_or_default();
/// let codes: Vec<_> = errors.iter().map(|error| error.code.as_str()).collect();
/// assert_eq!(codes, ["EMPTY_VALUE", "MIN_LENGTH"]);
/// ```
pub struct Validator<T> {
    field: Arc<str>,
    checks: Vec<Arc<Check<T>>>,
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            field: Arc::clone(&self.field),
            checks: self.checks.clone(),
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Validator")
            .field("field", &self.field)
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl<T: 'static> Validator<T> {
    /// A validator for `field` with no checks; accepts everything.
    #[must_use]
    pub fn new(field: &str) -> Self {
        Self {
            field: Arc::from(field),
            checks: Vec::new(),
        }
    }

    /// The field name reported in errors.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Adds a check with a fixed message.
    #[must_use]
    pub fn check<P>(&self, code: &str, message: &str, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let (code, message) = (code.to_string(), message.to_string());
        self.check_with(move |field, value| {
            (!predicate(value)).then(|| ValidationError::new(field, message.clone(), code.clone()))
        })
    }

    fn check_with<F>(&self, check: F) -> Self
    where
        F: Fn(&str, &T) -> Option<ValidationError> + Send + Sync + 'static,
    {
        let field = Arc::clone(&self.field);
        let mut next = self.clone();
        next.checks.push(Arc::new(move |value: &T| check(&field, value)));
        next
    }

    /// Runs every check against `value`.
    ///
    /// Returns `Right(value)` when nothing failed, otherwise `Left` with one
    /// error per failed check in the order the checks were added.
    pub fn validate(&self, value: T) -> Either<Vec<ValidationError>, T> {
        let errors: Vec<ValidationError> = self.checks.iter().filter_map(|check| check(&value)).collect();
        if errors.is_empty() { Either::Right(value) } else { Either::Left(errors) }
    }
}

impl Validator<String> {
    /// Rejects strings that are empty after trimming.
    #[must_use]
    pub fn non_empty(&self) -> Self {
        self.check("EMPTY_VALUE", "Value cannot be empty", |value| !value.trim().is_empty())
    }

    /// Rejects strings shorter than `min` characters.
    #[must_use]
    pub fn min_length(&self, min: usize) -> Self {
        self.check("MIN_LENGTH", &format!("Minimum length is {min}"), move |value| {
            value.chars().count() >= min
        })
    }

    /// Rejects strings longer than `max` characters.
    #[must_use]
    pub fn max_length(&self, max: usize) -> Self {
        self.check("MAX_LENGTH", &format!("Maximum length is {max}"), move |value| {
            value.chars().count() <= max
        })
    }

    /// Rejects strings that do not match `pattern`.
    #[must_use]
    pub fn matches(&self, pattern: Regex, message: &str) -> Self {
        self.check("PATTERN_MISMATCH", message, move |value| pattern.is_match(value))
    }

    /// Rejects strings that do not look like an email address.
    #[must_use]
    pub fn email(&self) -> Self {
        self.check("PATTERN_MISMATCH", "Invalid email address", |value| EMAIL_PATTERN.is_match(value))
    }

    /// Rejects strings that are not `http` or `https` URLs.
    #[must_use]
    pub fn url(&self) -> Self {
        self.check("PATTERN_MISMATCH", "Invalid URL", |value| URL_PATTERN.is_match(value))
    }
}

impl<T> Validator<T>
where
    T: PartialOrd + fmt::Display + Send + Sync + 'static,
{
    /// Rejects values below `minimum`.
    #[must_use]
    pub fn min(&self, minimum: T) -> Self {
        let message = format!("Minimum value is {minimum}");
        self.check("MIN_VALUE", &message, move |value| *value >= minimum)
    }

    /// Rejects values above `maximum`.
    #[must_use]
    pub fn max(&self, maximum: T) -> Self {
        let message = format!("Maximum value is {maximum}");
        self.check("MAX_VALUE", &message, move |value| *value <= maximum)
    }
}
