//! Bridge between nullable JSON values and `Option`.
//!
//! Dynamically shaped data (request bodies, configuration blobs) encodes
//! absence as `null`. These helpers move such values into the `Option`
//! world and back, so the typed combinators can take over.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{from_maybe, safe_prop, to_maybe};
//! use serde_json::json;
//!
//! let body = json!({ "name": "Ada", "nickname": null });
//!
//! assert_eq!(safe_prop("name")(&body), Some(&json!("Ada")));
//! assert_eq!(safe_prop("nickname")(&body), None);
//! assert_eq!(safe_prop("email")(&body), None);
//!
//! assert_eq!(from_maybe(json!(null)), None);
//! assert_eq!(to_maybe(from_maybe(json!(7))), json!(7));
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Treats `null` as `None` and any other value as `Some`.
#[inline]
pub fn from_maybe(value: Value) -> Option<Value> {
    if value.is_null() { None } else { Some(value) }
}

/// Inverse of [`from_maybe`]: `None` becomes `null`.
#[inline]
pub fn to_maybe(option: Option<Value>) -> Value {
    option.unwrap_or(Value::Null)
}

/// Looks up `key` in a JSON object; a missing key, a `null` value or a
/// non-object receiver are all `None`.
pub fn safe_prop(key: &str) -> impl Fn(&Value) -> Option<&Value> + '_ {
    move |value| value.get(key).filter(|found| !found.is_null())
}

/// Parses JSON text into `T`, answering `None` on any syntax or shape error.
///
/// # Examples
///
/// ```rust
/// use railway::control::safe_parse_json;
///
/// let numbers: Option<Vec<i32>> = safe_parse_json("[1, 2, 3]");
/// assert_eq!(numbers, Some(vec![1, 2, 3]));
///
/// let broken: Option<Vec<i32>> = safe_parse_json("[1, 2,");
/// assert_eq!(broken, None);
/// ```
pub fn safe_parse_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    serde_json::from_str(text).ok()
}
