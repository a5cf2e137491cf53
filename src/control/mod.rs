//! Synchronous result types and their combinators.
//!
//! - [`Either`]: a failure (`Left`) or a success (`Right`)
//! - [`OptionExt`] and the `*_option` functions: Option vocabulary and the
//!   bridge to `Either`
//! - [`collect_all`] / [`validate_all`]: aggregate every failure instead of
//!   stopping at the first
//! - [`safe_get`], [`head`], [`last`], [`safe_parse_int`], [`safe_parse_float`]:
//!   total accessors
//!
//! # Examples
//!
//! ## Chaining optional lookups
//!
//! ```rust
//! use railway::control::{Either, OptionExt, safe_get, safe_parse_int};
//!
//! let rows = ["10", "x", "30"];
//!
//! let parse_row = |index: usize| {
//!     safe_get(&rows, index)
//!         .to_either(format!("no row {index}"))
//!         .flat_map(|text| safe_parse_int(text, 10).to_either(format!("row {index} is not a number")))
//! };
//!
//! assert_eq!(parse_row(0), Either::Right(10));
//! assert_eq!(parse_row(1), Either::Left("row 1 is not a number".to_string()));
//! assert_eq!(parse_row(7), Either::Left("no row 7".to_string()));
//! ```

mod aggregate;
mod either;
mod option;
mod safe;

#[cfg(feature = "json")]
mod nullable;

pub use aggregate::{collect_all, validate_all};
pub use either::{
    Either, flat_map_either, fold_either, left, map_either, map_left, right, swap,
};
pub use option::{
    OptionExt, either_to_option, filter_option, flat_map_option, fold_option, get_or_else,
    map_option, option_to_either,
};
pub use safe::{head, last, safe_get, safe_parse_float, safe_parse_int};

#[cfg(feature = "json")]
pub use nullable::{from_maybe, safe_parse_json, safe_prop, to_maybe};
