//! Extension trait for lifting standard `Result`s into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//!
//! let parsed = "42".parse::<u8>().into_outcome();
//! assert_eq!(parsed.into_value(), 42);
//!
//! let parsed = "x".parse::<u8>().into_outcome();
//! assert_eq!(parsed.error(), "invalid digit found in string");
//! ```

use alloc::string::ToString;
use core::fmt::Display;

use crate::types::alloc_type::String;
use crate::Outcome;

/// Failure message used when an error renders as empty text.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Converts a fallible value into an [`Outcome`], rendering the error with `Display`.
///
/// An error whose `Display` output is empty becomes a failure with
/// [`UNKNOWN_ERROR`]; a foreign error never makes the conversion panic.
pub trait IntoOutcome<T> {
    fn into_outcome(self) -> Outcome<T>;

    /// Like [`into_outcome`](Self::into_outcome) but replaces the error text with `message`.
    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T>;
}

impl<T, E: Display> IntoOutcome<T> for Result<T, E> {
    #[track_caller]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => {
                let message = error.to_string();
                if message.is_empty() {
                    Outcome::fail(UNKNOWN_ERROR)
                } else {
                    Outcome::Failure(message)
                }
            },
        }
    }

    #[track_caller]
    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(_) => Outcome::fail(message),
        }
    }
}

impl<T> IntoOutcome<T> for Option<T> {
    /// `None` becomes a failure with a generic message; prefer
    /// [`into_outcome_with`](IntoOutcome::into_outcome_with).
    #[track_caller]
    fn into_outcome(self) -> Outcome<T> {
        self.into_outcome_with("value is missing")
    }

    #[track_caller]
    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T> {
        match self {
            Some(value) => Outcome::ok(value),
            None => Outcome::fail(message),
        }
    }
}
