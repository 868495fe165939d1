//! Conversion helpers between `Result`, [`Outcome`] and [`ValidatableParam`].
//!
//! Every conversion is a named function; nothing converts implicitly. These
//! are thin free-function spellings of the inherent constructors, handy as
//! `map` arguments.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome(Err::<u8, _>("Street Length > 5".to_string()));
//! assert_eq!(outcome_to_result(outcome), Err("Street Length > 5".to_string()));
//!
//! let params: Vec<_> = ["Aa", "Stree"].into_iter().map(value_to_param).collect();
//! assert!(params.iter().all(|p| p.has_value()));
//! ```

use crate::traits::Fallible;
use crate::types::alloc_type::String;
use crate::types::{Accumulator, ErrorVec};
use crate::{Outcome, ValidatableParam};

/// Converts an [`Outcome`] to a `Result` carrying the message as its error.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::ok(42)), Ok(42));
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, String> {
    outcome.into_result()
}

/// Converts a `Result` whose error is a message into an [`Outcome`].
///
/// # Panics
///
/// Panics if the error message is empty.
#[inline]
#[track_caller]
pub fn result_to_outcome<T>(result: Result<T, String>) -> Outcome<T> {
    Outcome::from_result(result)
}

/// Wraps a raw value as an always valid, present argument.
#[inline]
pub fn value_to_param<T>(value: T) -> ValidatableParam<T> {
    ValidatableParam::from_value(value)
}

/// Wraps a possibly absent raw value; `None` stays valid.
#[inline]
pub fn option_to_param<T>(value: Option<T>) -> ValidatableParam<T> {
    ValidatableParam::from_option(value)
}

/// Wraps the outcome of an earlier validation as an argument.
#[inline]
pub fn outcome_to_param<T>(outcome: Outcome<T>) -> ValidatableParam<T> {
    ValidatableParam::from_outcome(outcome)
}

/// Unwraps an argument into its outcome: `ok(value)` if valid, `fail(error)` otherwise.
#[inline]
pub fn param_to_outcome<T>(param: ValidatableParam<T>) -> Outcome<Option<T>> {
    param.into_outcome()
}

/// Lists each failure message in input order without joining them.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_failures;
/// use outcome_rail::Outcome;
///
/// let failures = collect_failures([Outcome::fail("B"), Outcome::ok(()), Outcome::fail("A")]);
/// assert_eq!(failures.as_slice(), ["B", "A"]);
/// ```
pub fn collect_failures<I>(results: I) -> ErrorVec<String>
where
    I: IntoIterator,
    I::Item: Fallible,
{
    let mut acc = Accumulator::new();
    for result in results {
        acc.observe(result.failure_message());
    }
    acc.into_inner()
}
