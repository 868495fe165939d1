use core::fmt::{self, Display};

use crate::types::alloc_type::String;

/// Misuse of an [`Outcome`](crate::Outcome) or
/// [`ValidatableParam`](crate::ValidatableParam) accessor.
///
/// These are defects in the calling code, not bad input. The panicking
/// accessors (`value`, `error`) panic with this type's `Display` text; the
/// `try_*` accessors hand it back instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsageError {
    /// The value of a failed outcome was requested.
    ValueOfFailure { error: String },
    /// The error message of a successful outcome was requested.
    ErrorOfSuccess,
    /// A required value was requested from a valid but absent parameter.
    MissingValue,
}

impl Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOfFailure { error } => {
                write!(f, "attempted to read the value of a failed outcome: {error}")
            },
            Self::ErrorOfSuccess => {
                f.write_str("attempted to read the error of a successful outcome")
            },
            Self::MissingValue => f.write_str("attempted to read an absent value"),
        }
    }
}

impl core::error::Error for UsageError {}
