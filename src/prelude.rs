//! Convenience re-exports for writing smart constructors.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn street(value: &str) -> Outcome<&str> {
//!     Outcome::create(value.len() <= 5, "Street Length > 5").map(|()| value)
//! }
//!
//! let main = ValidatableParam::from_outcome(street("Street2"));
//! let outcome = combine!(main, main.require("Main Address is required"));
//! assert_eq!(outcome.error(), "Street Length > 5, Main Address is required");
//! ```

// Macros
pub use crate::combine;

// Core types
pub use crate::outcome::Outcome;
pub use crate::param::ValidatableParam;
pub use crate::rule::{CrossFieldRule, RuleMode};
pub use crate::types::JoinFormat;

// Traits
pub use crate::traits::{Fallible, IntoOutcome};
