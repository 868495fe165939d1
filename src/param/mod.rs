//! [`ValidatableParam`]: uniform constructor arguments.
//!
//! A smart constructor takes one `ValidatableParam` per argument so that
//! callers can hand over a raw value, an absent value, or the outcome of an
//! earlier validation without the constructor dereferencing anything that
//! is missing or invalid.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, ValidatableParam};
//!
//! let name = ValidatableParam::from_value("Altmann");
//! let street = ValidatableParam::from_outcome(Outcome::<&str>::fail("Street Length > 5"));
//!
//! assert!(name.is_valid_and_has_value());
//! assert!(!street.is_valid_and_has_value());
//! assert_eq!(Outcome::combine([&name, &street]).error(), "Street Length > 5");
//! ```
pub mod core;

pub use self::core::*;
