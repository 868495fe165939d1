//! Building blocks for smart constructors that report every problem at once.
//!
//! A smart constructor only ever returns a fully valid object or a failure.
//! This crate supplies the pieces needed to write one by hand:
//!
//! - [`Outcome`] - an immutable success-with-value or failure-with-message
//! - [`Outcome::combine`] - folds many outcomes into one, joining every
//!   failure message in input order
//! - [`ValidatableParam`] - a constructor argument that may be invalid or
//!   absent, queried without ever dereferencing a missing value
//! - [`rule`] - cross-field rules evaluated only over valid, present fields
//!
//! # Examples
//!
//! ## Combining Outcomes
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let combined = Outcome::combine([Outcome::fail("B"), Outcome::ok(()), Outcome::fail("A")]);
//! assert_eq!(combined.error(), "B, A");
//! ```
//!
//! ## A Smart Constructor
//!
//! ```
//! use outcome_rail::domain::{Address, Customer, CustomerName};
//! use outcome_rail::ValidatableParam;
//!
//! let customer = Customer::create(
//!     CustomerName::create("Altmann").into(),
//!     ValidatableParam::absent(),
//!     Address::create("Stree", "2").into(),
//! );
//! assert_eq!(customer.error(), "Main Address is required");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversion helpers between Result, Outcome and ValidatableParam
pub mod convert;
/// Example smart constructors
pub mod domain;
/// The combine! macro
pub mod macros;
/// The Outcome type and its combination operator
pub mod outcome;
/// ValidatableParam constructor arguments
pub mod param;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Cross-field rule evaluation
pub mod rule;
/// Traits for failure inspection and conversion
pub mod traits;
/// Accumulator, join formatting and usage errors
pub mod types;

pub use outcome::Outcome;
pub use param::ValidatableParam;
pub use rule::{CrossFieldRule, RuleMode};
pub use traits::{Fallible, IntoOutcome};
pub use types::{JoinFormat, UsageError};
