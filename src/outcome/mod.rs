//! The [`Outcome`] type and its combination operator.
//!
//! An [`Outcome`] is the immutable result of one fallible step: a value on
//! success or a message on failure. [`Outcome::combine`] folds any number of
//! outcomes into one whose message lists every failure in input order.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let combined = Outcome::combine([
//!     Outcome::ok(()),
//!     Outcome::fail("X"),
//!     Outcome::ok(()),
//! ]);
//! assert_eq!(combined.error(), "X");
//! ```
pub mod combine;
pub mod core;
pub mod iter;

pub use self::core::*;
