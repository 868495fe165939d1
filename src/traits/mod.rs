//! Traits at the seams of the crate.
//!
//! - [`Fallible`]: borrow-only access to a failure message, used by `combine`
//! - [`IntoOutcome`]: lifting `Result` and `Option` into [`Outcome`](crate::Outcome)

pub mod fallible;
pub mod into_outcome;

pub use fallible::Fallible;
pub use into_outcome::IntoOutcome;
