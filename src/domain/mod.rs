//! Example smart constructors built on [`Outcome`](crate::Outcome) and
//! [`ValidatableParam`](crate::ValidatableParam).
//!
//! [`CustomerName`] and [`Address`] validate a single value each.
//! [`Customer`] combines three arguments, two required-field checks and one
//! cross-field rule into a single aggregate outcome.

pub mod address;
pub mod customer;
pub mod customer_name;

pub use address::Address;
pub use customer::Customer;
pub use customer_name::CustomerName;
