//! Ergonomic macros for combining heterogeneous outcomes.
//!
//! - [`macro@crate::combine`] - Borrows every argument as
//!   `&dyn Fallible` and folds them with
//!   [`Outcome::combine`](crate::Outcome::combine), so outcomes of different
//!   value types and validatable parameters can be listed side by side.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{combine, Outcome, ValidatableParam};
//!
//! let name: Outcome<&str> = Outcome::ok("Altmann");
//! let street: Outcome<usize> = Outcome::fail("Street Length > 5");
//! let main = ValidatableParam::<&str>::absent();
//!
//! let outcome = combine!(name, street, main.require("Main Address is required"));
//! assert_eq!(outcome.error(), "Street Length > 5, Main Address is required");
//! ```

/// Combines any number of [`Fallible`](crate::traits::Fallible) values, in
/// argument order, into one [`Outcome`](crate::Outcome).
///
/// Arguments are borrowed, never moved.
///
/// # Syntax
///
/// - `combine!()` - Always a success
/// - `combine!(a, b, ...)` - Joins failure messages with `", "`
/// - `combine!(with format; a, b, ...)` - Joins with a [`JoinFormat`](crate::types::JoinFormat)
///
/// # Examples
///
/// ```
/// use outcome_rail::types::JoinFormat;
/// use outcome_rail::{combine, Outcome};
///
/// assert!(combine!().is_success());
///
/// let a: Outcome<u8> = Outcome::fail("B");
/// let b: Outcome = Outcome::ok(());
/// let c: Outcome<String> = Outcome::fail("A");
/// assert_eq!(combine!(a, b, c).error(), "B, A");
///
/// let lines = JoinFormat::lines();
/// assert_eq!(combine!(with &lines; a, c).error(), "B\nA");
/// ```
#[macro_export]
macro_rules! combine {
    () => {
        $crate::Outcome::ok(())
    };
    (with $format:expr; $($result:expr),+ $(,)?) => {
        $crate::Outcome::combine_with(
            [$(&$result as &dyn $crate::traits::Fallible),+],
            $format,
        )
    };
    ($($result:expr),+ $(,)?) => {
        $crate::Outcome::combine([$(&$result as &dyn $crate::traits::Fallible),+])
    };
}
