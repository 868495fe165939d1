/// Anything that can be inspected for a failure message without being consumed.
///
/// This is the seam that lets outcomes of different value types, and
/// validatable parameters, be fed side by side into
/// [`Outcome::combine`](crate::Outcome::combine).
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::Fallible;
/// use outcome_rail::Outcome;
///
/// let ok: Outcome<u8> = Outcome::ok(7);
/// let failed: Outcome<&str> = Outcome::fail("Street Length > 5");
///
/// assert_eq!(ok.failure_message(), None);
/// assert_eq!(failed.failure_message(), Some("Street Length > 5"));
/// ```
pub trait Fallible {
    /// Returns the failure message, or `None` on success.
    fn failure_message(&self) -> Option<&str>;

    /// Returns `true` when [`failure_message`](Self::failure_message) is `Some`.
    #[inline]
    fn has_failed(&self) -> bool {
        self.failure_message().is_some()
    }
}

impl<F: Fallible + ?Sized> Fallible for &F {
    #[inline]
    fn failure_message(&self) -> Option<&str> {
        (**self).failure_message()
    }
}
