use crate::traits::Fallible;
use crate::types::alloc_type::String;
use crate::types::UsageError;
use crate::Outcome;

/// A constructor argument that may be valid, invalid, present or absent.
///
/// Wraps exactly one `Outcome<Option<T>>`. A failed outcome means the
/// argument is invalid; a successful `None` means the caller passed
/// nothing, which is not a failure by itself. Whether absence matters is
/// decided by the consuming constructor (see [`require`](Self::require)).
///
/// All conversions are explicit: build one with [`from_value`],
/// [`from_option`], [`from_outcome`] or [`absent`].
///
/// [`from_value`]: Self::from_value
/// [`from_option`]: Self::from_option
/// [`from_outcome`]: Self::from_outcome
/// [`absent`]: Self::absent
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, ValidatableParam};
///
/// let street = ValidatableParam::from_outcome(Outcome::<&str>::fail("Street Length > 5"));
/// assert!(!street.is_valid());
/// assert!(!street.has_value());
///
/// let second: ValidatableParam<&str> = ValidatableParam::absent();
/// assert!(second.is_valid());
/// assert!(second.has_no_value());
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ValidatableParam<T> {
    outcome: Outcome<Option<T>>,
}

impl<T> ValidatableParam<T> {
    /// Wraps the outcome of validating `T`; a success is always present.
    #[inline]
    pub fn from_outcome(outcome: Outcome<T>) -> Self {
        Self { outcome: outcome.map(Some) }
    }

    /// Wraps an outcome that may itself succeed with nothing.
    #[inline]
    pub fn from_optional_outcome(outcome: Outcome<Option<T>>) -> Self {
        Self { outcome }
    }

    /// Wraps an already valid value.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self { outcome: Outcome::ok(Some(value)) }
    }

    /// Wraps a value that may be absent; `None` is still valid.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        Self { outcome: Outcome::ok(value) }
    }

    /// A valid argument carrying no value.
    #[inline]
    pub fn absent() -> Self {
        Self::from_option(None)
    }

    /// `true` when the underlying outcome succeeded, whether or not a value is present.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_success()
    }

    /// `true` only for a valid argument carrying a value. Never panics.
    #[must_use]
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self.outcome, Outcome::Success(Some(_)))
    }

    #[must_use]
    #[inline]
    pub fn has_no_value(&self) -> bool {
        !self.has_value()
    }

    #[must_use]
    #[inline]
    pub fn is_valid_and_has_value(&self) -> bool {
        self.is_valid() && self.has_value()
    }

    /// Returns the possibly absent value of a valid argument.
    ///
    /// # Panics
    ///
    /// Panics if the argument is invalid.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> Option<&T> {
        self.outcome.value().as_ref()
    }

    /// Returns the failure message of an invalid argument.
    ///
    /// # Panics
    ///
    /// Panics if the argument is valid.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &str {
        self.outcome.error()
    }

    /// Returns the value, reporting invalidity or absence as a [`UsageError`].
    pub fn try_value(&self) -> Result<&T, UsageError> {
        match self.outcome.try_value()? {
            Some(value) => Ok(value),
            None => Err(UsageError::MissingValue),
        }
    }

    /// Returns the value of a required argument.
    ///
    /// # Panics
    ///
    /// Panics if the argument is invalid or absent.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value_or_throw(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(misuse) => panic!("{misuse}"),
        }
    }

    /// Returns the value when [`has_value`](Self::has_value), otherwise `None`.
    #[must_use]
    #[inline]
    pub fn value_or_none(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Success(value) => value.as_ref(),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the value when [`has_value`](Self::has_value), otherwise `default`.
    #[must_use]
    #[inline]
    pub fn value_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.value_or_none().unwrap_or(default)
    }

    /// Returns a clone of the value when [`has_value`](Self::has_value),
    /// otherwise `T::default()`.
    #[must_use]
    #[inline]
    pub fn value_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.value_or_none().cloned().unwrap_or_default()
    }

    /// The required-field check: succeeds only when a valid value is present.
    ///
    /// Absence and invalidity are reported independently by a constructor:
    /// an invalid argument fails this check *and* carries its own message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::ValidatableParam;
    ///
    /// let main: ValidatableParam<&str> = ValidatableParam::absent();
    /// assert_eq!(main.require("Main Address is required").error(), "Main Address is required");
    /// ```
    #[inline]
    #[track_caller]
    pub fn require(&self, message: impl Into<String>) -> Outcome {
        Outcome::create(self.has_value(), message)
    }

    /// Borrows the wrapped outcome.
    #[inline]
    pub fn outcome(&self) -> &Outcome<Option<T>> {
        &self.outcome
    }

    /// Unwraps into the underlying outcome: `ok(value)` when valid, `fail(error)` otherwise.
    #[inline]
    pub fn into_outcome(self) -> Outcome<Option<T>> {
        self.outcome
    }

    /// Bridge for combination that keeps only validity and the failure message.
    #[inline]
    pub fn to_outcome(&self) -> Outcome {
        match &self.outcome {
            Outcome::Success(_) => Outcome::ok(()),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    /// Maps a present value, leaving absence and invalidity as they are.
    #[inline]
    pub fn map<U, F>(self, f: F) -> ValidatableParam<U>
    where
        F: FnOnce(T) -> U,
    {
        ValidatableParam { outcome: self.outcome.map(|value| value.map(f)) }
    }
}

impl<T> Fallible for ValidatableParam<T> {
    #[inline]
    fn failure_message(&self) -> Option<&str> {
        self.outcome.failure()
    }
}

impl<T> From<Outcome<T>> for ValidatableParam<T> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        Self::from_outcome(outcome)
    }
}

impl<T> Default for ValidatableParam<T> {
    fn default() -> Self {
        Self::absent()
    }
}
