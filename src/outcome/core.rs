use crate::traits::Fallible;
use crate::types::alloc_type::String;
use crate::types::UsageError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Immutable outcome of a fallible operation: a value on success, a message on failure.
///
/// `Outcome<()>` (the default) stands for a void-like success, which is what
/// [`Outcome::create`] and [`Outcome::combine`] produce.
///
/// Failures are plain data. Only misuse of the accessors (reading the
/// value of a failure, or the error of a success) panics.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Success(T)` - Contains the produced value
/// * `Failure(String)` - Contains a non-empty, human-readable message
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let street = "Street2";
/// let length = Outcome::create(street.len() <= 5, "Street Length > 5");
/// assert!(length.is_failure());
/// assert_eq!(length.error(), "Street Length > 5");
///
/// let name: Outcome<&str> = Outcome::ok("Altmann");
/// assert_eq!(*name.value(), "Altmann");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(String),
}

const EMPTY_FAILURE_MESSAGE: &str = "failure message must not be empty";

/// Rejects `{"Failure": ""}` the same way [`Outcome::fail`] does.
#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Outcome")]
        enum Unchecked<T> {
            Success(T),
            Failure(String),
        }

        match Unchecked::deserialize(deserializer)? {
            Unchecked::Success(value) => Ok(Self::Success(value)),
            Unchecked::Failure(message) if message.is_empty() => {
                Err(serde::de::Error::custom(EMPTY_FAILURE_MESSAGE))
            },
            Unchecked::Failure(message) => Ok(Self::Failure(message)),
        }
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome carrying `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::ok(3).is_success());
    /// assert!(Outcome::ok(()).is_success());
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome holding `message`.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty; an empty message would make the
    /// aggregate text produced by [`Outcome::combine`] ambiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed = Outcome::<u32>::fail("Customer Name is required");
    /// assert_eq!(failed.error(), "Customer Name is required");
    /// ```
    #[inline]
    #[track_caller]
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "{EMPTY_FAILURE_MESSAGE}");
        Self::Failure(message)
    }

    /// Wraps `option`, turning `None` into a failure with `message`.
    #[inline]
    #[track_caller]
    pub fn from_option(option: Option<T>, message: impl Into<String>) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::fail(message),
        }
    }

    /// Wraps a standard `Result` whose error is already a message.
    #[inline]
    #[track_caller]
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(message) => Self::fail(message),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure. Use [`try_value`](Self::try_value)
    /// or [`success`](Self::success) when the state is not known.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(misuse) => panic!("{misuse}"),
        }
    }

    /// Consumes the outcome and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{}", UsageError::ValueOfFailure { error }),
        }
    }

    /// Returns the failure message.
    ///
    /// # Panics
    ///
    /// Panics when called on a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &str {
        match self.try_error() {
            Ok(error) => error,
            Err(misuse) => panic!("{misuse}"),
        }
    }

    /// Returns the success value, or the misuse that reading it would be.
    #[inline]
    pub fn try_value(&self) -> Result<&T, UsageError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UsageError::ValueOfFailure { error: error.clone() }),
        }
    }

    /// Returns the failure message, or [`UsageError::ErrorOfSuccess`].
    #[inline]
    pub fn try_error(&self) -> Result<&str, UsageError> {
        match self {
            Self::Success(_) => Err(UsageError::ErrorOfSuccess),
            Self::Failure(error) => Ok(error.as_str()),
        }
    }

    #[must_use]
    #[inline]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error.as_str()),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Maps the success value, preserving a failure unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let len = Outcome::ok("Aaaa").map(str::len);
    /// assert_eq!(len.into_value(), 4);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a further fallible step, invoked only on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn short(street: &str) -> Outcome<&str> {
    ///     Outcome::create(street.len() <= 5, "Street Length > 5").map(|()| street)
    /// }
    ///
    /// assert!(Outcome::ok("Stree").and_then(short).is_success());
    /// assert_eq!(Outcome::ok("Street2").and_then(short).error(), "Street Length > 5");
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Rewrites the failure message, leaving a success untouched.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns an empty message.
    #[inline]
    #[track_caller]
    pub fn map_err<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::fail(f(error)),
        }
    }

    /// Runs `f` on the success value by reference and returns `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Forgets the success value, keeping only the success/failure state.
    #[inline]
    pub fn into_unit(self) -> Outcome {
        self.map(|_| ())
    }

    /// Converts into a standard `Result` with the message as the error.
    #[inline]
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl Outcome {
    /// Adapts a boolean invariant check: `ok(())` when `condition` holds,
    /// `fail(message)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::create(true, "unused").is_success());
    /// assert_eq!(
    ///     Outcome::create(false, "Main Address is required").error(),
    ///     "Main Address is required"
    /// );
    /// ```
    #[inline]
    #[track_caller]
    pub fn create(condition: bool, message: impl Into<String>) -> Self {
        if condition {
            Self::Success(())
        } else {
            Self::fail(message)
        }
    }
}

impl<T> Fallible for Outcome<T> {
    #[inline]
    fn failure_message(&self) -> Option<&str> {
        self.failure()
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
