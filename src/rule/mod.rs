//! Cross-field business rules.
//!
//! A rule is a pure predicate over the values of two or more
//! [`ValidatableParam`]s. It is only ever evaluated when every referenced
//! argument is valid and present, so it can never dereference a missing
//! value and never adds a second message for a field that already failed.
//!
//! How a rule treats a referenced field that is invalid is selected with
//! [`RuleMode`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::rule;
//! use outcome_rail::ValidatableParam;
//!
//! let name = ValidatableParam::from_value("Altmann");
//! let street = ValidatableParam::from_value("Str");
//!
//! let outcome = rule::validate(
//!     &name,
//!     &street,
//!     |name, street| !name.starts_with('A') || street.starts_with('A'),
//!     "If name starts with A then street should also start with A.",
//! );
//! assert_eq!(outcome.error(), "If name starts with A then street should also start with A.");
//! ```

use crate::traits::Fallible;
use crate::types::alloc_type::String;
use crate::{Outcome, ValidatableParam};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interaction between a rule and the fields it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RuleMode {
    /// The rule first combines the outcomes of its fields and returns that
    /// failure verbatim if any field is invalid. The caller then does not
    /// report those fields separately.
    #[default]
    Forwarding,
    /// The rule succeeds silently unless every field is valid and present.
    /// The caller reports each field's own outcome alongside the rule.
    Guarded,
}

/// A named cross-field rule: the message it fails with and its [`RuleMode`].
///
/// # Examples
///
/// ```
/// use outcome_rail::rule::{CrossFieldRule, RuleMode};
/// use outcome_rail::{Outcome, ValidatableParam};
///
/// let rule = CrossFieldRule::new("street must match name").with_mode(RuleMode::Guarded);
/// let name = ValidatableParam::from_value("Altmann");
/// let street = ValidatableParam::from_outcome(Outcome::<&str>::fail("Street Length > 5"));
///
/// // Guarded rules stay silent about fields they cannot see.
/// assert!(rule.check(&name, &street, |_, _| false).is_success());
///
/// // Forwarding rules hand back the field failure instead.
/// let rule = rule.with_mode(RuleMode::Forwarding);
/// assert_eq!(rule.check(&name, &street, |_, _| false).error(), "Street Length > 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrossFieldRule {
    message: String,
    mode: RuleMode,
}

impl CrossFieldRule {
    /// # Panics
    ///
    /// Panics if `message` is empty.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "rule message must not be empty");
        Self { message, mode: RuleMode::default() }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RuleMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluates a two-field rule.
    pub fn check<A, B, P>(
        &self,
        a: &ValidatableParam<A>,
        b: &ValidatableParam<B>,
        predicate: P,
    ) -> Outcome
    where
        P: FnOnce(&A, &B) -> bool,
    {
        if let Some(forwarded) = self.forward([a as &dyn Fallible, b as &dyn Fallible]) {
            return forwarded;
        }
        match (a.value_or_none(), b.value_or_none()) {
            (Some(a), Some(b)) => self.verdict(predicate(a, b)),
            _ => Outcome::ok(()),
        }
    }

    /// Evaluates a three-field rule.
    pub fn check3<A, B, C, P>(
        &self,
        a: &ValidatableParam<A>,
        b: &ValidatableParam<B>,
        c: &ValidatableParam<C>,
        predicate: P,
    ) -> Outcome
    where
        P: FnOnce(&A, &B, &C) -> bool,
    {
        if let Some(forwarded) =
            self.forward([a as &dyn Fallible, b as &dyn Fallible, c as &dyn Fallible])
        {
            return forwarded;
        }
        match (a.value_or_none(), b.value_or_none(), c.value_or_none()) {
            (Some(a), Some(b), Some(c)) => self.verdict(predicate(a, b, c)),
            _ => Outcome::ok(()),
        }
    }

    fn forward<'a, const N: usize>(&self, fields: [&'a dyn Fallible; N]) -> Option<Outcome> {
        match self.mode {
            RuleMode::Forwarding => {
                let fields = Outcome::combine(fields);
                fields.is_failure().then_some(fields)
            },
            RuleMode::Guarded => None,
        }
    }

    fn verdict(&self, holds: bool) -> Outcome {
        if holds {
            return Outcome::ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(rule = %self.message, "cross-field rule violated");

        Outcome::Failure(self.message.clone())
    }
}

/// Evaluates a two-field rule in the default [`RuleMode::Forwarding`] mode.
///
/// Equivalent to `CrossFieldRule::new(message).check(a, b, predicate)`.
#[track_caller]
pub fn validate<A, B, P>(
    a: &ValidatableParam<A>,
    b: &ValidatableParam<B>,
    predicate: P,
    message: impl Into<String>,
) -> Outcome
where
    P: FnOnce(&A, &B) -> bool,
{
    CrossFieldRule::new(message).check(a, b, predicate)
}
