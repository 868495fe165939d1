use crate::traits::Fallible;
use crate::types::{Accumulator, JoinFormat};
use crate::Outcome;

impl Outcome {
    /// Folds an ordered sequence of outcomes into one.
    ///
    /// The result is a success when every input succeeded (including when
    /// there are no inputs). Otherwise it is a failure whose message is every
    /// failing input's message, in input order, joined with `", "`.
    /// Duplicates are kept and successes contribute nothing. Every input is
    /// visited; there is no short-circuit.
    ///
    /// Inputs only need to be [`Fallible`], so outcomes of different value
    /// types and [`ValidatableParam`](crate::ValidatableParam)s can be mixed
    /// through `&dyn Fallible` (see [`combine!`](crate::combine)).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let combined = Outcome::combine([
    ///     Outcome::fail("B"),
    ///     Outcome::ok(()),
    ///     Outcome::fail("A"),
    /// ]);
    /// assert_eq!(combined.error(), "B, A");
    ///
    /// assert!(Outcome::combine(Vec::<Outcome>::new()).is_success());
    /// ```
    #[inline]
    pub fn combine<I>(results: I) -> Outcome
    where
        I: IntoIterator,
        I::Item: Fallible,
    {
        Self::combine_with(results, &JoinFormat::default())
    }

    /// [`combine`](Self::combine) with a custom [`JoinFormat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::types::JoinFormat;
    /// use outcome_rail::Outcome;
    ///
    /// let combined = Outcome::combine_with(
    ///     [Outcome::<()>::fail("B"), Outcome::fail("A")],
    ///     &JoinFormat::semicolon(),
    /// );
    /// assert_eq!(combined.error(), "B; A");
    /// ```
    pub fn combine_with<I>(results: I, format: &JoinFormat) -> Outcome
    where
        I: IntoIterator,
        I::Item: Fallible,
    {
        let mut acc = Accumulator::new();
        for result in results {
            acc.observe(result.failure_message());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(inputs = acc.visited(), failures = acc.len(), "combined outcomes");

        acc.into_outcome(format)
    }
}
