use crate::types::{Accumulator, JoinFormat};
use crate::Outcome;

/// Collects outcomes into one, gathering every success value or, if any
/// input failed, joining all failure messages in order exactly like
/// [`Outcome::combine`].
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let streets: Outcome<Vec<&str>> =
///     vec![Outcome::ok("Aa"), Outcome::ok("Stree")].into_iter().collect();
/// assert_eq!(streets.into_value(), vec!["Aa", "Stree"]);
///
/// let streets: Outcome<Vec<&str>> =
///     vec![Outcome::fail("first"), Outcome::ok("Aa"), Outcome::fail("second")]
///         .into_iter()
///         .collect();
/// assert_eq!(streets.error(), "first, second");
/// ```
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut acc = Accumulator::new();
        let mut values = crate::types::alloc_type::Vec::new();

        for outcome in iter {
            match outcome {
                Outcome::Success(value) => {
                    acc.observe_owned(None);
                    if acc.is_empty() {
                        values.push(value);
                    }
                },
                Outcome::Failure(error) => acc.observe_owned(Some(error)),
            }
        }

        if acc.is_empty() {
            Outcome::Success(values.into_iter().collect())
        } else {
            Outcome::Failure(acc.join(&JoinFormat::default()))
        }
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_success().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.success().into_iter()
    }
}
