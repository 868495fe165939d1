use crate::types::alloc_type::String;
use crate::types::{ErrorVec, JoinFormat};
use crate::Outcome;

/// Ordered collection of failure messages gathered while combining outcomes.
///
/// Every inspected input is counted, but only failures contribute a
/// message. Messages are kept exactly in the order they were observed,
/// duplicates included, and nothing is formatted until the accumulator is
/// turned into an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accumulator {
    messages: ErrorVec<String>,
    visited: usize,
}

impl Accumulator {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { messages: ErrorVec::new(), visited: 0 }
    }

    /// Records one inspected input, copying its message when it failed.
    #[inline]
    pub fn observe(&mut self, message: Option<&str>) {
        self.observe_owned(message.map(String::from));
    }

    /// Records one inspected input whose message is already owned.
    #[inline]
    pub fn observe_owned(&mut self, message: Option<String>) {
        self.visited += 1;
        if let Some(message) = message {
            self.messages.push(message);
        }
    }

    /// Returns true if no failure has been observed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of failures observed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Number of inputs observed so far, successes included.
    #[inline]
    pub fn visited(&self) -> usize {
        self.visited
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Joins the recorded messages with `format`.
    pub fn join(&self, format: &JoinFormat) -> String {
        format.join(self.iter())
    }

    /// Success when nothing failed, otherwise one failure whose message is
    /// every recorded message joined with `format`.
    pub fn into_outcome(self, format: &JoinFormat) -> Outcome {
        if self.is_empty() {
            Outcome::ok(())
        } else {
            Outcome::Failure(self.join(format))
        }
    }

    /// Consumes the accumulator and returns the recorded messages.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<String> {
        self.messages
    }
}

impl<'a> Extend<Option<&'a str>> for Accumulator {
    fn extend<I: IntoIterator<Item = Option<&'a str>>>(&mut self, iter: I) {
        for message in iter {
            self.observe(message);
        }
    }
}

impl<'a> FromIterator<Option<&'a str>> for Accumulator {
    fn from_iter<I: IntoIterator<Item = Option<&'a str>>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
