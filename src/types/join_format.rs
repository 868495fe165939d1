//! Formatting of aggregate failure messages.

use crate::types::alloc_type::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls how the messages of several failures are joined into one.
///
/// The default reproduces the canonical aggregate text: messages in input
/// order separated by `", "`, with nothing around each message.
///
/// # Examples
///
/// ```
/// use outcome_rail::types::JoinFormat;
///
/// let fmt = JoinFormat::default();
/// assert_eq!(fmt.join(["B", "A"]), "B, A");
///
/// let fmt = JoinFormat::lines().with_prefix("- ");
/// assert_eq!(fmt.join(["B", "A"]), "- B\n- A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoinFormat {
    pub separator: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Default for JoinFormat {
    fn default() -> Self {
        Self { separator: ", ".into(), prefix: None, suffix: None }
    }
}

impl JoinFormat {
    #[inline]
    pub fn semicolon() -> Self {
        Self { separator: "; ".into(), ..Default::default() }
    }

    #[inline]
    pub fn lines() -> Self {
        Self { separator: "\n".into(), ..Default::default() }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Joins `messages` in iteration order. Duplicates are kept.
    pub fn join<'a, I>(&self, messages: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut result = String::new();
        for (i, message) in messages.into_iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
            }
            if let Some(prefix) = &self.prefix {
                result.push_str(prefix);
            }
            result.push_str(message);
            if let Some(suffix) = &self.suffix {
                result.push_str(suffix);
            }
        }
        result
    }
}
