use crate::types::alloc_type::String;
use crate::Outcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A customer's name. Only obtainable through [`CustomerName::create`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomerName {
    value: String,
}

impl CustomerName {
    pub const EMPTY: &'static str = "Customer Name must not be empty";

    /// # Examples
    ///
    /// ```
    /// use outcome_rail::domain::CustomerName;
    ///
    /// assert_eq!(CustomerName::create("Altmann").value().value(), "Altmann");
    /// assert_eq!(CustomerName::create("").error(), CustomerName::EMPTY);
    /// ```
    pub fn create(value: impl Into<String>) -> Outcome<CustomerName> {
        let value = value.into();
        Outcome::create(!value.is_empty(), Self::EMPTY).map(|()| CustomerName { value })
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}
