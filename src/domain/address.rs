use crate::types::alloc_type::String;
use crate::Outcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A postal address. Only obtainable through [`Address::create`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address {
    street: String,
    number: String,
}

impl Address {
    /// Longest accepted street, in characters.
    pub const MAX_STREET_LENGTH: usize = 5;
    pub const STREET_TOO_LONG: &'static str = "Street Length > 5";

    /// # Examples
    ///
    /// ```
    /// use outcome_rail::domain::Address;
    ///
    /// assert!(Address::create("Stree", "2").is_success());
    /// assert_eq!(Address::create("Street2", "2").error(), "Street Length > 5");
    /// ```
    pub fn create(street: impl Into<String>, number: impl Into<String>) -> Outcome<Address> {
        let street = street.into();
        Outcome::create(street.chars().count() <= Self::MAX_STREET_LENGTH, Self::STREET_TOO_LONG)
            .map(|()| Address { street, number: number.into() })
    }

    #[inline]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }
}
