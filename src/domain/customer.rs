use crate::domain::{Address, CustomerName};
use crate::rule::{CrossFieldRule, RuleMode};
use crate::{combine, Outcome, ValidatableParam};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A customer with a required name, a required main address and an
/// optional second address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Customer {
    name: CustomerName,
    main_address: Address,
    second_address: Option<Address>,
}

impl Customer {
    pub const NAME_REQUIRED: &'static str = "Customer Name is required";
    pub const MAIN_ADDRESS_REQUIRED: &'static str = "Main Address is required";
    pub const NAME_STREET_MISMATCH: &'static str =
        "If name starts with A then street should also start with A.";

    /// Builds a customer with the default [`RuleMode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::domain::{Address, Customer, CustomerName};
    /// use outcome_rail::ValidatableParam;
    ///
    /// let customer = Customer::create(
    ///     CustomerName::create("Altmann").into(),
    ///     Address::create("Str", "1").into(),
    ///     Address::create("Street2", "2").into(),
    /// );
    /// assert_eq!(
    ///     customer.error(),
    ///     "If name starts with A then street should also start with A., Street Length > 5"
    /// );
    ///
    /// let customer = Customer::create(
    ///     CustomerName::create("Altmann").into(),
    ///     Address::create("Aaaa", "1").into(),
    ///     ValidatableParam::absent(),
    /// );
    /// assert!(customer.is_success());
    /// ```
    pub fn create(
        name: ValidatableParam<CustomerName>,
        main_address: ValidatableParam<Address>,
        second_address: ValidatableParam<Address>,
    ) -> Outcome<Customer> {
        Self::create_with(name, main_address, second_address, RuleMode::default())
    }

    /// Builds a customer, reporting every problem at once.
    ///
    /// Aggregate order in [`RuleMode::Forwarding`]: name/street rule (which
    /// carries the name and main address failures), name required, main
    /// address required, second address.
    ///
    /// Aggregate order in [`RuleMode::Guarded`]: name, main address, name
    /// required, main address required, name/street rule, second address.
    pub fn create_with(
        name: ValidatableParam<CustomerName>,
        main_address: ValidatableParam<Address>,
        second_address: ValidatableParam<Address>,
        mode: RuleMode,
    ) -> Outcome<Customer> {
        let name_required = name.require(Self::NAME_REQUIRED);
        let main_address_required = main_address.require(Self::MAIN_ADDRESS_REQUIRED);
        let name_street = CrossFieldRule::new(Self::NAME_STREET_MISMATCH)
            .with_mode(mode)
            .check(&name, &main_address, name_and_street_agree);

        let outcome = match mode {
            RuleMode::Forwarding => combine!(
                name_street,
                name_required,
                main_address_required,
                second_address
            ),
            RuleMode::Guarded => combine!(
                name,
                main_address,
                name_required,
                main_address_required,
                name_street,
                second_address
            ),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(?mode, valid = outcome.is_success(), "customer construction checked");

        if let Outcome::Failure(error) = outcome {
            return Outcome::Failure(error);
        }

        let (Some(Some(name)), Some(Some(main_address)), Some(second_address)) = (
            name.into_outcome().into_success(),
            main_address.into_outcome().into_success(),
            second_address.into_outcome().into_success(),
        ) else {
            unreachable!("combined checks passed with a missing or invalid argument");
        };

        Outcome::ok(Customer { name, main_address, second_address })
    }

    #[inline]
    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    #[inline]
    pub fn main_address(&self) -> &Address {
        &self.main_address
    }

    #[inline]
    pub fn second_address(&self) -> Option<&Address> {
        self.second_address.as_ref()
    }
}

fn name_and_street_agree(name: &CustomerName, main_address: &Address) -> bool {
    !name.value().starts_with('A') || main_address.street().starts_with('A')
}
