use outcome_rail::{Fallible, Outcome, UsageError, ValidatableParam};

#[test]
fn from_value_is_valid_and_present() {
    let param = ValidatableParam::from_value("Altmann");
    assert!(param.is_valid());
    assert!(param.has_value());
    assert!(!param.has_no_value());
    assert!(param.is_valid_and_has_value());
    assert_eq!(param.value(), Some(&"Altmann"));
}

#[test]
fn absent_value_is_still_valid() {
    let param: ValidatableParam<&str> = ValidatableParam::from_option(None);
    assert!(param.is_valid());
    assert!(!param.has_value());
    assert!(param.has_no_value());
    assert!(!param.is_valid_and_has_value());
    assert_eq!(param.value(), None);
    assert_eq!(param, ValidatableParam::absent());
    assert_eq!(param, ValidatableParam::default());
}

#[test]
fn has_value_never_panics_on_failure() {
    let param = ValidatableParam::from_outcome(Outcome::<&str>::fail("E"));
    assert!(!param.is_valid());
    assert!(!param.has_value());
    assert!(param.has_no_value());
    assert!(!param.is_valid_and_has_value());
    assert_eq!(param.error(), "E");
}

#[test]
fn from_outcome_success_is_present() {
    let param = ValidatableParam::from_outcome(Outcome::ok(5));
    assert!(param.is_valid_and_has_value());
    assert_eq!(param.value_or_throw(), &5);
}

#[test]
fn from_optional_outcome_keeps_absence() {
    let param = ValidatableParam::<i32>::from_optional_outcome(Outcome::ok(None));
    assert!(param.is_valid());
    assert!(param.has_no_value());
}

#[test]
fn from_conversion_matches_from_outcome() {
    let converted: ValidatableParam<i32> = Outcome::ok(1).into();
    assert_eq!(converted, ValidatableParam::from_outcome(Outcome::ok(1)));
}

#[test]
#[should_panic(expected = "attempted to read the value of a failed outcome: E")]
fn value_of_invalid_param_panics() {
    let param = ValidatableParam::from_outcome(Outcome::<i32>::fail("E"));
    let _ = param.value();
}

#[test]
#[should_panic(expected = "attempted to read the error of a successful outcome")]
fn error_of_valid_param_panics() {
    let param = ValidatableParam::from_value(1);
    let _ = param.error();
}

#[test]
#[should_panic(expected = "attempted to read an absent value")]
fn value_or_throw_panics_on_absent() {
    let param = ValidatableParam::<i32>::absent();
    let _ = param.value_or_throw();
}

#[test]
fn try_value_distinguishes_invalid_from_absent() {
    let invalid = ValidatableParam::from_outcome(Outcome::<i32>::fail("E"));
    assert_eq!(invalid.try_value(), Err(UsageError::ValueOfFailure { error: "E".to_string() }));

    let absent = ValidatableParam::<i32>::absent();
    assert_eq!(absent.try_value(), Err(UsageError::MissingValue));

    let present = ValidatableParam::from_value(2);
    assert_eq!(present.try_value(), Ok(&2));
}

#[test]
fn guarded_accessors_fall_back_without_panicking() {
    let fallback = 0;

    let invalid = ValidatableParam::from_outcome(Outcome::<i32>::fail("E"));
    assert_eq!(invalid.value_or_none(), None);
    assert_eq!(invalid.value_or(&fallback), &0);

    let absent = ValidatableParam::<i32>::absent();
    assert_eq!(absent.value_or(&fallback), &0);

    let present = ValidatableParam::from_value(9);
    assert_eq!(present.value_or_none(), Some(&9));
    assert_eq!(present.value_or(&fallback), &9);
}

#[test]
fn value_or_default_clones_present_value() {
    assert_eq!(ValidatableParam::from_value(9).value_or_default(), 9);
    assert_eq!(ValidatableParam::<i32>::absent().value_or_default(), 0);
    let invalid = ValidatableParam::from_outcome(Outcome::<String>::fail("E"));
    assert_eq!(invalid.value_or_default(), String::new());
}

#[test]
fn require_checks_presence_only() {
    let present = ValidatableParam::from_value(1);
    assert!(present.require("X is required").is_success());

    let absent = ValidatableParam::<i32>::absent();
    assert_eq!(absent.require("X is required").error(), "X is required");

    let invalid = ValidatableParam::from_outcome(Outcome::<i32>::fail("E"));
    assert_eq!(invalid.require("X is required").error(), "X is required");
}

#[test]
fn outcome_bridges_preserve_state() {
    let invalid = ValidatableParam::from_outcome(Outcome::<i32>::fail("E"));
    assert_eq!(invalid.to_outcome(), Outcome::fail("E"));
    assert_eq!(invalid.outcome(), &Outcome::fail("E"));
    assert_eq!(invalid.failure_message(), Some("E"));
    assert_eq!(invalid.into_outcome(), Outcome::fail("E"));

    let absent = ValidatableParam::<i32>::absent();
    assert_eq!(absent.to_outcome(), Outcome::ok(()));
    assert_eq!(absent.failure_message(), None);
    assert_eq!(absent.into_outcome(), Outcome::ok(None));

    let present = ValidatableParam::from_value(3);
    assert_eq!(present.into_outcome(), Outcome::ok(Some(3)));
}

#[test]
fn map_transforms_present_value_only() {
    assert_eq!(ValidatableParam::from_value("Aa").map(str::len).value(), Some(&2));
    assert!(ValidatableParam::<&str>::absent().map(str::len).has_no_value());

    let invalid = ValidatableParam::from_outcome(Outcome::<&str>::fail("E")).map(str::len);
    assert_eq!(invalid.error(), "E");
}

#[test]
fn params_feed_combine_directly() {
    let name = ValidatableParam::from_value("Altmann");
    let main = ValidatableParam::<&str>::absent();
    let second = ValidatableParam::from_outcome(Outcome::<&str>::fail("Street Length > 5"));

    let combined = Outcome::combine([&name, &main, &second]);
    assert_eq!(combined.error(), "Street Length > 5");
}
