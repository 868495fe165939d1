use outcome_rail::rule::{self, CrossFieldRule, RuleMode};
use outcome_rail::{Outcome, ValidatableParam};

const RULE: &str = "If name starts with A then street should also start with A.";

fn agree(name: &&str, street: &&str) -> bool {
    !name.starts_with('A') || street.starts_with('A')
}

fn invalid(message: &str) -> ValidatableParam<&'static str> {
    ValidatableParam::from_outcome(Outcome::fail(message))
}

#[test]
fn default_mode_is_forwarding() {
    assert_eq!(RuleMode::default(), RuleMode::Forwarding);
    assert_eq!(CrossFieldRule::new(RULE).mode(), RuleMode::Forwarding);
    assert_eq!(CrossFieldRule::new(RULE).message(), RULE);
}

#[test]
fn violated_rule_fails_with_its_message() {
    let name = ValidatableParam::from_value("Altmann");
    let street = ValidatableParam::from_value("Str");

    for mode in [RuleMode::Forwarding, RuleMode::Guarded] {
        let outcome = CrossFieldRule::new(RULE).with_mode(mode).check(&name, &street, agree);
        assert_eq!(outcome.error(), RULE);
    }
}

#[test]
fn satisfied_rule_succeeds() {
    let street = ValidatableParam::from_value("Aa");
    for name in ["Altmann", "Bauer"] {
        let name = ValidatableParam::from_value(name);
        assert!(rule::validate(&name, &street, agree, RULE).is_success());
    }

    let name = ValidatableParam::from_value("Bauer");
    let street = ValidatableParam::from_value("Str");
    assert!(rule::validate(&name, &street, agree, RULE).is_success());
}

#[test]
fn absent_field_is_never_dereferenced() {
    let name = ValidatableParam::from_value("Altmann");
    let street = ValidatableParam::<&str>::absent();

    for mode in [RuleMode::Forwarding, RuleMode::Guarded] {
        let outcome = CrossFieldRule::new(RULE)
            .with_mode(mode)
            .check(&name, &street, |_, _| panic!("predicate must not run"));
        assert!(outcome.is_success());
    }
}

#[test]
fn forwarding_returns_field_failures_verbatim() {
    let name = invalid("Customer Name must not be empty");
    let street = invalid("Street Length > 5");

    let outcome = CrossFieldRule::new(RULE).check(&name, &street, |_, _| false);
    assert_eq!(outcome.error(), "Customer Name must not be empty, Street Length > 5");
}

#[test]
fn guarded_is_silent_about_invalid_fields() {
    let name = ValidatableParam::from_value("Altmann");
    let street = invalid("Street Length > 5");

    let outcome = CrossFieldRule::new(RULE)
        .with_mode(RuleMode::Guarded)
        .check(&name, &street, |_, _| panic!("predicate must not run"));
    assert!(outcome.is_success());
}

#[test]
fn three_field_rule() {
    let rule = CrossFieldRule::new("streets must differ");
    let name = ValidatableParam::from_value("Altmann");
    let main = ValidatableParam::from_value("Aa");
    let second = ValidatableParam::from_value("Aa");

    let outcome = rule.check3(&name, &main, &second, |_, main, second| main != second);
    assert_eq!(outcome.error(), "streets must differ");

    let second = invalid("Street Length > 5");
    let outcome = rule.check3(&name, &main, &second, |_, _, _| false);
    assert_eq!(outcome.error(), "Street Length > 5");

    let guarded = rule.with_mode(RuleMode::Guarded);
    assert!(guarded.check3(&name, &main, &second, |_, _, _| false).is_success());
}

#[test]
#[should_panic(expected = "rule message must not be empty")]
fn empty_rule_message_panics() {
    let _ = CrossFieldRule::new("");
}

#[cfg(feature = "serde")]
#[test]
fn rule_mode_serde() {
    let serialized = serde_json::to_string(&RuleMode::Guarded).unwrap();
    assert_eq!(serialized, r#""Guarded""#);
    let deserialized: RuleMode = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, RuleMode::Guarded);
}
