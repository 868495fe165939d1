use outcome_rail::types::{Accumulator, JoinFormat, UsageError};
use outcome_rail::Outcome;

#[test]
fn accumulator_counts_inputs_and_keeps_failures_in_order() {
    let mut acc = Accumulator::new();
    assert!(acc.is_empty());

    acc.observe(Some("B"));
    acc.observe(None);
    acc.observe(Some("A"));
    acc.observe(Some("B"));

    assert_eq!(acc.visited(), 4);
    assert_eq!(acc.len(), 3);
    assert_eq!(acc.iter().collect::<Vec<_>>(), vec!["B", "A", "B"]);
    assert_eq!(acc.join(&JoinFormat::default()), "B, A, B");
}

#[test]
fn accumulator_into_outcome() {
    let empty: Accumulator = [None, None].into_iter().collect();
    assert_eq!(empty.visited(), 2);
    assert_eq!(empty.into_outcome(&JoinFormat::default()), Outcome::ok(()));

    let mut acc = Accumulator::new();
    acc.extend([Some("X"), None]);
    acc.observe_owned(Some("Y".to_string()));
    assert_eq!(acc.clone().into_outcome(&JoinFormat::semicolon()).error(), "X; Y");
    assert_eq!(acc.into_inner().as_slice(), ["X", "Y"]);
}

#[test]
fn join_format_presets() {
    let messages = ["B", "A"];
    assert_eq!(JoinFormat::default().join(messages), "B, A");
    assert_eq!(JoinFormat::semicolon().join(messages), "B; A");
    assert_eq!(JoinFormat::lines().join(messages), "B\nA");
    assert_eq!(JoinFormat::default().join(std::iter::empty::<&str>()), "");
}

#[test]
fn join_format_builder() {
    let format = JoinFormat::default().with_separator(" | ").with_prefix("[").with_suffix("]");
    assert_eq!(format.join(["B", "A", "B"]), "[B] | [A] | [B]");
}

#[test]
fn usage_error_display() {
    assert_eq!(
        UsageError::ValueOfFailure { error: "boom".to_string() }.to_string(),
        "attempted to read the value of a failed outcome: boom"
    );
    assert_eq!(
        UsageError::ErrorOfSuccess.to_string(),
        "attempted to read the error of a successful outcome"
    );
    assert_eq!(UsageError::MissingValue.to_string(), "attempted to read an absent value");
}

#[test]
fn usage_error_is_std_error() {
    let boxed: Box<dyn std::error::Error> = Box::new(UsageError::MissingValue);
    assert!(boxed.source().is_none());
}

#[cfg(feature = "serde")]
#[test]
fn join_format_serde() {
    let format = JoinFormat::lines().with_prefix("- ");
    let serialized = serde_json::to_string(&format).unwrap();
    let deserialized: JoinFormat = serde_json::from_str(&serialized).unwrap();
    assert_eq!(format, deserialized);
}
