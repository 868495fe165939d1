use outcome_rail::types::JoinFormat;
use outcome_rail::{combine, Outcome, ValidatableParam};

#[test]
fn empty_combine_is_success() {
    assert_eq!(combine!(), Outcome::ok(()));
}

#[test]
fn combine_macro_mixes_outcomes_and_params() {
    let name: Outcome<String> = Outcome::ok("Altmann".to_string());
    let main = ValidatableParam::<u32>::from_outcome(Outcome::fail("Street Length > 5"));
    let second: Outcome<u8> = Outcome::fail("second");

    let combined = combine!(name, main, main.require("Main Address is required"), second,);
    assert_eq!(combined.error(), "Street Length > 5, Main Address is required, second");

    // arguments are only borrowed
    assert!(name.is_success());
    assert!(!main.is_valid());
}

#[test]
fn combine_macro_with_format() {
    let a: Outcome = Outcome::fail("A");
    let b: Outcome<i32> = Outcome::ok(1);
    let c: Outcome = Outcome::fail("C");

    let format = JoinFormat::semicolon();
    assert_eq!(combine!(with &format; a, b, c).error(), "A; C");
}
