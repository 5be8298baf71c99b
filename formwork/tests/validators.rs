//! Tests for the builtin rules and validator composition.

use formwork::Value;
use formwork::validation::{ErrorToken, Validator, compose, rules, tokens};
use regex::Regex;

#[test]
fn test_required_fails_only_absent_values() {
    let required = rules::required();

    assert_eq!(
        required.check(&Value::Null).unwrap().as_str(),
        tokens::REQUIRED
    );

    // Presence is the only thing checked: empty and falsy values pass.
    assert_eq!(required.check(&Value::from("Joe")), None);
    assert_eq!(required.check(&Value::from("")), None);
    assert_eq!(required.check(&Value::from(false)), None);
    assert_eq!(required.check(&Value::from(0)), None);
}

#[test]
fn test_pattern_matches_strings() {
    let digits = rules::pattern(Regex::new("^[0-9]{4}$").unwrap(), "validate.digits");

    assert_eq!(digits.check(&Value::from("1234")), None);
    assert_eq!(
        digits.check(&Value::from("12a4")).unwrap().as_str(),
        "validate.digits"
    );
}

#[test]
fn test_pattern_fails_absent_falsy_and_non_string_values() {
    let digits = rules::pattern(Regex::new("^[0-9]{4}$").unwrap(), "validate.digits");

    assert!(digits.check(&Value::Null).is_some());
    assert!(digits.check(&Value::from("")).is_some());
    assert!(digits.check(&Value::from(1234)).is_some());
    assert!(digits.check(&Value::from(false)).is_some());
}

#[test]
fn test_pattern_str_compiles() {
    let hex = rules::pattern_str("^[0-9a-f]+$", "validate.hex").unwrap();

    assert_eq!(hex.check(&Value::from("c0ffee")), None);
    assert_eq!(
        hex.check(&Value::from("tea")).unwrap().as_str(),
        "validate.hex"
    );
}

#[test]
fn test_pattern_str_rejects_invalid_expressions() {
    let err = rules::pattern_str("(", "validate.never").unwrap_err();

    assert_eq!(err.pattern, "(");
    assert!(err.to_string().contains("invalid pattern"));
}

#[test]
fn test_length_bounds() {
    let both = rules::length(2..=4, "validate.length");
    assert!(both.check(&Value::from("a")).is_some());
    assert_eq!(both.check(&Value::from("ab")), None);
    assert_eq!(both.check(&Value::from("abcd")), None);
    assert!(both.check(&Value::from("abcde")).is_some());

    let min = rules::min_length(3, "validate.short");
    assert!(min.check(&Value::from("ab")).is_some());
    assert_eq!(min.check(&Value::from("abc")), None);

    let max = rules::max_length(2, "validate.long");
    assert_eq!(max.check(&Value::from("ab")), None);
    assert!(max.check(&Value::from("abc")).is_some());
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let max = rules::max_length(5, "validate.long");

    // "héllo" is five characters but six bytes.
    assert_eq!(max.check(&Value::from("héllo")), None);
}

#[test]
fn test_length_fails_falsy_and_non_string_values() {
    let max = rules::max_length(10, "validate.long");

    assert!(max.check(&Value::Null).is_some());
    assert!(max.check(&Value::from("")).is_some());
    assert!(max.check(&Value::from(3)).is_some());
}

#[test]
fn test_email_rule() {
    let email = rules::email();

    assert_eq!(email.check(&Value::from("a@b.com")), None);
    assert_eq!(
        email.check(&Value::from("not-an-email")).unwrap().as_str(),
        tokens::EMAIL
    );
    assert!(email.check(&Value::Null).is_some());
    assert!(email.check(&Value::from("")).is_some());
}

#[test]
fn test_equals_rule() {
    let answer = rules::equals(42, "validate.answer");

    assert_eq!(answer.check(&Value::from(42)), None);
    assert!(answer.check(&Value::from(41)).is_some());
    assert!(answer.check(&Value::from("42")).is_some());
}

#[test]
fn test_contains_rule() {
    let at_sign = rules::contains("@", "validate.at");

    assert_eq!(at_sign.check(&Value::from("a@b")), None);
    assert!(at_sign.check(&Value::from("ab")).is_some());
    assert!(at_sign.check(&Value::Null).is_some());
}

#[test]
fn test_checked_rule() {
    let terms = rules::checked("validate.terms");

    assert_eq!(terms.check(&Value::from(true)), None);
    assert!(terms.check(&Value::from(false)).is_some());
    assert!(terms.check(&Value::Null).is_some());
    assert!(terms.check(&Value::from("true")).is_some());
}

#[test]
fn test_compose_short_circuits_left_to_right() {
    let username = compose([rules::required(), rules::min_length(2, "validate.min")]);

    // The first failing validator wins; later ones are never consulted.
    assert_eq!(
        username.check(&Value::Null).unwrap().as_str(),
        tokens::REQUIRED
    );
    assert_eq!(
        username.check(&Value::from("a")).unwrap().as_str(),
        "validate.min"
    );
    assert_eq!(username.check(&Value::from("ab")), None);
}

#[test]
fn test_compose_empty_always_passes() {
    let anything: [Validator; 0] = [];
    let passes = compose(anything);

    assert_eq!(passes.check(&Value::Null), None);
    assert_eq!(passes.check(&Value::from("x")), None);
}

#[test]
fn test_and_chains_two_validators() {
    let email = rules::required().and(rules::email());

    assert_eq!(
        email.check(&Value::Null).unwrap().as_str(),
        tokens::REQUIRED
    );
    assert_eq!(
        email.check(&Value::from("nope")).unwrap().as_str(),
        tokens::EMAIL
    );
    assert_eq!(email.check(&Value::from("a@b.com")), None);
}

#[test]
fn test_empty_token_normalized_to_pass() {
    let blank = Validator::new(|_| Some(ErrorToken::new("")));

    assert_eq!(blank.check(&Value::from("x")), None);
    assert_eq!(blank.check(&Value::Null), None);
}

#[test]
fn test_validators_are_shared_by_clone() {
    let required = rules::required();
    let first = compose([required.clone(), rules::min_length(1, "validate.min")]);
    let second = compose([required, rules::email()]);

    assert!(first.check(&Value::Null).is_some());
    assert!(second.check(&Value::Null).is_some());
}
