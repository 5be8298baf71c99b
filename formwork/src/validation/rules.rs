//! Builtin validation rules.
//!
//! Atomic validators and parameterized factories for the common checks.
//! Every produced [`Validator`] is total over [`Value`]: an absent value
//! is a valid input everywhere, never an error. The only fallible
//! operation in this module is [`pattern_str`] construction.

use std::ops::RangeBounds;

use regex::Regex;
use thiserror::Error;

use super::token::{ErrorToken, tokens};
use super::validator::Validator;
use crate::value::Value;

/// Error returned by [`pattern_str`] when the expression does not
/// compile.
#[derive(Debug, Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The rejected pattern.
    pub pattern: String,
    /// The underlying regex error.
    pub source: regex::Error,
}

/// Requires the value to be present.
///
/// Fails with [`tokens::REQUIRED`] only when the value is absent. An
/// empty string is present and passes; pair with [`length`] or
/// [`pattern`] to reject empties.
pub fn required() -> Validator {
    Validator::new(|value| value.is_null().then(|| ErrorToken::new(tokens::REQUIRED)))
}

/// Requires the value to match a pre-compiled pattern.
///
/// The produced validator fails with `token` when the value is
/// absent/falsy, not a string, or does not match. Partial application
/// with a fixed pattern and token yields a reusable validator.
pub fn pattern(re: Regex, token: impl Into<ErrorToken>) -> Validator {
    let token = token.into();
    Validator::new(move |value| {
        let matched = !value.is_falsy() && value.as_str().is_some_and(|s| re.is_match(s));
        (!matched).then(|| token.clone())
    })
}

/// Compiles `pattern` and builds a [`pattern`] validator from it.
pub fn pattern_str(pattern: &str, token: impl Into<ErrorToken>) -> Result<Validator, PatternError> {
    let re = Regex::new(pattern).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(self::pattern(re, token))
}

/// Requires the character count of a string value to fall within
/// `bounds`.
///
/// Parameterize by whichever bounds apply: `length(2.., t)` for a
/// minimum, `length(..=10, t)` for a maximum, `length(2..=10, t)` for
/// both. Counts characters, not bytes. Absent/falsy or non-string
/// values fail with `token`.
pub fn length<B>(bounds: B, token: impl Into<ErrorToken>) -> Validator
where
    B: RangeBounds<usize> + Send + Sync + 'static,
{
    let token = token.into();
    Validator::new(move |value| {
        let within = !value.is_falsy()
            && value
                .as_str()
                .is_some_and(|s| bounds.contains(&s.chars().count()));
        (!within).then(|| token.clone())
    })
}

/// Requires at least `min` characters.
pub fn min_length(min: usize, token: impl Into<ErrorToken>) -> Validator {
    length(min.., token)
}

/// Requires at most `max` characters.
pub fn max_length(max: usize, token: impl Into<ErrorToken>) -> Validator {
    length(..=max, token)
}

/// Requires a syntactically valid email address.
///
/// Fails with [`tokens::EMAIL`] when the value is absent/falsy, not a
/// string, or not a well-formed address.
pub fn email() -> Validator {
    Validator::new(|value| {
        let valid = !value.is_falsy()
            && value
                .as_str()
                .is_some_and(email_address::EmailAddress::is_valid);
        (!valid).then(|| ErrorToken::new(tokens::EMAIL))
    })
}

/// Requires the value to equal `expected`.
pub fn equals(expected: impl Into<Value>, token: impl Into<ErrorToken>) -> Validator {
    let expected = expected.into();
    let token = token.into();
    Validator::new(move |value| (*value != expected).then(|| token.clone()))
}

/// Requires a string value containing `substr`.
pub fn contains(substr: impl Into<String>, token: impl Into<ErrorToken>) -> Validator {
    let substr = substr.into();
    let token = token.into();
    Validator::new(move |value| {
        let found = value.as_str().is_some_and(|s| s.contains(substr.as_str()));
        (!found).then(|| token.clone())
    })
}

/// Requires a checked (`true`) boolean value.
pub fn checked(token: impl Into<ErrorToken>) -> Validator {
    let token = token.into();
    Validator::new(move |value| (!matches!(value, Value::Bool(true))).then(|| token.clone()))
}
