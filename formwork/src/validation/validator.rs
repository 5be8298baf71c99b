//! Field validator values and composition.

use std::sync::Arc;

use super::token::ErrorToken;
use crate::value::Value;

/// Shared check closure inside a [`Validator`].
type Check = Arc<dyn Fn(&Value) -> Option<ErrorToken> + Send + Sync>;

/// A pure field validator: maps a single value to an absent-or-token
/// result.
///
/// Validators are stateless and have no identity beyond behavior; they
/// are cheap to clone and freely shared between fields and forms.
#[derive(Clone)]
pub struct Validator {
    check: Check,
}

impl Validator {
    /// Wraps a check closure as a validator.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value) -> Option<ErrorToken> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Runs the validator against a value.
    ///
    /// An empty token returned by the closure is normalized to `None`
    /// here, the one place raw results are observed, so a
    /// falsy-but-present indicator is indistinguishable from a pass
    /// everywhere downstream.
    pub fn check(&self, value: &Value) -> Option<ErrorToken> {
        (self.check)(value).filter(|token| !token.is_empty())
    }

    /// Chains another validator after this one, short-circuiting on the
    /// first failure.
    pub fn and(self, next: Validator) -> Validator {
        Validator::new(move |value| self.check(value).or_else(|| next.check(value)))
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Validator")
    }
}

/// Composes validators into one, running them in the order given and
/// stopping at the first failure.
///
/// This is a strict left-to-right short-circuit, not a collector of all
/// errors: on an absent value, `compose([required(), min_length(2, t)])`
/// reports the required token, never the length token. Callers that
/// need every error for a field must compose differently. An empty
/// sequence composes to a validator that always passes.
///
/// ```
/// use formwork::Value;
/// use formwork::validation::{compose, rules};
///
/// let username = compose([
///     rules::required(),
///     rules::min_length(3, "validate.username_short"),
/// ]);
///
/// assert_eq!(
///     username.check(&Value::Null).unwrap().as_str(),
///     "validate.required",
/// );
/// assert_eq!(
///     username.check(&Value::from("ab")).unwrap().as_str(),
///     "validate.username_short",
/// );
/// assert_eq!(username.check(&Value::from("abc")), None);
/// ```
pub fn compose<I>(validators: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    let validators: Vec<Validator> = validators.into_iter().collect();
    Validator::new(move |value| validators.iter().find_map(|v| v.check(value)))
}
