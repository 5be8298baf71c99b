//! Whole-form validation: values map, errors map, and the form
//! validator factory.

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::token::ErrorToken;
use super::validator::Validator;
use crate::value::Value;

const NULL: Value = Value::Null;

/// Current field values for one validation pass.
///
/// Supplied fresh on every call and never retained by the mechanism. A
/// missing key is treated identically to an explicit [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(HashMap<String, Value>);

impl FieldValues {
    /// Creates an empty values map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field's value, returning the map for chaining.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field's value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Looks up a field's value; [`Value::Null`] when the key is
    /// missing.
    pub fn get(&self, field: &str) -> &Value {
        self.0.get(field).unwrap_or(&NULL)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, Value>> for FieldValues {
    fn from(values: HashMap<String, Value>) -> Self {
        Self(values)
    }
}

/// Sparse validation result containing only failing fields.
///
/// Empty means the whole form is valid. A fresh value is produced on
/// every validation pass; prior results are never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, ErrorToken>);

impl FormErrors {
    /// Returns `true` if every field passed.
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if any field failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The failing token for a field, if that field failed.
    pub fn get(&self, field: &str) -> Option<&ErrorToken> {
        self.0.get(field)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no fields failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over failing fields and their tokens.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorToken)> {
        self.0.iter().map(|(field, token)| (field.as_str(), token))
    }
}

/// Adapts a static field-to-validator mapping into a whole-form
/// validate callback.
///
/// Built once per form via [`FormValidator::builder`]; the mapping is
/// immutable for the form's lifetime. Each call to [`validate`] runs
/// every registered validator independently over a fresh
/// [`FieldValues`] and assembles a fresh [`FormErrors`]. No state is
/// retained across calls, so equal inputs always yield equal outputs.
///
/// [`validate`]: FormValidator::validate
#[derive(Debug, Clone)]
pub struct FormValidator {
    fields: HashMap<String, Validator>,
}

impl FormValidator {
    /// Starts building a form validator.
    pub fn builder() -> FormValidatorBuilder {
        FormValidatorBuilder::default()
    }

    /// Runs one validation pass.
    ///
    /// Every registered field is checked independently and
    /// unconditionally, so iteration order never affects the result.
    /// Fields not registered are never checked and never appear in the
    /// output, even if present in `values`.
    pub fn validate(&self, values: &FieldValues) -> FormErrors {
        let mut errors = FormErrors::default();
        for (field, validator) in &self.fields {
            let value = values.get(field);
            if let Some(token) = validator.check(value) {
                trace!(
                    "field '{}' ({}) failed validation with token '{}'",
                    field,
                    value.type_name(),
                    token
                );
                errors.0.insert(field.clone(), token);
            }
        }
        debug!(
            "form validation: {} of {} fields failing",
            errors.len(),
            self.fields.len()
        );
        errors
    }

    /// Converts into the callback shape host form libraries expect.
    pub fn into_callback(self) -> impl Fn(&FieldValues) -> FormErrors + Send + Sync {
        move |values| self.validate(values)
    }
}

/// Builder binding field names to validators.
#[derive(Debug, Default)]
pub struct FormValidatorBuilder {
    fields: HashMap<String, Validator>,
}

impl FormValidatorBuilder {
    /// Binds `validator` to `field`. Rebinding a name replaces the
    /// earlier validator.
    pub fn field(mut self, field: impl Into<String>, validator: Validator) -> Self {
        self.fields.insert(field.into(), validator);
        self
    }

    /// Finalizes the form validator.
    pub fn build(self) -> FormValidator {
        FormValidator {
            fields: self.fields,
        }
    }
}
