//! Prelude module for convenient imports.
//!
//! ```ignore
//! use formwork::prelude::*;
//! ```

pub use crate::status::AsyncStatus;
pub use crate::validation::{
    ErrorToken, FieldValues, FormErrors, FormValidator, FormValidatorBuilder, PatternError,
    Validator, compose, rules, tokens,
};
pub use crate::value::Value;
