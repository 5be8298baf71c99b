//! Form validation for component front ends.
//!
//! Field validators are pure function values from a single field's
//! current [`Value`](crate::Value) to an optional [`ErrorToken`].
//! [`compose`] chains several validators for one field with
//! left-to-right short-circuiting, and [`FormValidator`] turns a static
//! field-to-validator mapping into a whole-form validate callback that
//! produces a sparse [`FormErrors`] map.
//!
//! # Example
//!
//! ```
//! use formwork::validation::{FieldValues, FormValidator, compose, rules};
//!
//! let form = FormValidator::builder()
//!     .field("email", compose([rules::required(), rules::email()]))
//!     .field("name", rules::required())
//!     .build();
//!
//! let errors = form.validate(&FieldValues::new().with("name", "Joe"));
//! assert_eq!(errors.get("email").unwrap().as_str(), "validate.required");
//! assert_eq!(errors.get("name"), None);
//! ```

mod form;
mod token;
mod validator;

pub mod rules;

pub use form::{FieldValues, FormErrors, FormValidator, FormValidatorBuilder};
pub use rules::PatternError;
pub use token::{ErrorToken, tokens};
pub use validator::{Validator, compose};
