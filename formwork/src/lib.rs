//! Composable form validation and async status tracking for component
//! front ends.
//!
//! Field validators are plain function values; [`compose`] chains them
//! with left-to-right short-circuiting, and [`FormValidator`] adapts a
//! static field-to-validator mapping into a whole-form validate callback
//! producing a sparse errors map. [`AsyncStatus`] replaces boolean flag
//! pairs for tracking asynchronous operation state in UI conditionals.

pub mod prelude;
pub mod status;
pub mod validation;
pub mod value;

pub use status::AsyncStatus;
pub use validation::{
    ErrorToken, FieldValues, FormErrors, FormValidator, Validator, compose,
};
pub use value::Value;
