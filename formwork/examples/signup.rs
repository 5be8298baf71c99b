//! Signup Form Example
//!
//! Builds a signup-form validator from the builtin rules and runs it
//! against two value sets. Validation passes are logged to signup.log;
//! error tokens are printed as-is (a real host would resolve them
//! through a localization lookup before display).

use std::fs::File;

use formwork::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn main() {
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);
    }

    let form = FormValidator::builder()
        .field(
            "username",
            compose([
                rules::required(),
                rules::length(3..=20, "validate.username_length"),
            ]),
        )
        .field("email", compose([rules::required(), rules::email()]))
        .field("password", rules::min_length(8, "validate.password_short"))
        .field("terms", rules::checked("validate.terms"))
        .build();

    let first_try = FieldValues::new()
        .with("username", "jo")
        .with("password", "hunter2");
    report("first try", &form.validate(&first_try));

    let second_try = FieldValues::new()
        .with("username", "joe")
        .with("email", "joe@example.com")
        .with("password", "correct horse battery staple")
        .with("terms", true);
    report("second try", &form.validate(&second_try));
}

fn report(label: &str, errors: &FormErrors) {
    if errors.is_valid() {
        println!("{label}: all fields valid");
    } else {
        println!("{label}: {} invalid field(s)", errors.len());
        for (field, token) in errors.iter() {
            println!("  {field}: {token}");
        }
    }
}
