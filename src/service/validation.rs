//! Field validation for incoming student bodies.

use crate::error::{AppError, FieldErrors};
use crate::model::StudentDto;
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_REQUIRED: &str = "The name is mandatory";
pub const AGE_NOT_POSITIVE: &str = "The age cannot be zero or negative";
pub const EMAIL_REQUIRED: &str = "The email cannot be null.";
pub const EMAIL_INVALID: &str = "The email must be valid";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // local@domain, where domain labels are non-empty and dot-separated.
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*$").expect("email pattern is valid")
    })
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check every field and collect all violations, keyed by JSON field name.
    pub fn check(body: &StudentDto) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if body.full_name.trim().is_empty() {
            errors.insert("fullName".into(), NAME_REQUIRED.into());
        }
        if body.age <= 0 {
            errors.insert("age".into(), AGE_NOT_POSITIVE.into());
        }
        if body.email.trim().is_empty() {
            errors.insert("email".into(), EMAIL_REQUIRED.into());
        } else if !email_regex().is_match(&body.email) {
            errors.insert("email".into(), EMAIL_INVALID.into());
        }
        errors
    }

    pub fn validate(body: &StudentDto) -> Result<(), AppError> {
        let errors = Self::check(body);
        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "validation failed");
            Err(AppError::Validation(errors))
        }
    }
}
