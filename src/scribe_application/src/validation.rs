//! Per-operation input validation.
//!
//! Each operation gets one explicit function returning an ordered list of
//! field-level violations, independent of any rendering layer. Operations
//! whose public error set has no invalid-input kind (login, reset request)
//! parse their inputs directly instead, and confirm-reset parses its
//! password inside the use case so the token verdict always comes first.

use secrecy::{ExposeSecret, Secret};

use scribe_core::{Email, Password, Role};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn validate_registration(
    email: &Secret<String>,
    password: &Secret<String>,
    confirm_password: &Secret<String>,
    role: &str,
) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if let Err(e) = Email::try_from(email.clone()) {
        violations.push(FieldViolation::new("email", e.to_string()));
    }
    match Password::try_from(password.clone()) {
        Err(e) => violations.push(FieldViolation::new("password", e.to_string())),
        Ok(_) => {
            if password.expose_secret() != confirm_password.expose_secret() {
                violations.push(FieldViolation::new(
                    "confirm_password",
                    "Passwords do not match",
                ));
            }
        }
    }
    if let Err(e) = Role::try_from(role.to_string()) {
        violations.push(FieldViolation::new("role", e.to_string()));
    }

    violations
}

pub fn validate_email_update(new_email: &Secret<String>) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if let Err(e) = Email::try_from(new_email.clone()) {
        violations.push(FieldViolation::new("email", e.to_string()));
    }
    violations
}
