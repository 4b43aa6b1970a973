//! Input validation rules for registration and password changes.
//!
//! The predicates are the source of truth; the `validator` rules on
//! [`Registration`] and [`PasswordChange`] delegate to them.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use super::user::normalize_email;
use crate::config::{EMAIL_PATTERN, MIN_PASSWORD_LENGTH, MSG_INVALID_EMAIL, MSG_PASSWORD_TOO_SHORT};
use crate::errors::{AppError, AppResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// True if `email` starts with something shaped like `local@domain.tld`.
///
/// Only the start is anchored: `"a@b.c<anything>"` passes.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True if `password` has at least [`MIN_PASSWORD_LENGTH`] characters.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(rule_violation("email", MSG_INVALID_EMAIL))
    }
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if is_valid_password(password) {
        Ok(())
    } else {
        Err(rule_violation("password", MSG_PASSWORD_TOO_SHORT))
    }
}

fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Registration input, email already normalized
#[derive(Debug, Clone, Validate)]
pub struct Registration {
    #[validate(custom(function = "check_email"))]
    pub email: String,
    #[validate(custom(function = "check_password"))]
    pub password: String,
}

impl Registration {
    const FIELD_ORDER: &'static [&'static str] = &["email", "password"];

    /// Normalize the email and check both fields, email first.
    pub fn parse(email: &str, password: impl Into<String>) -> AppResult<Self> {
        let registration = Self {
            email: normalize_email(email),
            password: password.into(),
        };

        registration
            .validate()
            .map_err(|e| AppError::validation(first_violation(&e, Self::FIELD_ORDER)))?;

        Ok(registration)
    }
}

/// Password change input
#[derive(Debug, Clone, Validate)]
pub struct PasswordChange {
    #[validate(custom(function = "check_password"))]
    pub password: String,
}

impl PasswordChange {
    pub fn parse(password: impl Into<String>) -> AppResult<Self> {
        let change = Self {
            password: password.into(),
        };

        change
            .validate()
            .map_err(|e| AppError::validation(first_violation(&e, &["password"])))?;

        Ok(change)
    }
}

/// Message of the first failing field, in `order`.
fn first_violation(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();

    order
        .iter()
        .find_map(|field| fields.get(*field))
        .and_then(|errs| errs.first())
        .and_then(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| errors.to_string())
}
