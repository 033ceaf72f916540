//! Contact form validation rules

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::error::{FieldError, ValidationErrors};

/// Minimal structural check: `local@domain.tld`, no whitespace, a single `@`.
/// Not RFC 5322; addresses like `a@b.c` pass.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Field values read from the contact form at submit time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Checks a submission against every field rule
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate all fields, collecting every failure rather than stopping at
    /// the first
    pub fn validate(&self, submission: &ContactSubmission) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if submission.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }

        if submission.email.trim().is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !Self::is_valid_email(&submission.email) {
            errors.push(FieldError::EmailInvalid);
        }

        if submission.message.trim().is_empty() {
            errors.push(FieldError::MessageRequired);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(errors))
        }
    }

    /// Structural email check on the raw (untrimmed) value
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }
}
