//! Contact form validation errors

use thiserror::Error;

use crate::config::ContactCopy;

/// A single failed field rule
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    /// Email is present but not shaped like `local@domain.tld`
    #[error("Email address is invalid")]
    EmailInvalid,

    #[error("Message is required")]
    MessageRequired,
}

impl FieldError {
    /// Name of the form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "name",
            FieldError::EmailRequired | FieldError::EmailInvalid => "email",
            FieldError::MessageRequired => "message",
        }
    }

    /// User-facing text for this error
    pub fn localized<'a>(&self, copy: &'a ContactCopy) -> &'a str {
        match self {
            FieldError::NameRequired => &copy.name_required,
            FieldError::EmailRequired => &copy.email_required,
            FieldError::EmailInvalid => &copy.email_invalid,
            FieldError::MessageRequired => &copy.message_required,
        }
    }
}

/// Every rule a submission failed, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: FieldError) -> bool {
        self.0.contains(&error)
    }

    /// Localized messages, one per failed rule
    pub fn messages(&self, copy: &ContactCopy) -> Vec<String> {
        self.0
            .iter()
            .map(|e| e.localized(copy).to_string())
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "Invalid contact form: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
