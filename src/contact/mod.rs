//! Contact Form
//!
//! - **validator**: Field rules (required fields, email shape)
//! - **form**: Submit handling and user notices
//! - **error**: Error types

mod error;
mod form;
mod validator;

pub use error::{FieldError, ValidationErrors};
pub use form::ContactForm;
pub use validator::{ContactSubmission, FormValidator};
