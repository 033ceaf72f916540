//! Contact form submit handling
//!
//! Submission is simulated: a valid form shows a thank-you notice and is
//! cleared, nothing is sent anywhere.

use super::validator::{ContactSubmission, FormValidator};
use crate::config::ContactCopy;
use crate::effect::Effect;

/// Turns a submit into either an error notice or a success notice + reset
#[derive(Debug, Clone)]
pub struct ContactForm {
    validator: FormValidator,
    copy: ContactCopy,
}

impl ContactForm {
    pub fn new(copy: ContactCopy) -> Self {
        Self {
            validator: FormValidator::new(),
            copy,
        }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn handle_submit(&self, submission: &ContactSubmission) -> Vec<Effect> {
        match self.validator.validate(submission) {
            Ok(()) => {
                tracing::info!("Contact form accepted");
                vec![
                    Effect::Alert {
                        text: self.copy.success.clone(),
                    },
                    Effect::ResetForm,
                ]
            }
            Err(errors) => {
                tracing::info!(count = errors.len(), "Contact form rejected: {}", errors);
                let mut lines = vec![self.copy.errors_header.clone()];
                lines.extend(errors.messages(&self.copy));
                vec![Effect::Alert {
                    text: lines.join("\n"),
                }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_alerts_then_resets() {
        let form = ContactForm::new(ContactCopy::default());
        let effects = form.handle_submit(&ContactSubmission::new("Anna", "anna@example.pl", "Hej"));

        assert_eq!(effects.len(), 2);
        assert!(matches!(&effects[0], Effect::Alert { text } if text.starts_with("Dziękujemy")));
        assert_eq!(effects[1], Effect::ResetForm);
    }

    #[test]
    fn test_failure_lists_every_message_once() {
        let form = ContactForm::new(ContactCopy::default());
        let effects = form.handle_submit(&ContactSubmission::new("", "zły", ""));

        assert_eq!(
            effects,
            vec![Effect::Alert {
                text: "Błędy w formularzu:\n\
                       Imię i nazwisko jest wymagane\n\
                       Podaj prawidłowy adres email\n\
                       Wiadomość jest wymagana"
                    .to_string()
            }]
        );
    }

    #[test]
    fn test_custom_copy() {
        let copy = ContactCopy {
            errors_header: "Please fix:".into(),
            message_required: "Say something".into(),
            ..ContactCopy::default()
        };
        let form = ContactForm::new(copy);
        let effects = form.handle_submit(&ContactSubmission::new("A", "a@b.co", " "));

        assert_eq!(
            effects,
            vec![Effect::Alert {
                text: "Please fix:\nSay something".into()
            }]
        );
    }
}
