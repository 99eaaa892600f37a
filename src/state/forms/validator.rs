//! Form validation and the submission lifecycle

use super::contact_form::{ContactForm, ContactMessage};
use super::field::Field;
use super::message::{MessageBanner, Severity};
use super::rules::{check_field, ValidationResult};
use crate::transport::{SubmissionError, SubmissionReceipt};
use std::collections::BTreeMap;
use std::time::Instant;

pub const CORRECT_ERRORS_MESSAGE: &str = "Please correct the errors below.";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

/// Lifecycle of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormSubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

/// An error currently displayed next to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

/// Owns per-field error slots, the form banner and the submission state
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    errors: BTreeMap<String, FieldError>,
    state: FormSubmissionState,
    banner: MessageBanner,
}

impl FormValidator {
    pub fn new(banner: MessageBanner) -> Self {
        Self {
            errors: BTreeMap::new(),
            state: FormSubmissionState::Idle,
            banner,
        }
    }

    pub fn state(&self) -> FormSubmissionState {
        self.state
    }

    /// The submit control is disabled for the whole time a send is in flight
    pub fn is_submit_enabled(&self) -> bool {
        self.state != FormSubmissionState::Sending
    }

    pub fn field_error(&self, field_name: &str) -> Option<&FieldError> {
        self.errors.get(field_name)
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    pub fn banner(&self) -> &MessageBanner {
        &self.banner
    }

    /// Validate one field and update its error slot
    pub fn validate_field(&mut self, field: &Field) -> ValidationResult {
        self.clear_field_error(&field.name);
        let result = check_field(field);
        if let Some(message) = &result.message {
            self.show_field_error(&field.name, message);
        }
        result
    }

    /// Validate every required field; each one gets its error shown or cleared
    pub fn validate_form(&mut self, form: &ContactForm) -> bool {
        let mut is_valid = true;
        for field in form.required_fields() {
            if !self.validate_field(field).valid {
                is_valid = false;
            }
        }
        is_valid
    }

    /// True when no required field has an error displayed
    pub fn is_submittable(&self, form: &ContactForm) -> bool {
        form.required_fields()
            .all(|f| !self.errors.contains_key(&f.name))
    }

    pub fn show_field_error(&mut self, field_name: &str, message: &str) {
        self.errors.insert(
            field_name.to_string(),
            FieldError {
                field_name: field_name.to_string(),
                message: message.to_string(),
            },
        );
    }

    pub fn clear_field_error(&mut self, field_name: &str) {
        self.errors.remove(field_name);
    }

    pub fn clear_all_field_errors(&mut self) {
        self.errors.clear();
    }

    /// Replace the visible banner
    pub fn show_message(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.banner.show(text, severity, now);
    }

    /// Advance banner expiry
    pub fn tick(&mut self, now: Instant) {
        self.banner.tick(now);
    }

    /// Start a submission.
    ///
    /// Returns the payload to send when the form is valid; the caller hands it to
    /// the submitter and reports back through [`FormValidator::complete_submission`].
    /// Returns `None` when the form is invalid or a send is already in flight.
    pub fn submit(&mut self, form: &ContactForm, now: Instant) -> Option<ContactMessage> {
        if self.state != FormSubmissionState::Idle {
            tracing::debug!(state = ?self.state, "Ignoring submit while a submission is active");
            return None;
        }

        self.state = FormSubmissionState::Validating;
        if !self.validate_form(form) {
            tracing::debug!(errors = self.errors.len(), "Contact form rejected by validation");
            self.show_message(CORRECT_ERRORS_MESSAGE, Severity::Error, now);
            self.state = FormSubmissionState::Idle;
            return None;
        }

        self.state = FormSubmissionState::Sending;
        tracing::info!("Contact form accepted, sending");
        Some(form.to_message())
    }

    /// Apply the outcome of the send started by [`FormValidator::submit`]
    pub fn complete_submission(
        &mut self,
        form: &mut ContactForm,
        outcome: Result<SubmissionReceipt, SubmissionError>,
        now: Instant,
    ) {
        if self.state != FormSubmissionState::Sending {
            tracing::warn!(state = ?self.state, "Submission outcome arrived with no send in flight");
            return;
        }

        match outcome {
            Ok(receipt) => {
                self.state = FormSubmissionState::Succeeded;
                tracing::info!(id = %receipt.id, accepted_at = %receipt.accepted_at, "Contact message sent");
                form.reset();
                self.clear_all_field_errors();
                self.show_message(SUCCESS_MESSAGE, Severity::Success, now);
            }
            Err(err) => {
                self.state = FormSubmissionState::Failed;
                tracing::warn!(error = %err, "Contact message failed to send");
                self.show_message(FAILURE_MESSAGE, Severity::Error, now);
            }
        }

        self.state = FormSubmissionState::Idle;
    }
}
