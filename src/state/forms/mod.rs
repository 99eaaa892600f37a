//! Form domain layer
//!
//! Type-safe handling of the contact form: fields and their rules, the
//! validator that owns error slots and the submission lifecycle, and the
//! transient banner that reports outcomes.

mod contact_form;
mod field;
mod message;
mod rules;
mod validator;

pub use contact_form::{ContactForm, ContactMessage, MESSAGE_INPUT_ROWS};
pub use field::Field;
pub use message::{BannerPhase, Severity};
pub use validator::FormValidator;

#[cfg(test)]
pub use contact_form::Form;
#[cfg(test)]
pub use validator::FormSubmissionState;
