//! Contact message transport
//!
//! The form never talks to a network directly; it hands its payload to a
//! [`Submitter`] and polls the outcome through a [`PendingSubmission`].

mod pending;
mod simulated;
mod traits;

pub use pending::PendingSubmission;
pub use simulated::{SimulatedSubmitter, DEFAULT_SUBMIT_DELAY};
pub use traits::{SubmissionError, SubmissionReceipt, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
