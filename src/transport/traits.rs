//! Trait abstraction for message submission to enable mocking in tests

use crate::state::ContactMessage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgement returned by a transport that accepted a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub accepted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            accepted_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Reasons a submission did not go through
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The transport refused the message
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The submitting task ended without reporting an outcome
    #[error("submission was interrupted before completing")]
    Interrupted,
}

/// Capability to deliver a contact message
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver one message
    async fn submit(&self, message: ContactMessage) -> Result<SubmissionReceipt, SubmissionError>;
}
