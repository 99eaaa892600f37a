//! Simulated transport that stands in for a real backend

use super::traits::{SubmissionError, SubmissionReceipt, Submitter};
use crate::state::ContactMessage;
use async_trait::async_trait;
use std::time::Duration;

/// Simulated network latency
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Waits a fixed delay and accepts every message
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<SubmissionReceipt, SubmissionError> {
        tracing::debug!(?message, "Contact form submitted");

        // Integration point: replace the sleep with a call to a real transport.
        tokio::time::sleep(self.delay).await;

        Ok(SubmissionReceipt::new())
    }
}
