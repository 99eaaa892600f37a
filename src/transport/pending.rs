//! In-flight submission handle polled from the UI loop

use super::traits::{SubmissionError, SubmissionReceipt, Submitter};
use crate::state::ContactMessage;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

type Outcome = Result<SubmissionReceipt, SubmissionError>;

/// A submission running on the tokio runtime.
///
/// The UI loop never awaits it; it calls [`PendingSubmission::poll`] once per
/// tick until an outcome is available.
#[derive(Debug)]
pub struct PendingSubmission {
    rx: oneshot::Receiver<Outcome>,
}

impl PendingSubmission {
    /// Spawn `submitter.submit(message)` on the current runtime
    pub fn spawn(submitter: Arc<dyn Submitter>, message: ContactMessage) -> Self {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = submitter.submit(message).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("Submission finished after its handle was dropped");
            }
        });
        Self { rx }
    }

    /// Take the outcome if the submission has finished
    pub fn poll(&mut self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(SubmissionError::Interrupted)),
        }
    }

    /// Wait for the outcome
    pub async fn wait(self) -> Outcome {
        self.rx
            .await
            .unwrap_or(Err(SubmissionError::Interrupted))
    }
}
