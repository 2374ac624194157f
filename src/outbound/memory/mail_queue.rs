//! In-memory mail queue.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{MailJob, MailQueue, MailQueueError};

/// Mail queue that records enqueued jobs in order.
#[derive(Debug, Default)]
pub struct InMemoryMailQueue {
    jobs: Mutex<Vec<MailJob>>,
}

impl InMemoryMailQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every job enqueued so far, in enqueue order.
    pub fn jobs(&self) -> Result<Vec<MailJob>, MailQueueError> {
        let jobs = self
            .jobs
            .lock()
            .map_err(|_| MailQueueError::unavailable("mail queue mutex poisoned"))?;
        Ok(jobs.clone())
    }
}

#[async_trait]
impl MailQueue for InMemoryMailQueue {
    async fn enqueue(&self, job: &MailJob) -> Result<(), MailQueueError> {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|_| MailQueueError::unavailable("mail queue mutex poisoned"))?;
        jobs.push(job.clone());
        Ok(())
    }
}
