//! Port describing queue dispatch semantics for mail jobs.
//!
//! The engine enqueues a payload and returns immediately; delivery, retry,
//! and backoff belong to the out-of-process queue consumer, which assumes
//! at-least-once delivery. Handlers must tolerate duplicate sends.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Appointment, UserId};

/// Immutable appointment snapshot carried inside mail payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSnapshot {
    pub id: Uuid,
    pub user_id: UserId,
    pub provider_id: UserId,
    pub date: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
}

impl From<&Appointment> for AppointmentSnapshot {
    fn from(value: &Appointment) -> Self {
        Self {
            id: value.id(),
            user_id: *value.user_id(),
            provider_id: *value.provider_id(),
            date: value.date(),
            canceled_at: value.canceled_at(),
        }
    }
}

/// Mail job payloads enqueued after a committed state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MailJob {
    /// Tell the provider about a fresh booking.
    BookingCreated {
        appointment: AppointmentSnapshot,
        provider_name: String,
        provider_email: String,
        client_name: String,
    },
    /// Tell the provider their appointment was canceled.
    AppointmentCanceled {
        appointment: AppointmentSnapshot,
        provider_name: String,
        provider_email: String,
    },
}

impl MailJob {
    /// Stable job-type identifier used by the queue consumer.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BookingCreated { .. } => "booking-created",
            Self::AppointmentCanceled { .. } => "appointment-canceled",
        }
    }
}

/// Errors surfaced by the queue adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailQueueError {
    /// Queue infrastructure is unavailable.
    #[error("mail queue is unavailable: {message}")]
    Unavailable { message: String },
    /// The job could not be acknowledged or persisted.
    #[error("mail job was rejected: {message}")]
    Rejected { message: String },
}

impl MailQueueError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Port for handing mail jobs to the out-of-process queue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailQueue: Send + Sync {
    /// Enqueue a job for downstream delivery.
    async fn enqueue(&self, job: &MailJob) -> Result<(), MailQueueError>;
}

/// Fixture queue that discards all jobs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMailQueue;

#[async_trait]
impl MailQueue for FixtureMailQueue {
    async fn enqueue(&self, job: &MailJob) -> Result<(), MailQueueError> {
        tracing::warn!(job = job.key(), "FixtureMailQueue: job discarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;
    use crate::domain::AppointmentDraft;

    fn snapshot() -> AppointmentSnapshot {
        let date = Utc
            .with_ymd_and_hms(2025, 3, 10, 14, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        let appointment = Appointment::book(AppointmentDraft {
            id: Uuid::new_v4(),
            user_id: UserId::random(),
            provider_id: UserId::random(),
            date,
            created_at: date,
        })
        .expect("valid draft");
        AppointmentSnapshot::from(&appointment)
    }

    #[rstest]
    fn job_keys_are_stable() {
        let created = MailJob::BookingCreated {
            appointment: snapshot(),
            provider_name: "Diego".to_owned(),
            provider_email: "diego@example.com".to_owned(),
            client_name: "Cecilia".to_owned(),
        };
        let canceled = MailJob::AppointmentCanceled {
            appointment: snapshot(),
            provider_name: "Diego".to_owned(),
            provider_email: "diego@example.com".to_owned(),
        };
        assert_eq!(created.key(), "booking-created");
        assert_eq!(canceled.key(), "appointment-canceled");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_queue_accepts_jobs() {
        let queue = FixtureMailQueue;
        let job = MailJob::AppointmentCanceled {
            appointment: snapshot(),
            provider_name: "Diego".to_owned(),
            provider_email: "diego@example.com".to_owned(),
        };
        queue.enqueue(&job).await.expect("fixture enqueue succeeds");
    }
}
