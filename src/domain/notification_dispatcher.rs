//! Durable notification write plus best-effort mail handoff.

use std::sync::Arc;

use crate::domain::ports::{MailJob, MailQueue, NotificationStore};
use crate::domain::service_support::map_notification_store_error;
use crate::domain::{Error, Notification, UserId};

/// Creates the durable notification record for a state change, then hands
/// the matching mail job to the queue.
///
/// The notification write is synchronous with the triggering transaction's
/// success and is never rolled back by later failures. The mail enqueue is
/// best-effort: the request path never blocks on mail transport, and
/// delivery retries belong to the queue runtime.
#[derive(Clone)]
pub struct NotificationDispatcher<N, Q> {
    notification_store: Arc<N>,
    mail_queue: Arc<Q>,
}

impl<N, Q> NotificationDispatcher<N, Q> {
    /// Create a dispatcher over the injected store and queue.
    pub fn new(notification_store: Arc<N>, mail_queue: Arc<Q>) -> Self {
        Self {
            notification_store,
            mail_queue,
        }
    }
}

impl<N, Q> NotificationDispatcher<N, Q>
where
    N: NotificationStore,
    Q: MailQueue,
{
    /// Durably record the notification, then enqueue the mail job.
    ///
    /// Returns the created record. An enqueue failure is logged and
    /// swallowed; it must never invalidate the durable write.
    pub async fn notify(
        &self,
        target_user_id: &UserId,
        content: &str,
        mail: MailJob,
    ) -> Result<Notification, Error> {
        let record = self
            .notification_store
            .create(content, target_user_id)
            .await
            .map_err(map_notification_store_error)?;

        if let Err(error) = self.mail_queue.enqueue(&mail).await {
            tracing::warn!(job = mail.key(), %error, "failed to enqueue mail job");
        }

        Ok(record)
    }
}
