use super::DeliveryOutcome;
use crate::{payload::NotificationPayload, repository::NewNotificationRecord};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DispatchService: Send + Sync {
    ///
    /// Attempts one push delivery to the user.
    ///
    /// Never fails: every problem terminates here as
    /// [DeliveryOutcome::InvalidTarget] or [DeliveryOutcome::TransientFailure]
    /// and is reported only through logs. A token the gateway reports as
    /// permanently unusable gets its registration deleted (best-effort).
    ///
    async fn dispatch<'a>(
        &self,
        user_id: &str,
        token: Option<&'a str>,
        payload: &NotificationPayload,
    ) -> DeliveryOutcome;

    ///
    /// Calls [DispatchService::dispatch], then persists the record
    /// if and only if the outcome is [DeliveryOutcome::Delivered].
    ///
    async fn notify_and_record<'a>(
        &self,
        user_id: &str,
        token: Option<&'a str>,
        payload: &NotificationPayload,
        record: NewNotificationRecord,
    ) -> DeliveryOutcome;
}
