use super::{DeliveryOutcome, DispatchService};
use crate::{
    gateway::{PushGateway, SendError},
    payload::NotificationPayload,
    repository::{NewNotificationRecord, NotificationsRepository, UsersRepository},
};
use axum::async_trait;
use std::sync::Arc;

pub struct DispatchServiceImpl {
    push_gateway: Arc<dyn PushGateway>,
    users_repository: Arc<dyn UsersRepository>,
    notifications_repository: Arc<dyn NotificationsRepository>,
}

impl DispatchServiceImpl {
    pub fn new(
        push_gateway: Arc<dyn PushGateway>,
        users_repository: Arc<dyn UsersRepository>,
        notifications_repository: Arc<dyn NotificationsRepository>,
    ) -> Self {
        Self {
            push_gateway,
            users_repository,
            notifications_repository,
        }
    }

    async fn delete_registration(&self, user_id: &str) {
        tracing::info!(user_id, "deleting stale device token registration");

        match self.users_repository.delete_device_token(user_id).await {
            Ok(()) => tracing::info!(user_id, "deleted device token registration"),
            Err(err) => {
                // Best-effort: a live but undeliverable registration
                // only costs one failed send on the next event
                tracing::warn!(%err, user_id, "failed to delete device token registration");
            }
        }
    }
}

#[async_trait]
impl DispatchService for DispatchServiceImpl {
    async fn dispatch<'a>(
        &self,
        user_id: &str,
        token: Option<&'a str>,
        payload: &NotificationPayload,
    ) -> DeliveryOutcome {
        let Some(token) = token.map(str::trim).filter(|token| !token.is_empty()) else {
            tracing::warn!(user_id, "missing or empty device token, skipping send");
            return DeliveryOutcome::TransientFailure;
        };

        match self.push_gateway.send(token, payload).await {
            Ok(message_id) => {
                tracing::info!(user_id, %message_id, "notification sent");
                DeliveryOutcome::Delivered
            }
            Err(err @ SendError::InvalidToken { .. }) => {
                tracing::warn!(%err, user_id, "device token no longer valid");
                self.delete_registration(user_id).await;
                DeliveryOutcome::InvalidTarget
            }
            Err(err) => {
                tracing::warn!(%err, user_id, "failed to send notification");
                DeliveryOutcome::TransientFailure
            }
        }
    }

    async fn notify_and_record<'a>(
        &self,
        user_id: &str,
        token: Option<&'a str>,
        payload: &NotificationPayload,
        record: NewNotificationRecord,
    ) -> DeliveryOutcome {
        let outcome = self.dispatch(user_id, token, payload).await;

        if outcome == DeliveryOutcome::Delivered {
            if let Err(err) = self.notifications_repository.insert(record).await {
                tracing::warn!(%err, user_id, "failed to save notification record");
            }
        }

        outcome
    }
}
