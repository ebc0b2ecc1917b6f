use super::NotificationPresenter;
use crate::{
    dto::{DisplayNotification, RawPushPayload, DEFAULT_TAG},
    RenderError,
};
use serde_json::Value;
use std::sync::Arc;

///
/// Renders push messages received while no foreground client is around.
///
/// Rendering never fails outward: when the payload is unusable the
/// fallback notification is shown instead, so the delivery is still
/// visible to the user.
///
pub struct BackgroundRenderer {
    presenter: Arc<dyn NotificationPresenter>,
}

impl BackgroundRenderer {
    pub fn new(presenter: Arc<dyn NotificationPresenter>) -> Self {
        Self { presenter }
    }

    pub async fn handle_push(&self, payload: Value) {
        if let Err(err) = self.try_render(payload).await {
            tracing::warn!(%err, "failed to render push payload, showing fallback");

            if let Err(err) = self.presenter.present(DisplayNotification::fallback()).await {
                tracing::error!(%err, "failed to present fallback notification");
            }
        }
    }

    async fn try_render(&self, payload: Value) -> Result<(), RenderError> {
        let payload = serde_json::from_value::<RawPushPayload>(payload)?;

        let notification = payload
            .notification
            .ok_or(RenderError::MissingField("notification"))?;
        let title = notification.title.ok_or(RenderError::MissingField("title"))?;
        let body = notification.body.ok_or(RenderError::MissingField("body"))?;
        let tag = payload
            .data
            .get("tag")
            .cloned()
            .unwrap_or_else(|| DEFAULT_TAG.to_string());

        let mut display = DisplayNotification::new(title, body, tag);
        display.image = notification.image;
        display.data = payload.data;

        self.presenter.present(display).await?;

        Ok(())
    }
}
