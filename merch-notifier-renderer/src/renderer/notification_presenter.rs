use crate::{dto::DisplayNotification, PresentError};
use async_trait::async_trait;

///
/// Platform surface that shows a notification to the user.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationPresenter: Send + Sync {
    async fn present(&self, notification: DisplayNotification) -> Result<(), PresentError>;
}
