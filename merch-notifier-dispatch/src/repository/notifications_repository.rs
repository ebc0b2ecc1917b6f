use super::{dto::NewNotificationRecord, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Appends one in-app notification record.
    /// `created_at` is assigned at insert, `is_read` starts false.
    ///
    async fn insert(&self, record: NewNotificationRecord) -> Result<(), Error>;
}
