use super::error::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Finds the display name of the user
    ///
    /// ### Returns
    /// [None] when the user does not exist or has no display name set
    ///
    async fn find_display_name(&self, user_id: &str) -> Result<Option<String>, Error>;

    ///
    /// Finds the push registration token of the user
    ///
    /// ### Returns
    /// [None] when the user has no registered device token
    ///
    async fn find_device_token(&self, user_id: &str) -> Result<Option<String>, Error>;

    ///
    /// Deletes the push registration of the user.
    /// Deleting an absent registration is not an error.
    ///
    async fn delete_device_token(&self, user_id: &str) -> Result<(), Error>;
}
