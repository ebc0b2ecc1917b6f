use super::error::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationsRepository: Send + Sync {
    ///
    /// Finds the participant ids of the conversation
    ///
    /// ### Returns
    /// [None] when the conversation does not exist
    ///
    async fn find_participants(&self, conversation_id: &str)
        -> Result<Option<Vec<String>>, Error>;
}
