use super::{entity::ConversationFindEntity, ConversationsRepository, Error};
use axum::async_trait;
use bson::doc;
use mongodb::Database;

const CONVERSATIONS: &str = "conversations";

pub struct ConversationsRepositoryImpl {
    database: Database,
}

impl ConversationsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ConversationsRepository for ConversationsRepositoryImpl {
    async fn find_participants(
        &self,
        conversation_id: &str,
    ) -> Result<Option<Vec<String>>, Error> {
        let conversation = self
            .database
            .collection::<ConversationFindEntity>(CONVERSATIONS)
            .find_one(doc! { "_id": conversation_id })
            .await?;

        Ok(conversation.map(|conversation| conversation.participants))
    }
}
