use serde::Deserialize;

///
/// Trigger delivery for a message document created under a conversation.
/// Ids are path-derived, the message is the created snapshot.
///
#[derive(Debug, Deserialize)]
pub struct MessageCreatedEvent {
    pub conversation_id: String,
    pub message_id: String,
    pub message: MessageDocument,
}

#[derive(Debug, Deserialize)]
pub struct MessageDocument {
    pub sender_id: String,
    pub content: String,
}
