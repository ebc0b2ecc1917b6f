use serde::Deserialize;

/// Conversation documents are not owned by this subsystem;
/// missing fields deserialize to their defaults instead of failing
#[derive(Debug, Deserialize)]
pub struct ConversationFindEntity {
    #[serde(default)]
    pub participants: Vec<String>,
}
