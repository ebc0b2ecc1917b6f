use bson::DateTime;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationRecordInsertEntity {
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub context_id: String,
    pub is_read: bool,
    pub created_at: DateTime,
}
