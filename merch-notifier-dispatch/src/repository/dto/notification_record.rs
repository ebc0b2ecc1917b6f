use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum NotificationType {
    #[strum(serialize = "message")]
    Message,
    #[strum(serialize = "orderUpdate")]
    OrderUpdate,
}

///
/// Durable in-app notification entry, written once per confirmed delivery.
/// `is_read` and `created_at` are assigned at insert; the record is never
/// updated by this subsystem afterwards.
///
#[derive(Debug, Clone)]
pub struct NewNotificationRecord {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    /// Conversation id or order id, depending on the type
    pub context_id: String,
}
