mod conversation_find_entity;
mod device_token_find_entity;
mod notification_record_insert_entity;
mod user_find_entity;

pub use conversation_find_entity::*;
pub use device_token_find_entity::*;
pub use notification_record_insert_entity::*;
pub use user_find_entity::*;
