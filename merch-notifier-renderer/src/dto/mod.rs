mod display_notification;
mod push_payload;

pub use display_notification::*;
pub use push_payload::*;
