mod fcm_message;

pub use fcm_message::*;
