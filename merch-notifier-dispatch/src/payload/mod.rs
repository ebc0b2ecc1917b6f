//!
//! Pure mapping from domain events to push notification payloads
//!

mod notification_payload;
mod order_status;
mod payload_builder;

pub use notification_payload::*;
pub use order_status::*;
pub use payload_builder::*;
