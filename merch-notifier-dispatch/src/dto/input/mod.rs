mod message_created_event;
mod order_created_event;
mod order_updated_event;

pub use message_created_event::*;
pub use order_created_event::*;
pub use order_updated_event::*;
