mod dto;
mod fcm_push_gateway;
mod push_gateway;

pub use fcm_push_gateway::*;
pub use push_gateway::*;
