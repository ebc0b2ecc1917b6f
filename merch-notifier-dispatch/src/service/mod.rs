pub mod dispatch_service;
pub mod events_service;
