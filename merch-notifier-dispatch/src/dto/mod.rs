//!
//! Module with change-event payloads delivered by the document-store triggers
//!

pub mod input;
