pub mod cache;
pub mod dto;
pub mod renderer;

mod error;

pub use error::*;
