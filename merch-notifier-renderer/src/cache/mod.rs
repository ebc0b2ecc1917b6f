mod cache_cleanup;
mod cache_store;

pub use cache_cleanup::*;
pub use cache_store::*;
