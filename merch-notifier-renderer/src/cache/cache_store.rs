use crate::CacheError;
use async_trait::async_trait;

///
/// Client-side cache storage holding named caches of keyed entries.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn cache_names(&self) -> Result<Vec<String>, CacheError>;

    async fn entry_keys(&self, cache: &str) -> Result<Vec<String>, CacheError>;

    async fn delete_entry(&self, cache: &str, key: &str) -> Result<(), CacheError>;
}
