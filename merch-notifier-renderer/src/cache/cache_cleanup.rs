use super::CacheStore;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::Notify,
    time::{interval, MissedTickBehavior},
};

pub struct CacheCleanupConfig {
    pub interval: Duration,
}

///
/// Periodically empties every client-side cache so stale responses do
/// not outlive the session. Cleanup is best effort; entries that fail
/// to delete are left for the next pass.
///
pub struct CacheCleanup {
    config: CacheCleanupConfig,
    cache_store: Arc<dyn CacheStore>,
}

impl CacheCleanup {
    pub fn new(config: CacheCleanupConfig, cache_store: Arc<dyn CacheStore>) -> Self {
        Self {
            config,
            cache_store,
        }
    }

    pub async fn run(&self, close_notify: Arc<Notify>) {
        let mut interval = interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tokio::select! {
            biased;

            _ = close_notify.notified() => {}
            _ = async {
                loop {
                    interval.tick().await;
                    clean(self.cache_store.as_ref()).await;
                }
            } => {}
        }

        tracing::info!("cache cleanup stopped");
    }
}

pub async fn clean(cache_store: &dyn CacheStore) {
    let caches = match cache_store.cache_names().await {
        Ok(caches) => caches,
        Err(err) => {
            tracing::warn!(%err, "failed to enumerate caches");
            return;
        }
    };

    let mut removed_entries = 0usize;
    for cache in caches {
        let keys = match cache_store.entry_keys(&cache).await {
            Ok(keys) => keys,
            Err(err) => {
                tracing::warn!(%err, %cache, "failed to enumerate cache entries");
                continue;
            }
        };

        for key in keys {
            match cache_store.delete_entry(&cache, &key).await {
                Ok(()) => removed_entries += 1,
                Err(err) => tracing::warn!(%err, %cache, %key, "failed to delete cache entry"),
            }
        }
    }

    tracing::debug!(removed_entries, "cache cleanup pass finished");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{cache::MockCacheStore, CacheError};

    #[tokio::test]
    async fn clean_no_caches_no_deletions() {
        let mut cache_store = MockCacheStore::new();
        cache_store.expect_cache_names().returning(|| Ok(Vec::new()));
        cache_store.expect_entry_keys().never();
        cache_store.expect_delete_entry().never();

        clean(&cache_store).await;
    }

    #[tokio::test]
    async fn clean_removes_all_entries() {
        let mut cache_store = MockCacheStore::new();
        cache_store
            .expect_cache_names()
            .returning(|| Ok(vec!["assets".to_string(), "api".to_string()]));
        cache_store
            .expect_entry_keys()
            .withf(|cache| cache == "assets")
            .returning(|_| Ok(vec!["a".to_string(), "b".to_string()]));
        cache_store
            .expect_entry_keys()
            .withf(|cache| cache == "api")
            .returning(|_| Ok(vec!["c".to_string()]));
        cache_store
            .expect_delete_entry()
            .times(3)
            .returning(|_, _| Ok(()));

        clean(&cache_store).await;
    }

    #[tokio::test]
    async fn clean_tolerates_delete_failures() {
        let mut cache_store = MockCacheStore::new();
        cache_store
            .expect_cache_names()
            .returning(|| Ok(vec!["assets".to_string()]));
        cache_store
            .expect_entry_keys()
            .returning(|_| Ok(vec!["a".to_string(), "b".to_string()]));
        cache_store
            .expect_delete_entry()
            .withf(|_, key| key == "a")
            .times(1)
            .returning(|_, _| Err(CacheError("entry locked".to_string())));
        cache_store
            .expect_delete_entry()
            .withf(|_, key| key == "b")
            .times(1)
            .returning(|_, _| Ok(()));

        clean(&cache_store).await;
    }

    #[tokio::test]
    async fn clean_enumeration_failure_skips_cache_only() {
        let mut cache_store = MockCacheStore::new();
        cache_store
            .expect_cache_names()
            .returning(|| Ok(vec!["broken".to_string(), "assets".to_string()]));
        cache_store
            .expect_entry_keys()
            .withf(|cache| cache == "broken")
            .returning(|_| Err(CacheError("storage unavailable".to_string())));
        cache_store
            .expect_entry_keys()
            .withf(|cache| cache == "assets")
            .returning(|_| Ok(vec!["a".to_string()]));
        cache_store
            .expect_delete_entry()
            .withf(|cache, _| cache == "assets")
            .times(1)
            .returning(|_, _| Ok(()));

        clean(&cache_store).await;
    }

    #[tokio::test]
    async fn run_stops_on_close_notify() {
        let cache_store = MockCacheStore::new();
        let cleanup = CacheCleanup::new(
            CacheCleanupConfig {
                interval: Duration::from_secs(3600),
            },
            Arc::new(cache_store),
        );
        let close_notify = Arc::new(Notify::new());

        close_notify.notify_one();
        cleanup.run(close_notify).await;
    }
}
