//! In-process cache with per-entry expiry.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

struct CacheEntry {
    destination: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Process-local cache used when no Redis instance is configured.
///
/// Expired entries are treated as absent and dropped on read. When the cache
/// reaches `max_entries`, expired entries are purged first; if it is still
/// full the new entry is not stored.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
    max_entries: usize,
}

impl MemoryCache {
    pub fn new(default_ttl_seconds: u64, max_entries: usize) -> Self {
        debug!(
            "Using MemoryCache (TTL: {}s, capacity: {})",
            default_ttl_seconds, max_entries
        );
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl: Duration::from_secs(default_ttl_seconds),
            max_entries,
        }
    }

    /// Number of entries currently held, including not-yet-purged expired ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_destination(&self, site: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();

        {
            let entries = self.entries.read().await;
            match entries.get(site) {
                Some(entry) if !entry.is_expired(now) => {
                    return Ok(Some(entry.destination.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        if entries.get(site).is_some_and(|e| e.is_expired(now)) {
            entries.remove(site);
            debug!("Cache EXPIRED: {}", site);
        }
        Ok(None)
    }

    async fn set_destination(
        &self,
        site: &str,
        destination: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let ttl = ttl_seconds
            .map(Duration::from_secs)
            .unwrap_or(self.default_ttl);
        let now = Instant::now();

        let mut entries = self.entries.write().await;

        if !entries.contains_key(site) && entries.len() >= self.max_entries {
            entries.retain(|_, e| !e.is_expired(now));
            if entries.len() >= self.max_entries {
                warn!(
                    "MemoryCache full ({} entries), not caching {}",
                    self.max_entries, site
                );
                return Ok(());
            }
        }

        entries.insert(
            site.to_string(),
            CacheEntry {
                destination: destination.to_string(),
                expires_at: now + ttl,
            },
        );
        debug!("Cache SET: {} -> {} (TTL: {:?})", site, destination, ttl);
        Ok(())
    }

    async fn invalidate(&self, site: &str) -> CacheResult<bool> {
        Ok(self.entries.write().await.remove(site).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
