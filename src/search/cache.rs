use lru::LruCache;
use std::num::NonZeroUsize;

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::github::SearchResponse;

/// Bounded least-recently-used store of decoded search responses, keyed by
/// the exact query text.
///
/// Keys are compared byte-for-byte: "Rust" and "rust" are different entries.
/// Not synchronized; the gateway owns it behind a mutex.
pub struct ResponseCache {
    entries: LruCache<String, SearchResponse>,
}

impl ResponseCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Look up `query`, promoting it to most recently used on a hit.
    pub fn get(&mut self, query: &str) -> Option<SearchResponse> {
        self.entries.get(query).cloned()
    }

    /// Insert or replace `query`, evicting the least recently used entry
    /// when a new key would exceed capacity.
    pub fn put(&mut self, query: &str, value: SearchResponse) {
        if let Some((evicted, _)) = self.entries.push(query.to_string(), value) {
            if evicted != query {
                tracing::debug!(query = %evicted, "evicted cached response");
            }
        }
    }

    #[cfg(test)]
    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains(query)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> NonZeroUsize {
        self.entries.cap()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}
