//! In-process query cache backing the cache-first fetch policy.
//!
//! Entries are keyed by (query document, canonicalized variables) and expire
//! after a configurable TTL. The cache stores the raw `data` JSON so one entry
//! serves every typed decode of the same request.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use log::debug;
use serde_json::Value;

const DEFAULT_MAX_ENTRIES: usize = 512;

#[derive(Debug, Clone)]
struct CachedEntry {
    fetched_at: Instant,
    data: Value,
}

#[derive(Debug)]
pub struct QueryCache {
    entries: DashMap<String, CachedEntry>,
    ttl: Duration,
    max_entries: usize,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_capacity(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    pub fn cache_key(query: &str, variables: &Value) -> String {
        format!("{query}|{variables}")
    }

    /// Returns the cached `data` value if present and fresh.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entry = self.entries.get(key)?;
        if entry.fetched_at.elapsed() > self.ttl {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.data.clone())
    }

    pub fn put(&self, key: String, data: Value) {
        self.entries.insert(
            key,
            CachedEntry {
                fetched_at: Instant::now(),
                data,
            },
        );
        self.maybe_evict();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Bounded size: drop expired entries first, then arbitrary ones if the
    // cache is still over capacity.
    fn maybe_evict(&self) {
        if self.entries.len() <= self.max_entries {
            return;
        }
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.fetched_at.elapsed() <= self.ttl);

        let mut to_remove = self.entries.len().saturating_sub(self.max_entries);
        if to_remove > 0 {
            let keys: Vec<String> = self
                .entries
                .iter()
                .take(to_remove)
                .map(|e| e.key().clone())
                .collect();
            for key in keys {
                self.entries.remove(&key);
                to_remove -= 1;
                if to_remove == 0 {
                    break;
                }
            }
        }
        debug!(
            "Evicted {} query cache entries (size: {})",
            before - self.entries.len(),
            self.entries.len()
        );
    }
}
