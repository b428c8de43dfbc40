//! Entry Store Module
//!
//! The expiring store: HashMap storage with recency ordering, a hard size
//! cap, and lazy TTL expiry on read.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, RecencyList};

// == Entry Store ==
/// Bounded key→entry map with LRU eviction and TTL expiry.
///
/// A miss is an `Option::None`, not an error. Expiry is lazy: `get` removes
/// only the expired entry it touched; `cleanup` is the bulk path.
#[derive(Debug)]
pub struct EntryStore {
    /// Key-entry storage
    entries: HashMap<String, CacheEntry>,
    /// Access ordering for eviction
    recency: RecencyList,
    /// Performance counters
    stats: CacheStats,
    /// Hard cap on stored entries
    max_size: usize,
    /// TTL in seconds applied when `set` omits one
    default_ttl: u64,
}

impl EntryStore {
    // == Constructor ==
    /// Creates a store holding at most `max_size` entries, with
    /// `default_ttl` seconds applied to entries stored without an explicit
    /// TTL.
    pub fn new(max_size: usize, default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyList::new(),
            stats: CacheStats::new(),
            max_size,
            default_ttl,
        }
    }

    // == Get ==
    /// Retrieves the value for `key`, promoting it to most-recently-used.
    ///
    /// An expired entry is deleted on the spot and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired() {
            debug!(key, "entry expired on read, removing");
            self.entries.remove(key);
            self.recency.forget(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_entries(self.entries.len());
            return None;
        }

        let value = entry.value.clone();
        self.recency.promote(key);
        self.stats.record_hit();
        Some(value)
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, resetting its timestamps
    /// and recency position.
    ///
    /// If the store then holds more than `max_size` entries, the
    /// least-recently-used one is evicted, whether or not it has expired.
    /// Replacing an existing key never evicts.
    pub fn set(&mut self, key: String, value: Value, ttl: Option<u64>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key.clone(), CacheEntry::new(value, ttl));
        self.recency.promote(&key);

        if self.entries.len() > self.max_size {
            if let Some(evicted) = self.recency.pop_lru() {
                debug!(key = %evicted, "capacity reached, evicting LRU entry");
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.stats.set_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
        self.stats.set_entries(0);
    }

    // == Cleanup ==
    /// Removes every entry whose TTL has elapsed and returns how many were
    /// dropped. The only bulk-expiry path.
    pub fn cleanup(&mut self) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired.len();

        for key in expired {
            self.entries.remove(&key);
            self.recency.forget(&key);
            self.stats.record_expiration();
        }

        self.stats.set_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Number of stored entries, counting expired ones not yet touched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Snapshot of the store's counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }
}
