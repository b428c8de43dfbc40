//! Cache Statistics Module
//!
//! Per-store counters: hits, misses, evictions, and lazy expirations.

use serde::Serialize;

// == Cache Stats ==
/// Performance counters for one entry store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Successful retrievals
    pub hits: u64,
    /// Failed retrievals (absent or expired key)
    pub misses: u64,
    /// Entries removed to enforce the size cap
    pub evictions: u64,
    /// Entries removed because their TTL elapsed (lazy get or cleanup)
    pub expirations: u64,
    /// Entries currently stored, expired-but-untouched ones included
    pub entries: usize,
}

impl CacheStats {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 with no traffic.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Recorders ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}
