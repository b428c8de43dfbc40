//! Cache Entry Module
//!
//! A single memoized result with its creation and expiry timestamps.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

// == Cache Entry ==
/// One cached result.
///
/// Entries always carry an expiry; the store supplies its default TTL when
/// the caller does not pick one.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The memoized payload
    pub value: Value,
    /// When the entry was inserted
    pub created_at: DateTime<Utc>,
    /// `created_at + ttl`; the entry is dead once the clock reaches this
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry expiring `ttl_seconds` from now.
    pub fn new(value: Value, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        Self {
            value,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds as i64),
        }
    }

    // == Is Expired ==
    /// Checks whether the TTL has fully elapsed.
    ///
    /// Boundary condition: expired once the current time is greater than or
    /// equal to `expires_at`, so a zero TTL produces an entry that is
    /// already dead.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime in whole seconds, 0 once past due.
    pub fn ttl_remaining(&self) -> u64 {
        let left = self.expires_at.signed_duration_since(Utc::now());
        left.num_seconds().max(0) as u64
    }
}
