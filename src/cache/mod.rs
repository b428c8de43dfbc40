//! Cache Module
//!
//! In-memory memoization: TTL expiry, LRU eviction, deterministic key
//! derivation, and the async call-result memoizer.

mod entry;
mod key;
mod memo;
mod recency;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::KeyParts;
pub use memo::{is_cacheable, Memoizer, ERROR_KEY};
pub use recency::RecencyList;
pub use stats::CacheStats;
pub use store::EntryStore;
