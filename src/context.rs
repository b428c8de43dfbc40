//! Cache Context Module
//!
//! Owns the process's two store instances and hands them to consumers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::EntryStore;
use crate::config::Config;

/// A store shared across tasks. Reads also take the write lock: every `get`
/// promotes recency and updates counters.
pub type SharedStore = Arc<RwLock<EntryStore>>;

// == Cache Context ==
/// The two cache instances of the service, created once at process start
/// and cloned (cheaply) into every consumer.
///
/// `llm` holds expensive language-model results with a long TTL and
/// moderate capacity; `api` holds re-computable handler responses with a
/// short TTL and larger capacity. Neither persists across restarts.
#[derive(Clone)]
pub struct CacheContext {
    /// Long-lived results of upstream language-model calls
    pub llm: SharedStore,
    /// Short-lived, high-churn handler responses
    pub api: SharedStore,
}

impl CacheContext {
    /// Wraps two pre-built stores.
    pub fn new(llm: EntryStore, api: EntryStore) -> Self {
        Self {
            llm: Arc::new(RwLock::new(llm)),
            api: Arc::new(RwLock::new(api)),
        }
    }

    /// Builds both stores from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            EntryStore::new(config.llm_max_entries, config.llm_default_ttl),
            EntryStore::new(config.api_max_entries, config.api_default_ttl),
        )
    }
}
