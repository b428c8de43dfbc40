//! memocache - an in-memory memoization cache for LLM-backed services
//!
//! Provides TTL expiry, LRU eviction, deterministic argument-based key
//! derivation, and an async call-result memoizer around two process-wide
//! store instances.
//!
//! # Example
//! ```
//! use memocache::{CacheContext, Config, KeyParts, Memoizer};
//! use serde_json::{json, Value};
//!
//! # tokio_test::block_on(async {
//! let caches = CacheContext::from_config(&Config::default());
//! let memo = Memoizer::new(caches.llm.clone());
//!
//! let args = KeyParts::new().arg(&"resume text").unwrap();
//! let parsed: Result<Value, std::convert::Infallible> = memo
//!     .invoke(&args, false, || async { Ok(json!({"skills": ["rust"]})) })
//!     .await;
//! assert_eq!(parsed.unwrap()["skills"][0], "rust");
//! # });
//! ```

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod tasks;

pub use cache::{is_cacheable, CacheEntry, CacheStats, EntryStore, KeyParts, Memoizer, ERROR_KEY};
pub use config::Config;
pub use context::{CacheContext, SharedStore};
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
