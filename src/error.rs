//! Error types for the memoization cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
///
/// A cache miss is not an error; `EntryStore::get` returns `Option`. The
/// only failure modes the crate owns are key derivation and configuration.
#[derive(Error, Debug)]
pub enum CacheError {
    /// An argument has no JSON representation and cannot contribute to a
    /// cache key (maps with non-string keys, opaque handles, ...).
    #[error("cache key argument cannot be serialized: {0}")]
    KeyDerivation(#[from] serde_json::Error),

    /// Configuration value outside its valid range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
