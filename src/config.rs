//! Configuration Module
//!
//! Handles loading cache sizing and TTLs from environment variables.

use std::env;

use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The defaults size the `llm` store for expensive, long-lived
/// results and the `api` store for cheap, short-lived ones.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum entries in the language-model result store
    pub llm_max_entries: usize,
    /// Default TTL in seconds for language-model results
    pub llm_default_ttl: u64,
    /// Maximum entries in the handler-response store
    pub api_max_entries: usize,
    /// Default TTL in seconds for handler responses
    pub api_default_ttl: u64,
    /// Background cleanup interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LLM_CACHE_MAX_ENTRIES` - LLM store capacity (default: 500)
    /// - `LLM_CACHE_TTL` - LLM result TTL in seconds (default: 86400)
    /// - `API_CACHE_MAX_ENTRIES` - API store capacity (default: 1000)
    /// - `API_CACHE_TTL` - API response TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - cleanup frequency in seconds (default: 60)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            llm_max_entries: env_or("LLM_CACHE_MAX_ENTRIES", 500),
            llm_default_ttl: env_or("LLM_CACHE_TTL", 86_400),
            api_max_entries: env_or("API_CACHE_MAX_ENTRIES", 1000),
            api_default_ttl: env_or("API_CACHE_TTL", 300),
            cleanup_interval: env_or("CLEANUP_INTERVAL", 60),
        }
    }

    /// Rejects zero capacities and TTLs; all five knobs are positive
    /// integers.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("LLM_CACHE_MAX_ENTRIES", self.llm_max_entries as u64),
            ("LLM_CACHE_TTL", self.llm_default_ttl),
            ("API_CACHE_MAX_ENTRIES", self.api_max_entries as u64),
            ("API_CACHE_TTL", self.api_default_ttl),
            ("CLEANUP_INTERVAL", self.cleanup_interval),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(CacheError::InvalidConfig(format!(
                    "{name} must be positive"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_max_entries: 500,
            llm_default_ttl: 86_400,
            api_max_entries: 1000,
            api_default_ttl: 300,
            cleanup_interval: 60,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
