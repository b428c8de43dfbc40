//! Call-Result Memoizer Module
//!
//! Wraps an asynchronous operation with read-through caching: derive a key
//! from the call's arguments, short-circuit on a hit, otherwise run the
//! operation and conditionally store what it returned.

use std::future::Future;

use serde_json::Value;
use tracing::debug;

use crate::cache::KeyParts;
use crate::context::SharedStore;

/// Key whose presence marks a payload as a failure report. Results carrying
/// it are never cached.
pub const ERROR_KEY: &str = "error";

// == Cacheability ==
/// Write-back policy: only JSON objects without an [`ERROR_KEY`] entry are
/// worth keeping. Scalars and arrays cannot be vouched for and error
/// payloads must not outlive the call that produced them.
pub fn is_cacheable(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.contains_key(ERROR_KEY),
        _ => false,
    }
}

// == Memoizer ==
/// Read-through wrapper around one shared store.
///
/// The unqualified form keys purely on the call's arguments and stores with
/// the store's default TTL. The scoped form leads the key with the wrapped
/// operation's name and uses a caller-chosen TTL, so operations sharing an
/// argument shape never collide.
#[derive(Clone)]
pub struct Memoizer {
    store: SharedStore,
    scope: Option<String>,
    ttl: Option<u64>,
}

impl Memoizer {
    // == Constructors ==
    /// Unqualified memoization: the arguments alone identify the call.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            scope: None,
            ttl: None,
        }
    }

    /// Name-qualified memoization: `name` leads the key and results live
    /// for `ttl_seconds`.
    pub fn scoped(store: SharedStore, name: impl Into<String>, ttl_seconds: u64) -> Self {
        Self {
            store,
            scope: Some(name.into()),
            ttl: Some(ttl_seconds),
        }
    }

    // == Invoke ==
    /// Runs `op` through the cache.
    ///
    /// With `force` set, the cache is skipped entirely: no read, no write.
    /// On a hit the cached value is returned and `op` never runs. On a miss
    /// `op` is awaited with no lock held; its error, if any, propagates
    /// unchanged and is never stored. A successful result is written back
    /// only when [`is_cacheable`] approves it.
    ///
    /// Two concurrent calls with the same key can both miss and both
    /// execute; the second write-back wins. Callers needing stronger
    /// guarantees must de-duplicate upstream.
    pub async fn invoke<F, Fut, E>(&self, args: &KeyParts, force: bool, op: F) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if force {
            return op().await;
        }

        let key = match &self.scope {
            Some(name) => args.derive_scoped(name),
            None => args.derive(),
        };

        {
            let mut store = self.store.write().await;
            if let Some(hit) = store.get(&key) {
                debug!(key = %key, scope = ?self.scope, "cache hit");
                return Ok(hit);
            }
        } // lock released before the operation runs

        let result = op().await?;

        if is_cacheable(&result) {
            debug!(key = %key, scope = ?self.scope, "caching result");
            self.store.write().await.set(key, result.clone(), self.ttl);
        }

        Ok(result)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::EntryStore;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn shared(max_size: usize, default_ttl: u64) -> SharedStore {
        Arc::new(RwLock::new(EntryStore::new(max_size, default_ttl)))
    }

    #[test]
    fn test_is_cacheable_object_without_error() {
        assert!(is_cacheable(&json!({"skills": ["rust"]})));
    }

    #[test]
    fn test_is_cacheable_rejects_error_payloads() {
        assert!(!is_cacheable(&json!({"error": "upstream timeout"})));
    }

    #[test]
    fn test_is_cacheable_rejects_scalars_and_arrays() {
        assert!(!is_cacheable(&json!("a string")));
        assert!(!is_cacheable(&json!(17)));
        assert!(!is_cacheable(&json!(null)));
        assert!(!is_cacheable(&json!([1, 2, 3])));
    }

    #[test]
    fn test_invoke_miss_then_hit() {
        tokio_test::block_on(async {
            let store = shared(10, 300);
            let memo = Memoizer::new(store.clone());
            let args = KeyParts::new().arg(&"resume").unwrap();

            let first: Result<Value, std::convert::Infallible> =
                memo.invoke(&args, false, || async { Ok(json!({"n": 1})) }).await;
            assert_eq!(first.unwrap(), json!({"n": 1}));

            // Second call is served from cache even if the op would now
            // return something else
            let second: Result<Value, std::convert::Infallible> =
                memo.invoke(&args, false, || async { Ok(json!({"n": 2})) }).await;
            assert_eq!(second.unwrap(), json!({"n": 1}));

            assert_eq!(store.read().await.len(), 1);
        });
    }

    #[test]
    fn test_invoke_propagates_errors_without_caching() {
        tokio_test::block_on(async {
            let store = shared(10, 300);
            let memo = Memoizer::new(store.clone());
            let args = KeyParts::new().arg(&"resume").unwrap();

            let result: Result<Value, String> = memo
                .invoke(&args, false, || async { Err("connect refused".to_string()) })
                .await;

            assert_eq!(result.unwrap_err(), "connect refused");
            assert!(store.read().await.is_empty());
        });
    }

    #[test]
    fn test_scoped_memoizers_do_not_share_entries() {
        tokio_test::block_on(async {
            let store = shared(10, 300);
            let parse = Memoizer::scoped(store.clone(), "parse_resume", 60);
            let gap = Memoizer::scoped(store.clone(), "analyze_gap", 60);
            let args = KeyParts::new().arg(&"same text").unwrap();

            let _: Result<Value, std::convert::Infallible> =
                parse.invoke(&args, false, || async { Ok(json!({"from": "parse"})) }).await;
            let second: Result<Value, std::convert::Infallible> =
                gap.invoke(&args, false, || async { Ok(json!({"from": "gap"})) }).await;

            assert_eq!(second.unwrap(), json!({"from": "gap"}));
            assert_eq!(store.read().await.len(), 2);
        });
    }
}
