//! Key Derivation Module
//!
//! Turns a call's arguments into one deterministic, fixed-length key.
//!
//! Positional arguments are rendered in order, named arguments follow in
//! lexicographic order as `name:value`. Scalars contribute their bare text;
//! arrays and objects are rendered as canonical JSON with object keys sorted
//! at every level, so structurally-equal values always produce the same key
//! regardless of insertion order. The joined parts are hashed with SHA-256.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Separator between rendered argument parts. Not escaped inside argument
/// text; hash collisions from embedded pipes are accepted.
const PART_SEPARATOR: &str = "|";

// == Key Parts ==
/// Builder for the arguments that identify one logical invocation.
///
/// Arguments are captured as JSON values up front, so any type without a
/// JSON representation is rejected loudly instead of being stringified
/// through some unstable fallback.
///
/// # Example
/// ```
/// use memocache::KeyParts;
///
/// let key = KeyParts::new()
///     .arg(&"resume text")?
///     .named("model", &"deepseek-chat")?
///     .derive();
/// assert_eq!(key.len(), 64);
/// # Ok::<(), memocache::CacheError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyParts {
    positional: Vec<Value>,
    named: BTreeMap<String, Value>,
}

impl KeyParts {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Positional Argument ==
    /// Appends a positional argument.
    pub fn arg<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        self.positional.push(serde_json::to_value(value)?);
        Ok(self)
    }

    // == Named Argument ==
    /// Adds a named argument. Names are ordered lexicographically at
    /// derivation time; re-using a name replaces its value.
    pub fn named<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> Result<Self> {
        self.named.insert(name.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    // == Derive ==
    /// Derives the final opaque key: 64 lowercase hex chars.
    pub fn derive(&self) -> String {
        hash_parts(&self.rendered_parts())
    }

    /// Derives a key with `scope` as an extra leading positional component,
    /// so operations sharing an argument shape do not collide.
    pub fn derive_scoped(&self, scope: &str) -> String {
        let mut parts = self.rendered_parts();
        parts.insert(0, scope.to_string());
        hash_parts(&parts)
    }

    fn rendered_parts(&self) -> Vec<String> {
        let mut parts: Vec<String> = self.positional.iter().map(render).collect();
        for (name, value) in &self.named {
            parts.push(format!("{name}:{}", render(value)));
        }
        parts
    }
}

// == Rendering ==
/// Renders one argument: bare text for scalars, canonical JSON for
/// structured values.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => canonical_json(value),
    }
}

/// Serializes a value as JSON with object keys sorted at every nesting
/// level. `serde_json::Map` ordering depends on feature flags, so sorting
/// is done here explicitly.
fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            out.push_str(&value.to_string());
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(&map[*key], out);
            }
            out.push('}');
        }
    }
}

fn hash_parts(parts: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(parts.join(PART_SEPARATOR).as_bytes());
    hex::encode(hasher.finalize())
}
