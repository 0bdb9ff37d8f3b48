//! Memoization cache for type inference
//!
//! Bounded LRU cache keyed by a structural hash of (value, options). Create
//! one per inference pass; a cache outliving the registry it was populated
//! against would hand out labels for records that were never registered.

use lru::LruCache;
use serde_json::Value;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use super::engine::TypeInferrer;
use super::types::TypeLabel;

/// Default number of cached labels
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Bounded label cache for repeated identical values
#[derive(Debug)]
pub struct MemoCache {
    cache: LruCache<u64, TypeLabel>,
    hits: u64,
    misses: u64,
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoCache {
    /// Create a cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache bounded to `capacity` entries (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a previously computed label
    pub fn get(&mut self, key: u64) -> Option<&TypeLabel> {
        match self.cache.get(&key) {
            Some(hit) => {
                self.hits += 1;
                Some(hit)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a computed label, evicting the least recently used entry when full
    pub fn put(&mut self, key: u64, value: TypeLabel) {
        self.cache.put(key, value);
    }

    /// Number of cached labels
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Lookup hits so far
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookup misses so far
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Structural hash of a JSON value combined with the inferrer's options.
///
/// Two calls collide only when both the value structure and every option
/// that can change the resulting label agree.
pub fn structural_hash(value: &Value, inferrer: &TypeInferrer) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    inferrer.sample_size().hash(&mut hasher);
    inferrer.nullable().hash(&mut hasher);
    inferrer.strict().hash(&mut hasher);
    inferrer.max_depth().hash(&mut hasher);
    hash_value(value, &mut hasher);
    hasher.finish()
}

fn hash_value<H: Hasher>(value: &Value, hasher: &mut H) {
    match value {
        Value::Null => 0u8.hash(hasher),
        Value::Bool(b) => {
            1u8.hash(hasher);
            b.hash(hasher);
        }
        Value::Number(n) => {
            2u8.hash(hasher);
            if let Some(i) = n.as_i64() {
                i.hash(hasher);
            } else if let Some(u) = n.as_u64() {
                u.hash(hasher);
            } else {
                n.as_f64().unwrap_or(0.0).to_bits().hash(hasher);
            }
        }
        Value::String(s) => {
            3u8.hash(hasher);
            s.hash(hasher);
        }
        Value::Array(items) => {
            4u8.hash(hasher);
            items.len().hash(hasher);
            for item in items {
                hash_value(item, hasher);
            }
        }
        Value::Object(map) => {
            5u8.hash(hasher);
            map.len().hash(hasher);
            for (key, val) in map {
                key.hash(hasher);
                hash_value(val, hasher);
            }
        }
    }
}
