//! The type inference engine
//!
//! Walks one JSON value and decides a type label for every position. The
//! walk is synchronous and total: it always produces a label, resolving
//! depth overruns and unrecognized values to `any` instead of failing.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use super::cache::{structural_hash, MemoCache};
use super::naming::{HeuristicNamer, NamingStrategy};
use super::registry::TypeRegistry;
use super::types::{label, Inference, RecordShape, TypeLabel};

/// Key used when a non-object root document is wrapped for field extraction
const ROOT_WRAPPER_KEY: &str = "root";

/// Type inferrer with configuration options
#[derive(Debug, Clone)]
pub struct TypeInferrer {
    /// Max elements inspected per array
    sample_size: usize,
    /// Whether null keeps its own label instead of collapsing to `any`
    nullable: bool,
    /// Whether heterogeneous array element types become a union
    strict: bool,
    /// Recursion ceiling
    max_depth: usize,
    /// Record naming strategy
    namer: Arc<dyn NamingStrategy>,
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInferrer {
    /// Create a new inferrer with default settings
    pub fn new() -> Self {
        Self {
            sample_size: 3,
            nullable: false,
            strict: false,
            max_depth: 10,
            namer: Arc::new(HeuristicNamer),
        }
    }

    /// Set the array sampling size
    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Enable/disable nullable labels
    #[must_use]
    pub fn with_nullable(mut self, enabled: bool) -> Self {
        self.nullable = enabled;
        self
    }

    /// Enable/disable strict union arrays
    #[must_use]
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Set the maximum recursion depth
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Substitute the record naming strategy
    #[must_use]
    pub fn with_namer(mut self, namer: Arc<dyn NamingStrategy>) -> Self {
        self.namer = namer;
        self
    }

    /// Get the array sampling size
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Get the nullable setting
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Get the strict setting
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Get the maximum recursion depth
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Infer a type label for one JSON value.
    ///
    /// Nested object shapes discovered along the way are registered in
    /// `registry`.
    pub fn infer(&self, value: &Value, registry: &mut TypeRegistry) -> TypeLabel {
        self.infer_at(value, 0, "", registry)
    }

    /// Memoized variant of [`infer`](Self::infer).
    ///
    /// On a hit the previously computed label is returned verbatim and the
    /// registry is not touched, so the cache is only sound within the pass
    /// that populated it.
    pub fn infer_cached(
        &self,
        value: &Value,
        registry: &mut TypeRegistry,
        cache: &mut MemoCache,
    ) -> TypeLabel {
        let key = structural_hash(value, self);
        if let Some(hit) = cache.get(key) {
            return hit.clone();
        }
        let computed = self.infer(value, registry);
        cache.put(key, computed.clone());
        computed
    }

    /// Extract a record shape from an object's fields.
    ///
    /// Fields keep source key order. Inference never aborts the extraction
    /// of sibling fields: every field resolves to some label, worst case
    /// `any`.
    pub fn extract_fields(
        &self,
        obj: &Map<String, Value>,
        name: &str,
        registry: &mut TypeRegistry,
    ) -> RecordShape {
        self.extract_fields_at(obj, name, 0, registry)
    }

    /// Run one full inference pass over a document.
    ///
    /// Allocates a fresh registry, so consecutive passes cannot retain each
    /// other's discovered shapes. A non-object root is wrapped under a
    /// `root` key first. The root record's name is always caller-supplied.
    pub fn infer_document(&self, value: &Value, root_name: &str) -> Inference {
        let mut registry = TypeRegistry::new();

        let root = match value {
            Value::Object(map) => self.extract_fields(map, root_name, &mut registry),
            other => {
                debug!("root value is not an object, wrapping under '{ROOT_WRAPPER_KEY}'");
                let mut wrapper = Map::new();
                wrapper.insert(ROOT_WRAPPER_KEY.to_string(), other.clone());
                self.extract_fields(&wrapper, root_name, &mut registry)
            }
        };

        Inference { root, registry }
    }

    fn infer_at(
        &self,
        value: &Value,
        depth: usize,
        parent_key: &str,
        registry: &mut TypeRegistry,
    ) -> TypeLabel {
        // Depth guard comes before every other case
        if depth > self.max_depth {
            return label::ANY.to_string();
        }

        match value {
            Value::Null => {
                if self.nullable {
                    label::NULL.to_string()
                } else {
                    label::ANY.to_string()
                }
            }
            Value::Array(items) => self.infer_array(items, depth, parent_key, registry),
            Value::String(_) => label::STRING.to_string(),
            Value::Number(_) => label::NUMBER.to_string(),
            Value::Bool(_) => label::BOOLEAN.to_string(),
            Value::Object(map) => self.infer_object(map, depth, parent_key, registry),
        }
    }

    fn infer_array(
        &self,
        items: &[Value],
        depth: usize,
        parent_key: &str,
        registry: &mut TypeRegistry,
    ) -> TypeLabel {
        if items.is_empty() {
            return label::ANY_ARRAY.to_string();
        }

        // Sample a bounded prefix; large arrays are not fully scanned.
        // Nested arrays inherit the enclosing field's naming hint.
        let sample_len = self.sample_size.min(items.len());
        let mut distinct: Vec<TypeLabel> = Vec::new();
        for item in &items[..sample_len] {
            let item_label = self.infer_at(item, depth + 1, parent_key, registry);
            if !distinct.contains(&item_label) {
                distinct.push(item_label);
            }
        }

        if distinct.len() == 1 {
            label::array(&distinct[0])
        } else if self.strict {
            label::union_array(&distinct)
        } else {
            label::ANY_ARRAY.to_string()
        }
    }

    fn infer_object(
        &self,
        map: &Map<String, Value>,
        depth: usize,
        parent_key: &str,
        registry: &mut TypeRegistry,
    ) -> TypeLabel {
        if map.is_empty() {
            return label::OBJECT.to_string();
        }

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        let name = self.namer.derive_name(&keys, parent_key);

        let shape = self.extract_fields_at(map, &name, depth, registry);
        registry.register(shape);

        name
    }

    fn extract_fields_at(
        &self,
        obj: &Map<String, Value>,
        name: &str,
        depth: usize,
        registry: &mut TypeRegistry,
    ) -> RecordShape {
        let mut fields: IndexMap<String, TypeLabel> = IndexMap::new();

        for (key, val) in obj {
            let field_label = self.infer_at(val, depth + 1, key, registry);
            fields.insert(key.clone(), field_label);
        }

        RecordShape {
            name: name.to_string(),
            fields,
        }
    }
}
