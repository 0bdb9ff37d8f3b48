//! Inference result types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::registry::TypeRegistry;

/// A type label: the string result of inference describing one value's shape.
///
/// Forms: a primitive keyword (`string`, `number`, `boolean`, `any`, `null`),
/// an array `T[]`, a union array `(A | B)[]`, a record name (`User`), or bare
/// `object` for an object with no fields.
pub type TypeLabel = String;

/// Type label keywords and constructors
pub mod label {
    /// Fallback label for nulls, depth overruns, and anything unrecognized
    pub const ANY: &str = "any";
    /// Null label (only produced when nullable inference is enabled)
    pub const NULL: &str = "null";
    /// String primitive
    pub const STRING: &str = "string";
    /// Number primitive
    pub const NUMBER: &str = "number";
    /// Boolean primitive
    pub const BOOLEAN: &str = "boolean";
    /// Object with zero fields (also the array-element fallback in renderers)
    pub const OBJECT: &str = "object";
    /// Array with unknown element type
    pub const ANY_ARRAY: &str = "any[]";

    /// Build an array label from an element label
    pub fn array(element: &str) -> String {
        format!("{element}[]")
    }

    /// Build a union-array label from deduplicated element labels
    pub fn union_array(elements: &[String]) -> String {
        format!("({})[]", elements.join(" | "))
    }
}

/// A named record shape: a field-name to type-label mapping.
///
/// Field iteration order is the insertion order of the source object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordShape {
    /// Record name (a capitalized identifier)
    pub name: String,
    /// Field name → type label, in source key order
    pub fields: IndexMap<String, TypeLabel>,
}

impl RecordShape {
    /// Create an empty shape with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field (builder style, used mostly in tests)
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.fields.insert(key.into(), label.into());
        self
    }

    /// Get a field's label
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the shape has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The result of one full inference pass over a document
#[derive(Debug, Clone)]
pub struct Inference {
    /// The root record shape (name is always caller-supplied)
    pub root: RecordShape,
    /// All nested record shapes discovered during the pass
    pub registry: TypeRegistry,
}
