//! Discovered-type registry
//!
//! Collects the record shapes discovered during one inference pass. The
//! registry is an explicit value threaded through the inference call chain,
//! so overlapping passes each get their own discovered-types set.

use indexmap::IndexMap;
use tracing::warn;

use super::types::RecordShape;

/// Registry of record shapes discovered during one inference pass.
///
/// Entries keep registration order. Registering a shape under an existing
/// name overwrites it (last writer wins); an overwrite that changes the
/// field map is counted as a collision and logged.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    shapes: IndexMap<String, RecordShape>,
    collisions: usize,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a shape, returning the displaced entry if the name was taken.
    ///
    /// Two different nested objects can derive the same name (e.g. two
    /// unrelated fields both called `data`); the later one wins and the
    /// earlier shape is lost. That overwrite is deliberate but surfaced:
    /// it is counted and logged as a warning.
    pub fn register(&mut self, shape: RecordShape) -> Option<RecordShape> {
        let name = shape.name.clone();
        let previous = self.shapes.insert(name.clone(), shape);
        if let Some(prev) = &previous {
            let current = self.shapes.get(&name).map(|s| &s.fields);
            if current != Some(&prev.fields) {
                self.collisions += 1;
                warn!(
                    name = %name,
                    "type name collision: overwriting a previously discovered shape"
                );
            }
        }
        previous
    }

    /// Get a shape by name
    pub fn get(&self, name: &str) -> Option<&RecordShape> {
        self.shapes.get(name)
    }

    /// All discovered shapes, in registration order
    pub fn shapes(&self) -> impl Iterator<Item = &RecordShape> {
        self.shapes.values()
    }

    /// Empty the registry
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.collisions = 0;
    }

    /// Number of registered shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of shape-changing overwrites seen so far
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
