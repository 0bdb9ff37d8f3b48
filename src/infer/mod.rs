//! Type inference module
//!
//! Infers a structural type description from one sample JSON value.
//!
//! # Features
//!
//! - **Type Labels**: Maps each JSON value to a string label (`string`,
//!   `number[]`, `(number | string)[]`, a record name, ...)
//! - **Nested Record Discovery**: Names and registers nested object shapes
//! - **Array Sampling**: Inspects only a bounded prefix of large arrays
//! - **Pluggable Naming**: Record-name heuristics behind a trait
//! - **Memoization**: Bounded, pass-scoped label cache
//!
//! # Overview
//!
//! A [`TypeInferrer`] walks a JSON value and decides a label for each
//! position. Nested object shapes discovered during the walk are collected in
//! a [`TypeRegistry`] threaded through the call chain, so separate passes
//! never interfere. [`TypeInferrer::infer_document`] runs one full pass and
//! returns the root shape together with the registry.

mod cache;
mod engine;
mod naming;
mod registry;
mod types;

pub use cache::{structural_hash, MemoCache, DEFAULT_CACHE_CAPACITY};
pub use engine::TypeInferrer;
pub use naming::{capitalize, sanitize_identifier, HeuristicNamer, NamingStrategy};
pub use registry::TypeRegistry;
pub use types::{label, Inference, RecordShape, TypeLabel};

#[cfg(test)]
mod tests;
