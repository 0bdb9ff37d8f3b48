//! Code generation module
//!
//! Supports: TypeScript, JavaScript, Go, Rust, C, C++, C#, Django, Swift,
//! Objective-C
//!
//! # Overview
//!
//! Each generator is a pure function from an inferred record shape (plus the
//! registry of nested shapes) to formatted declaration text, along with the
//! target's conventional file extension and line-comment prefix.

mod generators;
mod types;

pub use generators::{
    CGenerator, CppGenerator, CsGenerator, DjangoGenerator, GoGenerator, JsGenerator,
    ObjectiveCGenerator, RustGenerator, SwiftGenerator, TsGenerator,
};
pub use types::{CodeGenerator, Language};
