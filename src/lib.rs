// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

//! # typeforge
//!
//! A minimal, Rust-native JSON-to-type-declaration generator.
//! Point it at one sample JSON document and get struct/class/record
//! declarations for ten target languages.
//!
//! ## Features
//!
//! - **Type Inference**: walks a JSON sample and labels every position
//! - **Nested Records**: discovers, names and deduplicates nested object shapes
//! - **Array Sampling**: inspects only a bounded prefix of large arrays
//! - **Ten Targets**: TypeScript, JavaScript, Go, Rust, C, C++, C#, Django,
//!   Swift, Objective-C
//! - **Safe Writing**: delimiter-spliced output preserves hand-written content
//! - **Watch Mode**: regenerate on every input change
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use typeforge::infer::TypeInferrer;
//! use typeforge::render::Language;
//!
//! let document = serde_json::json!({"name": "John", "age": 30});
//!
//! let inference = TypeInferrer::new().infer_document(&document, "User");
//! let code = Language::Ts
//!     .generator()
//!     .generate(&inference.root, &inference.registry);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────────────┐    ┌──────────────┐
//! │  input.json  │───►│          infer          │───►│    render    │
//! └──────────────┘    │ RecordShape + Registry  │    │ 10 languages │
//!                     └─────────────────────────┘    └──────┬───────┘
//!                       sampling · naming · memo            │
//!                                                    ┌──────▼───────┐
//!                                                    │    output    │
//!                                                    │ splice·backup│
//!                                                    └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Configuration file support
pub mod config;

/// Type inference from JSON samples
pub mod infer;

/// Per-language code generation
pub mod render;

/// JSON reading and safe output writing
pub mod output;

/// File watching for regeneration on change
pub mod watch;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use infer::{Inference, RecordShape, TypeInferrer, TypeRegistry};
pub use render::{CodeGenerator, Language};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
