//! CLI module
//!
//! Command-line interface for generating type declarations.
//!
//! # Commands
//!
//! - `generate` - Infer types from a JSON file and write declarations
//! - `watch` - Regenerate whenever the input file changes
//! - `languages` - List supported target languages
//! - `validate` - Check that a JSON file parses

mod commands;
mod runner;

pub use commands::{Cli, Commands, GenerateArgs};
pub use runner::Runner;
