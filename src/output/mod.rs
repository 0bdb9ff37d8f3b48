//! Output module
//!
//! Handles JSON input reading and safe output-file writing.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Reading and validating JSON input files
//! - Writing generated declarations below a delimiter, preserving any
//!   hand-written content above it
//! - Backups and dry runs

mod writer;

pub use writer::{read_json_file, validate_json, write_generated, WriterConfig, DEFAULT_DELIMITER};
