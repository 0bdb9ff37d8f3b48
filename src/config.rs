//! Configuration file support
//!
//! An optional YAML file mirrors the CLI flags, so a project can pin its
//! generation settings next to its data. CLI flags take precedence over file
//! values, file values over the defaults.
//!
//! ```yaml
//! language: ts
//! inference:
//!   sample_size: 5
//!   strict: true
//! output:
//!   backup: true
//!   root_name: ApiResponse
//! ```

use crate::error::{Error, Result};
use crate::infer::TypeInferrer;
use crate::output::DEFAULT_DELIMITER;
use crate::render::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete tool configuration loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Default target language
    #[serde(default)]
    pub language: Option<Language>,

    /// Inference options
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Output options
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Validate field values after deserialization
    pub fn validate(&self) -> Result<()> {
        if self.inference.sample_size == 0 {
            return Err(Error::invalid_value(
                "inference.sample_size",
                "must be at least 1",
            ));
        }
        if self.output.delimiter.trim().is_empty() {
            return Err(Error::invalid_value(
                "output.delimiter",
                "must not be blank",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Inference
// ============================================================================

/// Inference options section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Max elements inspected per array
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Keep `null` as its own label instead of collapsing to `any`
    #[serde(default)]
    pub nullable: bool,

    /// Preserve heterogeneous array element types as a union
    #[serde(default)]
    pub strict: bool,

    /// Recursion ceiling
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_sample_size() -> usize {
    3
}

fn default_max_depth() -> usize {
    10
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            nullable: false,
            strict: false,
            max_depth: default_max_depth(),
        }
    }
}

impl InferenceConfig {
    /// Build a [`TypeInferrer`] from these settings
    pub fn to_inferrer(&self) -> TypeInferrer {
        TypeInferrer::new()
            .with_sample_size(self.sample_size)
            .with_nullable(self.nullable)
            .with_strict(self.strict)
            .with_max_depth(self.max_depth)
    }
}

// ============================================================================
// Output
// ============================================================================

/// Output options section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Delimiter separating hand-written from generated content
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Copy prior file content to `<file>.backup` before writing
    #[serde(default)]
    pub backup: bool,

    /// Name for the root record
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_root_name() -> String {
    "Root".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            backup: false,
            root_name: default_root_name(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<FileConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<FileConfig> {
    let config: FileConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}
