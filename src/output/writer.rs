//! Safe output-file writing
//!
//! Generated declarations land below a delimiter line. Content above the
//! delimiter is hand-written and survives regeneration, so the tool can be
//! pointed at a file the user also edits.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Delimiter separating hand-written from generated content
pub const DEFAULT_DELIMITER: &str = "/* ---- Generated Below ---- */";

/// Configuration for the output writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    delimiter: String,
    backup: bool,
    dry_run: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            backup: false,
            dry_run: false,
        }
    }
}

impl WriterConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter line
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enable or disable backups of the prior file content
    #[must_use]
    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.backup = enabled;
        self
    }

    /// Enable or disable dry-run mode (log instead of write)
    #[must_use]
    pub fn with_dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Get the delimiter line
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Whether backups are enabled
    pub fn is_backup_enabled(&self) -> bool {
        self.backup
    }

    /// Whether dry-run mode is enabled
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Write generated content to `path`.
///
/// If the file already contains the delimiter, everything after the first
/// occurrence is replaced. If it exists without the delimiter, the delimiter
/// and content are appended. A missing file is created. The parent directory
/// is created when absent.
pub fn write_generated(path: impl AsRef<Path>, content: &str, config: &WriterConfig) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::output(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let existing = if path.exists() {
        match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("could not read existing file {}: {e}", path.display());
                String::new()
            }
        }
    } else {
        String::new()
    };

    if config.backup && !existing.is_empty() {
        let backup_path = format!("{}.backup", path.display());
        match fs::write(&backup_path, &existing) {
            Ok(()) => info!("backup created: {backup_path}"),
            Err(e) => warn!("could not create backup {backup_path}: {e}"),
        }
    }

    let result = splice(&existing, content, &config.delimiter);

    if config.dry_run {
        info!("dry run, would write to {}", path.display());
        println!("{result}");
        return Ok(());
    }

    fs::write(path, &result)
        .map_err(|e| Error::output(format!("Failed to write {}: {e}", path.display())))?;

    debug!("written to {}", path.display());
    Ok(())
}

/// Splice generated content into existing file text
fn splice(existing: &str, content: &str, delimiter: &str) -> String {
    if existing.is_empty() {
        return format!("{delimiter}\n\n{content}");
    }
    match existing.split_once(delimiter) {
        Some((prefix, _)) => format!("{prefix}{delimiter}\n\n{content}"),
        None => format!("{existing}\n\n{delimiter}\n\n{content}"),
    }
}

/// Check that a string parses as JSON
pub fn validate_json(text: &str) -> bool {
    serde_json::from_str::<Value>(text).is_ok()
}

/// Read and parse a JSON file.
///
/// A missing file and malformed JSON are the only hard failures in the
/// generation pipeline.
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    Ok(value)
}
