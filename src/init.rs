//!
//! This module provides initialization utilities for notefix, such as creating a default configuration file.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for initialization operations
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to access file {path}: {source}")]
    IoError { source: io::Error, path: String },
}

/// Contents written by `notefix init`.
pub const DEFAULT_CONFIG: &str = r#"# notefix configuration file

[global]
# File extensions (without the dot) rewritten when walking directories
extensions = ["md"]
# Glob patterns of files or directories to skip
exclude = []
# Skip files ignored by .gitignore
respect-gitignore = false
# Visit hidden files and directories
hidden = true

[tag]
# Label inserted when no language is detected (empty: leave the fence untagged)
fallback-language = ""
# "exact" inserts the detected label; "linguist" resolves aliases (py -> python)
normalize-language = "exact"

[tag.language-aliases]
# Extra alias -> canonical mappings used with normalize-language = "linguist"
# sh = "bash"
"#;

/// Create a default configuration file at the specified path.
///
/// Returns `true` if the file was created, or `false` if it already exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created due to permissions or other I/O errors.
pub fn create_default_config(path: &Path) -> Result<bool, InitError> {
    if path.exists() {
        return Ok(false);
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| InitError::IoError {
        source: e,
        path: path.display().to_string(),
    })?;

    Ok(true)
}
