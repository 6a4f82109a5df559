//!
//! This module defines the `.notefix.toml` configuration structures and the
//! logic for locating and loading them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up when no explicit `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".notefix.toml";

/// Represents the complete configuration loaded from `.notefix.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Walker options shared by every transformation
    pub global: GlobalConfig,

    /// Language tagging options
    pub tag: TagConfig,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GlobalConfig {
    /// File extensions (without the dot) that are rewritten
    pub extensions: Vec<String>,

    /// Glob patterns of files or directories to skip
    pub exclude: Vec<String>,

    /// Respect .gitignore files when scanning directories
    pub respect_gitignore: bool,

    /// Visit hidden files and directories
    pub hidden: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            exclude: Vec::new(),
            respect_gitignore: false,
            hidden: true,
        }
    }
}

/// Options for the language tagger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TagConfig {
    /// Label used when the classifier has no guess (empty: leave the fence untagged)
    pub fallback_language: String,

    /// Language normalization strategy
    pub normalize_language: NormalizeLanguage,

    /// Extra alias -> canonical mappings used by `normalize-language = "linguist"`
    pub language_aliases: HashMap<String, String>,
}

/// Language normalization strategy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizeLanguage {
    /// Insert the classifier's label lowercased, otherwise verbatim
    #[default]
    Exact,
    /// Resolve aliases to canonical names (e.g., "py" -> "python")
    Linguist,
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: String, message: String },
}

impl Config {
    /// Parse configuration from TOML text. `path` is only used in error messages.
    pub fn from_toml(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display_path = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            source: e,
            path: display_path.clone(),
        })?;
        log::debug!("[notefix-config] Loaded config file: {display_path}");
        Self::from_toml(&content, &display_path)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path is always loaded. Otherwise, unless `no_config` is set,
    /// `.notefix.toml` is looked up in the first target directory and then in
    /// the current directory. Returns the config and the file it came from.
    pub fn discover(
        explicit: Option<&Path>,
        targets: &[PathBuf],
        no_config: bool,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }
        if no_config {
            log::debug!("[notefix-config] Config discovery disabled");
            return Ok((Self::default(), None));
        }

        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(first) = targets.first()
            && first.is_dir()
        {
            candidates.push(first.join(CONFIG_FILE_NAME));
        }
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(CONFIG_FILE_NAME));
        }

        for candidate in candidates {
            log::debug!("[notefix-config] Looking for config at: {}", candidate.display());
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        log::debug!("[notefix-config] No config file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Whether `path` has one of the configured extensions (case-sensitive).
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.global.extensions.iter().any(|wanted| wanted == ext))
    }
}
