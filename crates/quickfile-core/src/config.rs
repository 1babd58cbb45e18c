//! Configuration loading
//!
//! The only configurable value is the ignore list. It is looked up in this
//! order: an explicit file, `<root>/.quickfile.json`, the user config
//! directory (`quickfile/config.json`), then the built-in defaults.
//!
//! ```json
//! { "ignore": { "coverage": "Reports" }, "extend_defaults": true }
//! ```

use quickfile_scanner::IgnoreList;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name of the per-workspace config file
pub const WORKSPACE_CONFIG_FILE: &str = ".quickfile.json";

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("I/O error for {path}: {message}")]
    IoError { path: PathBuf, message: String },

    /// JSON parse error
    #[error("JSON parse error in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Empty or whitespace-only ignore pattern
    #[error("Invalid ignore pattern in {path}: {pattern:?}")]
    InvalidPattern { path: PathBuf, pattern: String },
}

impl ConfigError {
    /// Get the error code for CLI responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError { .. } => "IO_ERROR",
            Self::JsonParseError { .. } => "PARSE_ERROR",
            Self::InvalidPattern { .. } => "VALIDATION_ERROR",
        }
    }
}

/// On-disk configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    ignore: IgnoreList,
    #[serde(default = "default_extend")]
    extend_defaults: bool,
}

fn default_extend() -> bool {
    true
}

/// Effective settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub ignore: IgnoreList,
    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore: IgnoreList::defaults(),
            source: None,
        }
    }
}

impl Settings {
    /// Load settings for the workspace at `root`
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed,
    /// or if `explicit` is given and missing.
    pub fn load(root: &Path, explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates = std::iter::once(root.join(WORKSPACE_CONFIG_FILE))
            .chain(dirs::config_dir().map(|dir| dir.join("quickfile").join("config.json")));

        for candidate in candidates {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load settings from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut settings = Self::parse(path, &content)?;
        settings.source = Some(path.to_path_buf());
        debug!(path = %path.display(), patterns = settings.ignore.len(), "loaded config");
        Ok(settings)
    }

    fn parse(path: &Path, content: &str) -> ConfigResult<Self> {
        let file: ConfigFile =
            serde_json::from_str(content).map_err(|e| ConfigError::JsonParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if let Some((pattern, _)) = file.ignore.iter().find(|(p, _)| p.trim().is_empty()) {
            return Err(ConfigError::InvalidPattern {
                path: path.to_path_buf(),
                pattern: pattern.to_string(),
            });
        }

        let ignore = if file.extend_defaults {
            let mut ignore = IgnoreList::defaults();
            ignore.extend(file.ignore);
            ignore
        } else {
            file.ignore
        };

        Ok(Self {
            ignore,
            source: None,
        })
    }
}
