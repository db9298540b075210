//! Configuration management for the profile finder CLI.
//!
//! The configuration is stored in TOML format and can be loaded from a
//! specified file path or from the default location in the current directory.
//! Every field has a default, so a missing file is equivalent to an empty one.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use github_client::DEFAULT_API_BASE_URL;
use profile_finder_core::{
    typeahead::{DEFAULT_DEBOUNCE, DEFAULT_MIN_CHARS, DEFAULT_SUGGESTION_LIMIT},
    FileStore, TypeaheadSettings,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the profile finder CLI.
///
/// # Example TOML Configuration
///
/// ```toml
/// [api]
/// base_url = "https://api.github.com"
/// suggestion_limit = 5
///
/// [typeahead]
/// debounce_ms = 300
/// min_chars = 2
///
/// [storage]
/// data_dir = "/home/me/.local/share/github-profile-finder"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub typeahead: TypeaheadConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read, or
    /// contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration file at {:?}; using defaults", path);
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// Parent directories are created if they do not exist and an existing
    /// file is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Builds the typeahead tuning from the configured values.
    pub fn typeahead_settings(&self) -> TypeaheadSettings {
        TypeaheadSettings {
            debounce: Duration::from_millis(self.typeahead.debounce_ms),
            min_chars: self.typeahead.min_chars,
            limit: self.api.suggestion_limit,
        }
    }

    /// Returns the directory holding persisted favorites.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(FileStore::default_root)
    }
}

/// Remote API settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,

    /// Maximum number of login suggestions requested per search.
    #[serde(default = "ApiConfig::default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl ApiConfig {
    fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    fn default_suggestion_limit() -> usize {
        DEFAULT_SUGGESTION_LIMIT
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ApiConfig::default_base_url(),
            suggestion_limit: ApiConfig::default_suggestion_limit(),
        }
    }
}

/// Typeahead timing settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct TypeaheadConfig {
    #[serde(default = "TypeaheadConfig::default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "TypeaheadConfig::default_min_chars")]
    pub min_chars: usize,
}

impl TypeaheadConfig {
    fn default_debounce_ms() -> u64 {
        DEFAULT_DEBOUNCE.as_millis() as u64
    }

    fn default_min_chars() -> usize {
        DEFAULT_MIN_CHARS
    }
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            debounce_ms: TypeaheadConfig::default_debounce_ms(),
            min_chars: TypeaheadConfig::default_min_chars(),
        }
    }
}

/// Where favorites are persisted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./config.toml` in the current directory
/// - Falls back to the current directory if unable to determine the working directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        // Look for config in current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
