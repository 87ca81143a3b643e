//! Configuration module for storefront
//!
//! Manages host configuration: filter panel behaviour, label tables, the
//! default catalog file and upload limits.
//! Configuration is stored in the user's config directory.

use crate::filters::{ApplyMode, LabelLookup};
use crate::profile::{AvatarFile, DEFAULT_MAX_AVATAR_BYTES, ProfileError, validate_avatar_upload};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Whether panel edits are applied immediately or on "Apply"
    #[serde(default)]
    pub apply_mode: ApplyMode,

    /// Catalog file used when none is given on the command line
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Extra or replacement chip labels, layered over the built-in tables
    #[serde(default = "LabelLookup::empty")]
    pub labels: LabelLookup,

    /// Largest accepted avatar upload in bytes
    #[serde(default = "default_max_avatar_bytes")]
    pub max_avatar_bytes: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

const fn default_max_avatar_bytes() -> u64 {
    DEFAULT_MAX_AVATAR_BYTES
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            apply_mode: ApplyMode::default(),
            catalog: None,
            labels: LabelLookup::empty(),
            max_avatar_bytes: DEFAULT_MAX_AVATAR_BYTES,
            quiet: false,
        }
    }
}

impl StorefrontConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("storefront").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check an avatar against the configured upload limit
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidUpload` if the file is not an image or is
    /// larger than `max_avatar_bytes`.
    pub fn check_avatar(&self, file: &AvatarFile) -> Result<(), ProfileError> {
        validate_avatar_upload(&file.content_type, file.size(), self.max_avatar_bytes)
    }

    /// Built-in labels with configured overrides applied
    #[must_use]
    pub fn effective_labels(&self) -> LabelLookup {
        let mut labels = LabelLookup::default();
        labels.extend(&self.labels);
        labels
    }
}
