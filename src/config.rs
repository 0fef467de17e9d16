//! Configuration module for vitrine
//!
//! Manages application configuration including the default catalog path.
//! Configuration is stored in the user's config directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct VitrineConfig {
    /// Catalog file used when --catalog is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Override of the preview character cap
    #[serde(default)]
    pub preview_char_cap: Option<usize>,
}

impl VitrineConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        let vitrine_config_dir = config_dir.join("vitrine");
        Ok(vitrine_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Effective preview character cap
    #[must_use]
    pub fn preview_char_cap(&self) -> usize {
        self.preview_char_cap
            .unwrap_or(crate::preview::PREVIEW_CHAR_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_catalog() {
        let config = VitrineConfig::default();
        assert!(config.catalog.is_none());
        assert!(!config.quiet);
        assert_eq!(config.preview_char_cap(), crate::preview::PREVIEW_CHAR_CAP);
    }

    #[test]
    fn test_preview_cap_override() {
        let config = VitrineConfig {
            preview_char_cap: Some(500),
            ..Default::default()
        };
        assert_eq!(config.preview_char_cap(), 500);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = VitrineConfig {
            catalog: Some(PathBuf::from("/srv/catalog.json")),
            quiet: true,
            preview_char_cap: Some(1000),
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: VitrineConfig = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.catalog, config.catalog);
        assert!(parsed.quiet);
        assert_eq!(parsed.preview_char_cap, Some(1000));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: VitrineConfig = toml::from_str("quiet = true").unwrap();
        assert!(parsed.quiet);
        assert!(parsed.catalog.is_none());
        assert!(parsed.preview_char_cap.is_none());
    }
}
