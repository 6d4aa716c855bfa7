//! Configuration manager for loading, saving, and managing app configuration

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::AppConfig;

/// Shared configuration manager type
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Deserialization error: {0}")]
    Deserialize(#[from] ron::error::SpannedError),
}

/// Configuration manager handles loading, saving, and accessing app configuration
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
    dirty: bool,
}

impl ConfigManager {
    /// Create a new configuration manager, loading from disk if available
    pub fn new() -> Self {
        Self::with_path(Self::config_dir().join("config.ron"))
    }

    /// Manager bound to an explicit file; missing or malformed files yield defaults
    pub fn with_path(config_path: PathBuf) -> Self {
        let config = match Self::load_from_path(&config_path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", config_path);
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file found, using defaults");
                AppConfig::new()
            }
            Err(e) => {
                tracing::warn!("Failed to load config file: {}", e);
                AppConfig::new()
            }
        };

        Self {
            config,
            config_path,
            dirty: false,
        }
    }

    /// Get the OS-standard configuration directory
    fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tactics-board")
    }

    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    /// Get a reference to the current configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration (marks as dirty)
    pub fn config_mut(&mut self) -> &mut AppConfig {
        self.dirty = true;
        &mut self.config
    }

    /// Check if the configuration has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save the configuration to disk
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())?;
        std::fs::write(&self.config_path, content)?;

        tracing::info!("Saved config to {:?}", self.config_path);
        self.dirty = false;
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset_to_defaults(&mut self) {
        self.config = AppConfig::new();
        self.dirty = true;
    }

    /// Get the config file path (for display purposes)
    pub fn config_file_path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new shared configuration manager
pub fn create_shared_config() -> SharedConfig {
    Arc::new(RwLock::new(ConfigManager::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiTheme;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tactics-board-test-{}-{}", std::process::id(), name))
            .join("config.ron")
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let manager = ConfigManager::with_path(scratch_path("missing"));
        assert_eq!(manager.config(), &AppConfig::new());
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_save_and_reload() {
        let path = scratch_path("roundtrip");
        let mut manager = ConfigManager::with_path(path.clone());
        manager.config_mut().ui.theme = UiTheme::Light;
        manager.config_mut().editor.player_radius = 1.1;
        assert!(manager.is_dirty());
        manager.save().unwrap();
        assert!(!manager.is_dirty());

        let reloaded = ConfigManager::with_path(path.clone());
        assert_eq!(reloaded.config().ui.theme, UiTheme::Light);
        assert_eq!(reloaded.config().editor.player_radius, 1.1);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = scratch_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "(version: \"nope\"").unwrap();

        assert!(matches!(
            ConfigManager::load_from_path(&path),
            Err(ConfigError::Deserialize(_))
        ));
        let manager = ConfigManager::with_path(path.clone());
        assert_eq!(manager.config(), &AppConfig::new());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_reset_marks_dirty() {
        let mut manager = ConfigManager::with_path(scratch_path("reset"));
        manager.reset_to_defaults();
        assert!(manager.is_dirty());
    }
}
