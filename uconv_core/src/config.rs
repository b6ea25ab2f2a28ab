//! Configuration file support for uconv.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/uconv/config.toml`.

use crate::state::DEFAULT_INITIAL_VALUE;
use crate::{Error, Registry, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Startup defaults for the front ends
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Category selected at startup
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Text pre-filled in the value field
    #[serde(default = "default_initial_value")]
    pub initial_value: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            initial_value: default_initial_value(),
        }
    }
}

// Default value functions
fn default_category() -> String {
    "Weight".into()
}

fn default_initial_value() -> String {
    DEFAULT_INITIAL_VALUE.into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => dirs::home_dir()
                .map(|home| home.join(".config"))
                .ok_or_else(|| Error::Config("Cannot locate a config directory".into()))?,
        };
        Ok(base.join("uconv").join("config.toml"))
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Category to select at startup.
    ///
    /// Falls back to the registry's first category when the configured one
    /// does not exist.
    pub fn startup_category<'r>(&self, registry: &'r Registry) -> Option<&'r str> {
        match registry.category(&self.ui.default_category) {
            Ok(cat) => Some(cat.name),
            Err(_) => {
                let fallback = registry.list_categories().first().copied();
                tracing::warn!(
                    "Configured category {:?} is not in the catalog, using {:?}",
                    self.ui.default_category,
                    fallback
                );
                fallback
            }
        }
    }
}
