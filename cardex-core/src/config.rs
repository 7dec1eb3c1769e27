//! Bundle configuration
//!
//! Locates the bundled catalog resource. Settings live in an optional
//! `cardex.yaml` in the platform config directory; a missing file means
//! defaults. Loading never creates files or directories.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory holding bundled resources
pub const DEFAULT_BUNDLE_DIR: &str = "bundle";

/// Logical name of the bundled catalog
pub const DEFAULT_RESOURCE_NAME: &str = "WOT-Scryfall";

/// File extension of the bundled catalog
pub const DEFAULT_RESOURCE_EXTENSION: &str = "json";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "cardex.yaml";

/// Where the bundled catalog lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleConfig {
    /// Directory containing bundled resources
    pub bundle_dir: PathBuf,

    /// Logical resource name, without extension
    pub resource_name: String,

    /// Resource file extension
    pub extension: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            bundle_dir: PathBuf::from(DEFAULT_BUNDLE_DIR),
            resource_name: DEFAULT_RESOURCE_NAME.to_string(),
            extension: DEFAULT_RESOURCE_EXTENSION.to_string(),
        }
    }
}

impl BundleConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(
                "Config file {} not found, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))
    }

    /// Parse configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content).context("Failed to parse bundle config YAML")
    }

    /// Full path of the bundled catalog file
    pub fn resource_path(&self) -> PathBuf {
        let file_name = if self.extension.is_empty() {
            self.resource_name.clone()
        } else {
            format!("{}.{}", self.resource_name, self.extension)
        };
        self.bundle_dir.join(file_name)
    }

    /// Default config file path, if the platform has a config directory
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "cardex", "cardex")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
