use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ProcessingParameters, TargetGeometry};
use crate::error::ConfigError;

/// Application configuration loaded from settings.yaml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub directories: DirectoryConfig,

    /// Panel geometry every image is fitted to
    #[serde(default)]
    pub display: TargetGeometry,

    /// Dither mode and enhancement multipliers
    #[serde(default)]
    pub processing: ProcessingParameters,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Source images waiting to be shown
    pub queue: PathBuf,

    /// Cache of processed 1-bit artifacts
    pub processed: PathBuf,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            queue: PathBuf::from("images/queue"),
            processed: PathBuf::from("images/processed"),
        }
    }
}

impl AppConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        tracing::info!(
            path = %path.display(),
            width = config.display.width,
            height = config.display.height,
            dither_mode = %config.processing.dither_mode,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Like [`AppConfig::load`], but falls back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config
            .display
            .validate()
            .and_then(|_| config.processing.validate())
            .map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config)
    }
}
