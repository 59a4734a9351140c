use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Frontend settings, loadable from TOML. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    /// How often the cursor blinks.
    pub flash_interval_ms: u64,
    /// How long one loop iteration waits for a key.
    pub poll_interval_ms: u64,
    pub show_start_screen: bool,
    pub log_file: PathBuf,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            flash_interval_ms: 500,
            poll_interval_ms: 10,
            show_start_screen: true,
            log_file: PathBuf::from("teeko.log"),
        }
    }
}

impl TermConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: TermConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flash_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "flash_interval_ms must be > 0".into(),
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll_interval_ms must be > 0".into(),
            ));
        }
        if self.poll_interval_ms >= self.flash_interval_ms {
            return Err(ConfigError::Validation(
                "poll_interval_ms must be shorter than flash_interval_ms".into(),
            ));
        }
        Ok(())
    }

    pub fn flash_interval(&self) -> Duration {
        Duration::from_millis(self.flash_interval_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
