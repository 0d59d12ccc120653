use crate::history::DEFAULT_CAPACITY;
use crate::history::commit::DEFAULT_MIN_COMMIT_LEN;
use crate::types::Page;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "REVERSO_CONFIG";

/// Application settings read from `config.toml`
///
/// Every key is optional; missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub start_page: Page,
    pub history_capacity: usize,
    pub debounce_ms: u64,
    pub min_commit_len: usize,
    pub counter_max: usize,
    pub counter_warning: usize,
    pub copy_feedback_ms: u64,
    pub basic_fade_ms: u64,
    pub live_fade_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_page: Page::Live,
            history_capacity: DEFAULT_CAPACITY,
            debounce_ms: 1500,
            min_commit_len: DEFAULT_MIN_COMMIT_LEN,
            counter_max: 90,
            counter_warning: 80,
            copy_feedback_ms: 2000,
            basic_fade_ms: 100,
            live_fade_ms: 50,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "history_capacity",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.counter_warning > self.counter_max {
            return Err(ConfigError::InvalidValue {
                key: "counter_warning",
                reason: format!("must not exceed counter_max ({})", self.counter_max),
            });
        }

        Ok(())
    }

    /// Load the config at `path`. A missing file is not an error.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        if !fs::try_exists(path).await? {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).await?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config, logging and falling back to defaults on any error
    pub async fn load_or_default(path: &Path) -> Self {
        match Self::load(path).await {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn fade_delay(&self, page: Page) -> Duration {
        match page {
            Page::Basic => Duration::from_millis(self.basic_fade_ms),
            Page::Live => Duration::from_millis(self.live_fade_ms),
        }
    }
}

/// Where the config file lives, honouring `REVERSO_CONFIG`
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reverso")
        .join("config.toml")
}
