//! Application configuration.
//!
//! Built from defaults plus `FISHBROWSER_*` environment overrides. Parsing is
//! done against a lookup function so tests never touch the process
//! environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::platform;
use crate::services::title_query::DEFAULT_TITLE_TIMEOUT;
use crate::types::errors::ConfigError;

pub const ENV_DATA_DIR: &str = "FISHBROWSER_DATA_DIR";
pub const ENV_TITLE_TIMEOUT_MS: &str = "FISHBROWSER_TITLE_TIMEOUT_MS";
pub const ENV_USER_AGENT: &str = "FISHBROWSER_USER_AGENT";

/// Desktop user agent applied to the web view so sites serve their desktop
/// layouts.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

pub const APP_NAME: &str = "FishBrowser";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the four JSON slot files and the home page.
    pub data_dir: PathBuf,
    pub title_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: platform::get_data_dir(),
            title_timeout: DEFAULT_TITLE_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from defaults and whatever `lookup` returns for
    /// each override key. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = get(ENV_TITLE_TIMEOUT_MS) {
            let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TITLE_TIMEOUT_MS.to_string(),
                value: raw.clone(),
            })?;
            if millis == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_TITLE_TIMEOUT_MS.to_string(),
                    value: raw,
                });
            }
            config.title_timeout = Duration::from_millis(millis);
        }

        if let Some(agent) = get(ENV_USER_AGENT) {
            config.user_agent = agent;
        }

        Ok(config)
    }

    /// Configuration rooted at `dir`, everything else default.
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }
}
