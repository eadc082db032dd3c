//! Client configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::admin::TelegramUser;
use crate::error::{Error, Result};

static DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Directory holding the config file and the saved-events file.
pub fn base_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| Error::Config("Could not determine config directory".into()))?
        .join("eventry");
    Ok(dir)
}

/// Configuration at ~/.config/eventry/config.toml
///
/// `init_data` and `user` are the opaque identity payload the hosting
/// platform injects into the mini-app; they are only ever forwarded to the
/// server's admin verification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    pub init_data: Option<String>,
    pub user: Option<TelegramUser>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server_url: default_server_url(),
            init_data: None,
            user: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(base_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Path of the on-device saved-events file.
    pub fn saved_events_path() -> Result<PathBuf> {
        Ok(base_dir()?.join("saved_events.json"))
    }
}
