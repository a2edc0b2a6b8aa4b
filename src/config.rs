// src/config.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::trace;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_url: String,
}

fn default_db_path() -> String {
    let db_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/favlink");

    db_dir
        .join("favlink.db")
        .to_str()
        .unwrap_or("favlink.db")
        .to_string()
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config/favlink/config.toml"))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_url: default_db_path(),
        }
    }
}

/// Load settings: defaults, then the config file (explicit `--config` path or
/// `~/.config/favlink/config.toml`), then the `FAVLINK_DB_URL` environment
/// variable. `~` in the configured database path is expanded.
pub fn load_settings(config_path: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = Settings::default();

    let candidate = config_path
        .map(Path::to_path_buf)
        .or_else(default_config_path);

    if let Some(path) = candidate {
        if path.exists() {
            trace!("Loading config from: {:?}", path);
            let config_text = std::fs::read_to_string(&path)?;
            let file_settings: Settings = toml::from_str(&config_text).map_err(|e| {
                DomainError::InvalidInput(format!("invalid config file {:?}: {}", path, e))
            })?;
            settings.db_url = file_settings.db_url;
        } else if config_path.is_some() {
            return Err(DomainError::InvalidInput(format!(
                "config file not found: {:?}",
                path
            )));
        }
    }

    if let Ok(db_url) = std::env::var("FAVLINK_DB_URL") {
        trace!("Using FAVLINK_DB_URL from environment: {}", db_url);
        settings.db_url = db_url;
    }

    settings.db_url = shellexpand::tilde(&settings.db_url).into_owned();

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    toml::to_string_pretty(&Settings::default())
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}
