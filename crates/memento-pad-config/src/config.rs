/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use memento_pad_mod_history::HistoryConfig;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MEMENTO_PAD_CONFIG";

const CONFIG_FILE_NAME: &str = "memento-pad.json";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_PROMPT: &str = "> ";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Content the document starts with.
    pub initial_content: String,
    pub history: HistoryConfig,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Prompt printed before each REPL command.
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_content: String::new(),
            history: HistoryConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `MEMENTO_PAD_CONFIG` environment variable
    /// 2. `memento-pad/memento-pad.json` in the platform config directory
    /// 3. `memento-pad.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|d| d.join("memento-pad").join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Resets blank fields to their defaults.
    pub fn sanitize(&mut self) {
        if self.log_filter.trim().is_empty() {
            self.log_filter = DEFAULT_LOG_FILTER.to_string();
        }
        if self.prompt.is_empty() {
            self.prompt = DEFAULT_PROMPT.to_string();
        }
    }
}
