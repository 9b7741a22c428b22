//! Runtime configuration for the search client.
//!
//! Read from `./pagesearch.ron` (or the file named by `PAGESEARCH_CONFIG`).
//! `PAGESEARCH_API_BASE` overrides the API base from the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use pagesearch_engine::{EngineConfig, FetchSettings};
use search_logging::search_info;
use serde::{Deserialize, Serialize};

use super::logging::{LogDestination, LogSettings, DEFAULT_LOG_FILE};

const CONFIG_FILENAME: &str = "pagesearch.ron";
const CONFIG_PATH_ENV: &str = "PAGESEARCH_CONFIG";
const API_BASE_ENV: &str = "PAGESEARCH_API_BASE";
const DEFAULT_API_BASE: &str = "http://localhost/wp-json/wp/v2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base of the WordPress REST API; `/pages` is appended per request.
    pub api_base: String,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            max_bytes: FetchSettings::default().max_bytes,
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            api_base: self.api_base.clone(),
            settings: FetchSettings {
                connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
                request_timeout: self.request_timeout_secs.map(Duration::from_secs),
                max_bytes: self.max_bytes,
            },
        }
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            destination: self.log_destination,
            level: self.log_level.clone(),
            file: self.log_file.clone(),
        }
    }

    fn apply_api_base_override(&mut self, value: Option<String>) {
        if let Some(base) = value.map(|v| v.trim().to_string()) {
            if !base.is_empty() {
                self.api_base = base;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("config file {0:?} does not exist")]
    Missing(PathBuf),
}

/// Loads the configuration from the default locations and the environment.
pub fn load() -> Result<AppConfig, ConfigError> {
    let explicit = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let path = explicit
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    let mut config = match load_file(&path)? {
        Some(config) => {
            search_info!("Loaded config from {:?}", path);
            config
        }
        None if explicit.is_some() => return Err(ConfigError::Missing(path)),
        None => AppConfig::default(),
    };
    config.apply_api_base_override(env::var(API_BASE_ENV).ok());
    Ok(config)
}

/// Reads one RON config file. A missing file is `Ok(None)`.
pub fn load_file(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}
