//! Configuration loading and validation.
//!
//! The user config lives at `<config dir>/lmcgtfy/config.toml`. Missing
//! fields fall back to defaults; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use lmcgtfy_types::AppConfig;
use thiserror::Error;
use tracing::debug;

use crate::timeline::destination_url;

/// Errors that can occur while loading, saving or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("invalid redirect base URL {url:?}: {source}")]
    InvalidRedirect { url: String, source: url::ParseError },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Largest accepted typing jitter (a delay spread of ten times the base).
pub const MAX_JITTER: f64 = 10.0;

/// Default location of the user config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lmcgtfy").join("config.toml"))
}

/// Load and validate a config file.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&config)?;
    debug!(?path, "config loaded");
    Ok(config)
}

/// Load `path` if it exists, otherwise return defaults.
pub fn load_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    if path.exists() {
        load_file(path)
    } else {
        debug!(?path, "no config file, using defaults");
        Ok(AppConfig::default())
    }
}

/// Save a config to a TOML file, creating parent directories.
pub fn save_file(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Reject settings the playback cannot run with.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let typing = &config.playback.typing;

    if typing.base_speed_ms == 0 {
        return Err(ConfigError::InvalidValue {
            field: "playback.typing.base_speed_ms",
            reason: "must be greater than zero".to_string(),
        });
    }
    if !(0.0..=MAX_JITTER).contains(&typing.jitter) {
        return Err(ConfigError::InvalidValue {
            field: "playback.typing.jitter",
            reason: format!("must be between 0 and {MAX_JITTER}, got {}", typing.jitter),
        });
    }

    destination_url(&config.redirect, "")?;
    Ok(())
}
