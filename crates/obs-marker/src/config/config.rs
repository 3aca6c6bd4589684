//! Configuration management for obs-marker.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{ExportConfig, HostConfig, HotkeyConfig, MARKER_LOG_FILE, OutputConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::{BaseDirs, ProjectDirs};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Marker log destination.
    #[serde(default)]
    pub output: OutputConfig,
    /// Recording host configuration location.
    #[serde(default)]
    pub host: HostConfig,
    /// Persisted hotkey binding.
    #[serde(default)]
    pub hotkey: HotkeyConfig,
    /// Editor export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from `config_path`, writing defaults if missing.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!(config_path = ?config_path, "No config found, creating default");
            let config = Config::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Marker log path: the configured override, or `timestamps.jsonl` in
    /// the config directory.
    #[track_caller]
    pub fn marker_log_path(&self) -> AppResult<PathBuf> {
        match &self.output.path {
            Some(path) => Ok(path.clone()),
            None => Self::default_marker_log_path(),
        }
    }

    /// `timestamps.jsonl` in the (created) config directory.
    #[track_caller]
    fn default_marker_log_path() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join(MARKER_LOG_FILE))
    }

    /// OBS config directory: the configured override, or `obs-studio` under
    /// the OS config directory.
    #[track_caller]
    pub fn obs_config_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.host.obs_config_dir {
            return Ok(dir.clone());
        }

        let base = BaseDirs::new().ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get home directory".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(base.config_dir().join("obs-studio"))
    }

    /// Path of `config.toml`, creating its directory if needed.
    #[track_caller]
    pub fn config_path() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory for rolling log files, created if needed.
    #[track_caller]
    pub fn log_dir() -> AppResult<PathBuf> {
        let log_dir = Self::project_dirs()?.data_dir().join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    #[track_caller]
    fn config_dir() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.to_path_buf())
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "obs-marker", "OBS-Marker").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
