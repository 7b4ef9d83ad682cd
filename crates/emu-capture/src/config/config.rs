//! Configuration management for emu-capture.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, validation, output file numbering and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{MAX_FILE_INDEX, RecordingConfig, SignalConfig, SoundConfig, default_file_prefix},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use emu_capture_core::InterleavePolicy;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output location and session settings.
    pub recording: RecordingConfig,
    /// Sound file format.
    #[serde(default)]
    pub sound: SoundConfig,
    /// Test signal settings.
    #[serde(default)]
    pub signal: SignalConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            Self::create_default()
        }
    }

    /// Load configuration from a specific file.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::parse(&contents)?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Parse configuration from TOML text.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Reject settings the encoder or signal generator cannot work with.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        let reason = if self.sound.sample_rate == 0 {
            Some("sample_rate must be positive".to_string())
        } else if self.sound.channels == 0 {
            Some("channels must be positive".to_string())
        } else if self.signal.block_frames == 0 {
            Some("block_frames must be positive".to_string())
        } else if !self.signal.duration_secs.is_finite() || self.signal.duration_secs < 0.0 {
            Some(format!(
                "duration_secs must be a non-negative number, got {}",
                self.signal.duration_secs
            ))
        } else if !(self.signal.frequency_hz > 0.0
            && self.signal.frequency_hz < f64::from(self.sound.sample_rate) / 2.0)
        {
            Some(format!(
                "frequency_hz must be between 0 and {} Hz, got {}",
                self.sound.sample_rate / 2,
                self.signal.frequency_hz
            ))
        } else if self.recording.file_prefix.contains(['/', '\\']) {
            Some(format!(
                "file_prefix must not contain path separators: {:?}",
                self.recording.file_prefix
            ))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(AppError::ConfigError {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    /// First unused `<prefix>NNN.wav` in the output directory.
    ///
    /// Creates the output directory if it does not exist yet.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn next_output_path(&self) -> AppResult<PathBuf> {
        let dir = &self.recording.output_dir;

        if !dir.exists() {
            fs::create_dir_all(dir)?;
            debug!(output_dir = ?dir, "Created output directory");
        }

        (0..=MAX_FILE_INDEX)
            .map(|index| dir.join(format!("{}{:03}.wav", self.recording.file_prefix, index)))
            .find(|candidate| !candidate.exists())
            .ok_or_else(|| AppError::ConfigError {
                reason: format!(
                    "All {} output file names are taken in {:?}",
                    MAX_FILE_INDEX + 1,
                    dir
                ),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Save configuration to the default location.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration using atomic write pattern.
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

    /// Default configuration recording into `output_dir`.
    pub fn with_output_dir(output_dir: PathBuf) -> Self {
        Self {
            recording: RecordingConfig {
                output_dir,
                file_prefix: default_file_prefix(),
                interleave: InterleavePolicy::default(),
            },
            sound: SoundConfig::default(),
            signal: SignalConfig::default(),
        }
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("org", "emu-capture", "Emu-Capture").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default() -> AppResult<Self> {
        let proj_dirs = Self::project_dirs()?;
        let output_dir = proj_dirs.data_dir().join("recordings");

        let config = Self::with_output_dir(output_dir);
        config.save()?;

        info!(
            output_dir = ?config.recording.output_dir,
            "Default config created"
        );

        Ok(config)
    }
}
