use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::{DEFAULT_DISPLAY_NAME, DEFAULT_UNSUPPORTED_EXTENSIONS};

/// Application configuration module
/// This module handles loading, validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Subtitle ingestion settings
    #[serde(default)]
    pub subtitles: SubtitleConfig,

    /// Initial values for the player settings store
    #[serde(default)]
    pub player: PlayerDefaults,
}

/// Configuration for subtitle ingestion
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubtitleConfig {
    /// Label shown when a subtitle path has no usable file name
    #[serde(default = "default_fallback_display_name")]
    pub fallback_display_name: String,

    /// Extensions rejected when the file body is inconclusive
    #[serde(default = "default_unsupported_extensions")]
    pub unsupported_extensions: Vec<String>,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            fallback_display_name: default_fallback_display_name(),
            unsupported_extensions: default_unsupported_extensions(),
        }
    }
}

/// Player settings used before the user changes anything
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerDefaults {
    #[serde(default = "default_subtitle_language")]
    pub subtitle_language: String,

    #[serde(default = "default_audio_device")]
    pub audio_device: String,

    /// Volume between 0.0 and 1.0
    #[serde(default = "default_volume")]
    pub volume: f64,

    #[serde(default)]
    pub muted: bool,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            subtitle_language: default_subtitle_language(),
            audio_device: default_audio_device(),
            volume: default_volume(),
            muted: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_fallback_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

fn default_unsupported_extensions() -> Vec<String> {
    DEFAULT_UNSUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_subtitle_language() -> String {
    "auto".to_string()
}

fn default_audio_device() -> String {
    "default".to_string()
}

fn default_volume() -> f64 {
    1.0
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subtitles.fallback_display_name.trim().is_empty() {
            return Err(ConfigError::EmptyFallbackName);
        }

        for ext in &self.subtitles.unsupported_extensions {
            let invalid = ext.is_empty()
                || ext.contains('.')
                || ext.chars().any(|c| c.is_uppercase())
                || ext == "srt"
                || ext == "vtt";
            if invalid {
                return Err(ConfigError::InvalidExtension(ext.clone()));
            }
        }

        if !(0.0..=1.0).contains(&self.player.volume) {
            return Err(ConfigError::VolumeOutOfRange(self.player.volume));
        }

        Ok(())
    }

    /// Load configuration from a JSON file, writing the defaults there if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if FileManager::file_exists(path) {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        FileManager::write_to_file(path, &config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            subtitles: SubtitleConfig::default(),
            player: PlayerDefaults::default(),
        }
    }
}
