/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use glucose::app_config::{Config, LogLevel};
use glucose::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.subtitles.fallback_display_name, "Subtitles");
    assert_eq!(config.subtitles.unsupported_extensions, vec!["ass", "ssa", "sub"]);
    assert_eq!(config.player.subtitle_language, "auto");
    assert_eq!(config.player.audio_device, "default");
    assert_eq!(config.player.volume, 1.0);
    assert!(!config.player.muted);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.subtitles.fallback_display_name = "   ".to_string();
    assert_eq!(config.validate(), Err(ConfigError::EmptyFallbackName));
    config.subtitles.fallback_display_name = "Subtitles".to_string();

    for bad in ["", ".ass", "srt", "vtt", "ASS"] {
        config.subtitles.unsupported_extensions = vec![bad.to_string()];
        assert_eq!(config.validate(), Err(ConfigError::InvalidExtension(bad.to_string())));
    }
    config.subtitles.unsupported_extensions = vec!["smi".to_string()];
    assert!(config.validate().is_ok());

    config.player.volume = 1.5;
    assert_eq!(config.validate(), Err(ConfigError::VolumeOutOfRange(1.5)));
}

/// Partial JSON fills missing sections with defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldApplyDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{ "log_level": "debug", "subtitles": { "unsupported_extensions": ["smi"] } }"#)?;

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.subtitles.fallback_display_name, "Subtitles");
    assert_eq!(config.subtitles.unsupported_extensions, vec!["smi"]);
    assert_eq!(config.player.volume, 1.0);
    Ok(())
}

/// Missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded, config);
    Ok(())
}

/// Existing config file is loaded as-is
#[test]
fn test_load_or_create_withExistingFile_shouldLoadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{ "log_level": "trace" }"#)?;

    let config = Config::load_or_create(&path)?;
    assert_eq!(config.log_level, LogLevel::Trace);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Trace);
    Ok(())
}

/// Malformed config file is an error, not silently replaced
#[test]
fn test_load_or_create_withMalformedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let err = Config::load_or_create(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}
