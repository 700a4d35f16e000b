/*!
 * Error types for the glucose application.
 *
 * This module contains custom error types for the subtitle pipeline and
 * configuration handling, using the thiserror crate for ergonomic error definitions.
 *
 * Every `SubtitleError` renders as a message meant to be shown to the end user
 * as-is.
 */

use thiserror::Error;

use crate::subtitle_processor::UnsupportedKind;

/// Errors that can occur while ingesting a subtitle file
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The subtitle file could not be read (missing, unreadable, permission denied)
    #[error("Failed to load subtitle file: {source}")]
    Read {
        /// Path that was requested
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A known-but-unsupported format recognized from the file body
    #[error(
        "This appears to be {} {kind} subtitle file, which is not yet supported.\n\nPlease convert to SRT or VTT format.",
        article(.kind)
    )]
    UnsupportedContent {
        /// Format recognized from the content
        kind: UnsupportedKind,
    },

    /// A known-but-unsupported format recognized only from the file extension
    #[error(
        "Sorry, {kind} subtitle format is not yet supported.\n\nPlease convert your subtitles to SRT or VTT format.\n\nSupported formats: SRT, VTT"
    )]
    UnsupportedExtension {
        /// Format named by the extension
        kind: UnsupportedKind,
    },

    /// Neither content nor extension matched a known format
    #[error("Unsupported subtitle file format.\n\nSupported formats: SRT, VTT")]
    UnknownFormat,
}

impl SubtitleError {
    /// Whether the failure came from the read step rather than format handling
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. })
    }
}

fn article(kind: &UnsupportedKind) -> &'static str {
    match kind {
        UnsupportedKind::AssSsa => "an",
        _ => "a",
    }
}

/// Errors raised while validating configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// The fallback display name must never be empty
    #[error("Fallback display name must not be empty")]
    EmptyFallbackName,

    /// An unsupported extension entry is malformed or shadows a supported format
    #[error("Invalid unsupported extension entry: '{0}'")]
    InvalidExtension(String),

    /// Default volume outside of 0.0..=1.0
    #[error("Default volume must be between 0.0 and 1.0, got {0}")]
    VolumeOutOfRange(f64),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle ingestion
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
