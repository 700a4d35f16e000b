/*!
 * # Glucose - video player core
 *
 * State and utility layer behind the Glucose desktop video player.
 *
 * ## Features
 *
 * - Load subtitle files for playback:
 *   - Format detection by content first, extension second
 *   - SRT to WebVTT conversion
 *   - BOM and line ending normalization
 *   - Blob handles for the playback surface
 * - Observable player settings, update progress and watch progress state
 * - Playback time formatting
 * - Application version resolution
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: Format detection and SRT conversion
 * - `subtitle_loader`: Subtitle ingestion and track ownership
 * - `blob_store`: In-memory blob registry
 * - `file_utils`: Text reading capability and file helpers
 * - `app_config`: Configuration management
 * - `stores`: Observable application state
 * - `time_format`: Time display helpers
 * - `version`: Application version
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod blob_store;
pub mod errors;
pub mod file_utils;
pub mod stores;
pub mod subtitle_loader;
pub mod subtitle_processor;
pub mod time_format;
pub mod version;

// Re-export main types for easier usage
pub use app_config::Config;
pub use blob_store::{BlobStore, BlobUrl};
pub use errors::{AppError, ConfigError, SubtitleError};
pub use file_utils::{FsTextReader, TextReader};
pub use subtitle_loader::{IngestResult, SubtitleLoader, SubtitleSlot, SubtitleTrack};
pub use subtitle_processor::{DetectedFormat, UnsupportedKind};
