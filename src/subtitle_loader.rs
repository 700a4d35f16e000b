/*!
 * Subtitle ingestion.
 *
 * Turns a caller-supplied path into a WebVTT blob the playback surface can
 * attach as a text track. Every failure is folded into a user-facing message;
 * nothing escapes [`SubtitleLoader::ingest`] as an error.
 */

use std::sync::Arc;

use log::{debug, error, info};

use crate::app_config::SubtitleConfig;
use crate::blob_store::{BlobStore, BlobUrl};
use crate::errors::SubtitleError;
use crate::file_utils::TextReader;
use crate::subtitle_processor::{
    self, DetectedFormat, UnsupportedKind, WEBVTT_MIME_TYPE,
};

/// How the canonical content was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Already WebVTT, passed through
    PassedThrough,
    /// Converted from SRT
    ConvertedFromSrt,
}

/// Canonical subtitle text ready to be registered
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSubtitle {
    /// WebVTT text
    pub content: String,
    /// Name shown in the UI, never empty
    pub display_name: String,
    pub normalization: Normalization,
}

/// A loaded subtitle track owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleTrack {
    /// Blob holding the WebVTT text
    pub handle: BlobUrl,
    pub display_name: String,
}

/// Outcome of one ingestion call
#[derive(Debug, Clone, PartialEq)]
pub enum IngestResult {
    Success(SubtitleTrack),
    /// Human-readable reason, ready to show to the user
    Failure(String),
}

impl IngestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn track(&self) -> Option<&SubtitleTrack> {
        match self {
            Self::Success(track) => Some(track),
            Self::Failure(_) => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<SubtitleTrack, String> {
        match self {
            Self::Success(track) => Ok(track),
            Self::Failure(reason) => Err(reason),
        }
    }
}

/// Normalize raw subtitle text read from `path` into WebVTT.
///
/// This is the synchronous core of ingestion: display name, BOM and line
/// ending cleanup, detection, then pass-through or conversion.
pub fn normalize(
    path: &str,
    raw: &str,
    config: &SubtitleConfig,
) -> Result<NormalizedSubtitle, SubtitleError> {
    let display_name =
        subtitle_processor::display_name_with(path, &config.fallback_display_name);
    let content = subtitle_processor::normalize_content(raw);
    let extension = subtitle_processor::file_extension(path);

    let format = subtitle_processor::detect_format_with(
        &content,
        &extension,
        &config.unsupported_extensions,
    );
    debug!("Detected {} for {} (extension '{}')", format, path, extension);

    let (content, normalization) = match format {
        DetectedFormat::WebVtt => (content, Normalization::PassedThrough),
        DetectedFormat::Srt => (
            subtitle_processor::convert_srt_to_vtt(&content),
            Normalization::ConvertedFromSrt,
        ),
        DetectedFormat::UnsupportedKnown(kind @ UnsupportedKind::Extension(_)) => {
            return Err(SubtitleError::UnsupportedExtension { kind });
        }
        DetectedFormat::UnsupportedKnown(kind) => {
            return Err(SubtitleError::UnsupportedContent { kind });
        }
        DetectedFormat::Unknown => return Err(SubtitleError::UnknownFormat),
    };

    Ok(NormalizedSubtitle {
        content,
        display_name,
        normalization,
    })
}

/// Loads subtitle files and registers them as blobs
#[derive(Debug)]
pub struct SubtitleLoader<R: TextReader> {
    reader: R,
    blobs: Arc<BlobStore>,
    config: SubtitleConfig,
}

impl<R: TextReader> SubtitleLoader<R> {
    pub fn new(reader: R, blobs: Arc<BlobStore>) -> Self {
        Self::with_config(reader, blobs, SubtitleConfig::default())
    }

    pub fn with_config(reader: R, blobs: Arc<BlobStore>, config: SubtitleConfig) -> Self {
        Self { reader, blobs, config }
    }

    /// Registry holding the blobs created by this loader
    pub fn blobs(&self) -> &Arc<BlobStore> {
        &self.blobs
    }

    /// Ingest a subtitle file, reporting any failure as a user-facing message
    pub async fn ingest(&self, path: &str) -> IngestResult {
        match self.try_ingest(path).await {
            Ok(track) => IngestResult::Success(track),
            Err(e) => {
                error!("Failed to load subtitle {}: {}", path, e);
                IngestResult::Failure(e.to_string())
            }
        }
    }

    /// Ingest a subtitle file, keeping the typed error
    pub async fn try_ingest(&self, path: &str) -> Result<SubtitleTrack, SubtitleError> {
        debug!("Loading subtitle: {}", path);

        let raw = self
            .reader
            .read_text(path)
            .await
            .map_err(|source| SubtitleError::Read {
                path: path.to_string(),
                source,
            })?;
        debug!("Subtitle content loaded, length: {}", raw.len());

        let normalized = normalize(path, &raw, &self.config)?;
        let handle = self.blobs.create(normalized.content, WEBVTT_MIME_TYPE);
        info!("Loaded subtitle '{}' as {}", normalized.display_name, handle);

        Ok(SubtitleTrack {
            handle,
            display_name: normalized.display_name,
        })
    }

    /// Release the blob behind a track
    pub fn release(&self, track: &SubtitleTrack) -> bool {
        self.blobs.revoke(&track.handle)
    }
}

/// The subtitle currently attached to the player.
///
/// Replacing or clearing the slot revokes the previous track's blob, so
/// repeated loads within one session do not pile up.
#[derive(Debug)]
pub struct SubtitleSlot {
    blobs: Arc<BlobStore>,
    current: Option<SubtitleTrack>,
}

impl SubtitleSlot {
    pub fn new(blobs: Arc<BlobStore>) -> Self {
        Self { blobs, current: None }
    }

    pub fn current(&self) -> Option<&SubtitleTrack> {
        self.current.as_ref()
    }

    /// Attach a new track, revoking whatever was attached before
    pub fn replace(&mut self, track: SubtitleTrack) {
        if let Some(previous) = self.current.replace(track) {
            self.blobs.revoke(&previous.handle);
        }
    }

    /// Detach and revoke the current track
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.blobs.revoke(&previous.handle);
        }
    }
}

impl Drop for SubtitleSlot {
    fn drop(&mut self) {
        self.clear();
    }
}
