use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;

// @module: Subtitle format detection and normalization

/// Header every WebVTT document starts with
pub const WEBVTT_HEADER: &str = "WEBVTT";

/// MIME type attached to normalized subtitle blobs
pub const WEBVTT_MIME_TYPE: &str = "text/vtt;charset=utf-8";

/// Label used when a path has no usable final segment
pub const DEFAULT_DISPLAY_NAME: &str = "Subtitles";

/// Extensions rejected outright when content gives no better signal
pub const DEFAULT_UNSUPPORTED_EXTENSIONS: [&str; 3] = ["ass", "ssa", "sub"];

const BYTE_ORDER_MARK: char = '\u{FEFF}';

// @const: SRT cue start (sequence number line followed by a timing line)
static SRT_CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\d+\s*\n\d{2}:\d{2}:\d{2}[,.]\d{3}\s*-->\s*\d{2}:\d{2}:\d{2}[,.]\d{3}")
        .expect("SRT cue pattern is valid")
});

// @const: SRT timestamp with comma millisecond separator
static SRT_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2}),(\d{3})").expect("SRT timestamp pattern is valid")
});

// @const: MicroDVD frame range at the start of the file
static MICRODVD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{\d+\}\{\d+\}").expect("MicroDVD pattern is valid")
});

/// A subtitle format that is recognized but cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedKind {
    /// Advanced SubStation Alpha / SubStation Alpha scripts
    AssSsa,
    /// Frame-indexed MicroDVD
    MicroDvd,
    /// Rejected by extension only (stored lowercase)
    Extension(String),
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssSsa => write!(f, "ASS/SSA"),
            Self::MicroDvd => write!(f, "MicroDVD"),
            Self::Extension(ext) => write!(f, "{}", ext.to_uppercase()),
        }
    }
}

/// Result of sniffing a subtitle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectedFormat {
    WebVtt,
    Srt,
    UnsupportedKnown(UnsupportedKind),
    Unknown,
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WebVtt => write!(f, "WebVTT"),
            Self::Srt => write!(f, "SRT"),
            Self::UnsupportedKnown(kind) => write!(f, "unsupported ({})", kind),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Strip a leading byte-order mark and fold `\r\n` and lone `\r` into `\n`
pub fn normalize_content(raw: &str) -> String {
    let without_bom = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
    without_bom.replace("\r\n", "\n").replace('\r', "\n")
}

/// Detect the subtitle format of already normalized content.
///
/// Content is inspected first so that misnamed files are still handled; the
/// extension only decides when the body is inconclusive. `extension` is
/// expected lowercase and without the leading dot.
pub fn detect_format(content: &str, extension: &str) -> DetectedFormat {
    detect_format_with(content, extension, &DEFAULT_UNSUPPORTED_EXTENSIONS)
}

/// Same as [`detect_format`] with a caller-supplied list of rejected extensions
pub fn detect_format_with<S: AsRef<str>>(
    content: &str,
    extension: &str,
    unsupported_extensions: &[S],
) -> DetectedFormat {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

    if content.starts_with(WEBVTT_HEADER) {
        return DetectedFormat::WebVtt;
    }

    if SRT_CUE_REGEX.is_match(content) {
        return DetectedFormat::Srt;
    }

    if content.contains("[Script Info]") || content.contains("Dialogue:") {
        return DetectedFormat::UnsupportedKnown(UnsupportedKind::AssSsa);
    }

    if MICRODVD_REGEX.is_match(content) {
        return DetectedFormat::UnsupportedKnown(UnsupportedKind::MicroDvd);
    }

    match extension {
        "vtt" => DetectedFormat::WebVtt,
        "srt" => DetectedFormat::Srt,
        ext if unsupported_extensions.iter().any(|u| u.as_ref() == ext) => {
            DetectedFormat::UnsupportedKnown(UnsupportedKind::Extension(ext.to_string()))
        }
        _ => DetectedFormat::Unknown,
    }
}

/// Convert SRT text to WebVTT.
///
/// Never fails: input without any recognizable cue still gets the header and
/// only the timestamp separators are rewritten.
pub fn convert_srt_to_vtt(srt: &str) -> String {
    let clean = normalize_content(srt);
    let body = SRT_TIMESTAMP_REGEX.replace_all(&clean, "${1}.${2}");

    let mut vtt = String::with_capacity(WEBVTT_HEADER.len() + 2 + body.len());
    vtt.push_str(WEBVTT_HEADER);
    vtt.push_str("\n\n");
    vtt.push_str(&body);
    vtt
}

/// Final path segment, splitting on both `/` and `\`, or the fallback label
pub fn display_name_with(path: &str, fallback: &str) -> String {
    match path.rsplit(['/', '\\']).next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => fallback.to_string(),
    }
}

/// [`display_name_with`] using [`DEFAULT_DISPLAY_NAME`]
pub fn display_name(path: &str) -> String {
    display_name_with(path, DEFAULT_DISPLAY_NAME)
}

/// Lowercase extension of the final path segment, empty when there is none
pub fn file_extension(path: &str) -> String {
    let segment = path.rsplit(['/', '\\']).next().unwrap_or_default();
    match segment.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}
