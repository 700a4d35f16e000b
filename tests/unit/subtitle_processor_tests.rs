/*!
 * Tests for subtitle format detection and SRT conversion
 */

use glucose::subtitle_processor::{
    convert_srt_to_vtt, detect_format, detect_format_with, display_name, file_extension,
    normalize_content, DetectedFormat, UnsupportedKind, DEFAULT_DISPLAY_NAME,
};

/// WebVTT header wins regardless of the extension
#[test]
fn test_detect_format_withWebVttHeader_shouldIgnoreExtension() {
    let content = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHi";
    for ext in ["vtt", "srt", "ass", "txt", ""] {
        assert_eq!(detect_format(content, ext), DetectedFormat::WebVtt, "extension {}", ext);
    }
}

/// A leading BOM must not hide the header
#[test]
fn test_detect_format_withBomPrefixedWebVtt_shouldBeWebVtt() {
    let content = "\u{FEFF}WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHi";
    assert_eq!(detect_format(content, ""), DetectedFormat::WebVtt);
    assert_eq!(detect_format(&normalize_content(content), ""), DetectedFormat::WebVtt);
}

/// Cue pattern detects SRT even under a misleading extension
#[test]
fn test_detect_format_withSrtCues_shouldBeSrtRegardlessOfExtension() {
    let content = "1\n00:00:20,000 --> 00:00:24,400\nHello";
    assert_eq!(detect_format(content, "srt"), DetectedFormat::Srt);
    assert_eq!(detect_format(content, "txt"), DetectedFormat::Srt);
    assert_eq!(detect_format(content, "ass"), DetectedFormat::Srt);
}

/// Script markers are rejected even with a .vtt extension
#[test]
fn test_detect_format_withAssMarkers_shouldBeUnsupported() {
    let expected = DetectedFormat::UnsupportedKnown(UnsupportedKind::AssSsa);
    assert_eq!(detect_format("[Script Info]\nTitle: x", "vtt"), expected);
    assert_eq!(detect_format("Dialogue: 0,0:00:01.00,0:00:02.00,,Hi", "srt"), expected);
}

/// Frame-indexed content is rejected as MicroDVD
#[test]
fn test_detect_format_withMicroDvd_shouldBeUnsupported() {
    let expected = DetectedFormat::UnsupportedKnown(UnsupportedKind::MicroDvd);
    assert_eq!(detect_format("{0}{100}Hello", "vtt"), expected);
    assert_eq!(detect_format("{0}{100}Hello", "srt"), expected);
}

/// Inconclusive content falls back to the extension
#[test]
fn test_detect_format_withAmbiguousContent_shouldTrustExtension() {
    assert_eq!(detect_format("", "vtt"), DetectedFormat::WebVtt);
    assert_eq!(detect_format("", "srt"), DetectedFormat::Srt);
    assert_eq!(
        detect_format("whatever", "sub"),
        DetectedFormat::UnsupportedKnown(UnsupportedKind::Extension("sub".to_string()))
    );
    assert_eq!(detect_format("whatever", "txt"), DetectedFormat::Unknown);
    assert_eq!(detect_format("whatever", ""), DetectedFormat::Unknown);
}

/// Custom unsupported list replaces the default one
#[test]
fn test_detect_format_with_withCustomList_shouldOnlyRejectListed() {
    let list = vec!["smi".to_string()];
    assert_eq!(
        detect_format_with("x", "smi", &list),
        DetectedFormat::UnsupportedKnown(UnsupportedKind::Extension("smi".to_string()))
    );
    assert_eq!(detect_format_with("x", "ass", &list), DetectedFormat::Unknown);
}

/// Conversion adds the header and rewrites millisecond separators only
#[test]
fn test_convert_srt_to_vtt_withSimpleCue_shouldRewriteTimestamps() {
    let vtt = convert_srt_to_vtt("1\n00:00:20,000 --> 00:00:24,400\nHello, world");

    assert!(vtt.starts_with("WEBVTT\n\n"));
    assert!(vtt.contains("00:00:20.000 --> 00:00:24.400"));
    assert!(vtt.contains("Hello, world"));
    assert!(vtt.contains("\n1\n"));
    assert!(!vtt.contains("00:00:20,000"));
}

/// Styling markup and CRLF input survive, line endings are normalized
#[test]
fn test_convert_srt_to_vtt_withCrlfAndMarkup_shouldPassMarkupThrough() {
    let vtt = convert_srt_to_vtt("\u{FEFF}1\r\n01:02:03,456 --> 01:02:04,000\r\n<b>{\\an8}Top</b>\r\n");
    assert_eq!(vtt, "WEBVTT\n\n1\n01:02:03.456 --> 01:02:04.000\n<b>{\\an8}Top</b>\n");
}

/// Empty input still yields a valid header
#[test]
fn test_convert_srt_to_vtt_withEmptyInput_shouldYieldHeaderOnly() {
    assert_eq!(convert_srt_to_vtt(""), "WEBVTT\n\n");
}

/// Converted output is detected as WebVTT
#[test]
fn test_convert_then_detect_shouldYieldWebVtt() {
    let inputs = [
        "1\n00:00:20,000 --> 00:00:24,400\nHello",
        "",
        "garbage without cues",
        "[Script Info]",
    ];
    for input in inputs {
        let vtt = convert_srt_to_vtt(input);
        assert_eq!(detect_format(&vtt, "srt"), DetectedFormat::WebVtt);
    }
}

/// Display name handles both separator styles
#[test]
fn test_display_name_withVariousPaths_shouldUseLastSegment() {
    assert_eq!(display_name("C:\\subs\\movie.en.srt"), "movie.en.srt");
    assert_eq!(display_name("/home/user/movie.en.srt"), "movie.en.srt");
    assert_eq!(display_name("movie.en.srt"), "movie.en.srt");
    assert_eq!(display_name("mixed/dirs\\movie.srt"), "movie.srt");
    assert_eq!(display_name(""), DEFAULT_DISPLAY_NAME);
}

/// Extensions are lowercased and taken from the final segment
#[test]
fn test_file_extension_withVariousPaths_shouldBeLowercase() {
    assert_eq!(file_extension("/a/b/Movie.SRT"), "srt");
    assert_eq!(file_extension("C:\\a\\movie.en.Vtt"), "vtt");
    assert_eq!(file_extension("noext"), "");
    assert_eq!(file_extension(""), "");
}
