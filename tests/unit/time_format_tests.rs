/*!
 * Tests for playback time formatting
 */

use glucose::time_format::{
    format_duration, format_estimated_time, format_time, format_time_for_screen_reader,
};

#[test]
fn test_format_time_withVariousInputs_shouldFormatCorrectly() {
    let cases = [
        (0.0, "0:00"),
        (5.9, "0:05"),
        (65.0, "1:05"),
        (599.0, "9:59"),
        (3600.0, "1:00:00"),
        (3725.4, "1:02:05"),
        (36000.0, "10:00:00"),
    ];
    for (input, expected) in cases {
        assert_eq!(format_time(input), expected, "input {}", input);
    }
}

#[test]
fn test_format_time_withInvalidInput_shouldTreatAsZero() {
    assert_eq!(format_time(-5.0), "0:00");
    assert_eq!(format_time(f64::NAN), "0:00");
}

#[test]
fn test_format_duration_withMissingOrZero_shouldBeEmpty() {
    assert_eq!(format_duration(None), "");
    assert_eq!(format_duration(Some(0.0)), "");
    assert_eq!(format_duration(Some(90.0)), "1:30");
}

#[test]
fn test_format_estimated_time_withVariousInputs_shouldRound() {
    let cases = [
        (0.0, "~0s"),
        (42.4, "~42s"),
        (59.6, "~60s"),
        (60.0, "~1m"),
        (150.0, "~3m"),
        (3599.0, "~60m"),
        (3600.0, "~1h"),
        (3600.0 + 20.0 * 60.0, "~1h 20m"),
        (7200.0 + 10.0, "~2h"),
    ];
    for (input, expected) in cases {
        assert_eq!(format_estimated_time(input), expected, "input {}", input);
    }
}

#[test]
fn test_format_time_for_screen_reader_withVariousInputs_shouldSpellOut() {
    let cases = [
        (0.0, "0 seconds"),
        (1.0, "1 second"),
        (60.0, "1 minute"),
        (61.0, "1 minute 1 second"),
        (3600.0, "1 hour"),
        (7325.0, "2 hours 2 minutes 5 seconds"),
        (3605.0, "1 hour 5 seconds"),
    ];
    for (input, expected) in cases {
        assert_eq!(format_time_for_screen_reader(input), expected, "input {}", input);
    }
}
