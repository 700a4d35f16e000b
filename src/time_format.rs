// @module: Human-readable playback times

fn sanitize(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 { seconds } else { 0.0 }
}

fn split_hms(seconds: f64) -> (u64, u64, u64) {
    let total = sanitize(seconds).floor() as u64;
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// `H:MM:SS` when there are hours, otherwise `M:SS`
pub fn format_time(seconds: f64) -> String {
    let (h, m, s) = split_hms(seconds);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Like [`format_time`], but empty for a missing or zero duration
pub fn format_duration(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s != 0.0 => format_time(s),
        _ => String::new(),
    }
}

/// Rough remaining-time label such as `~45s`, `~3m` or `~1h 20m`
pub fn format_estimated_time(seconds: f64) -> String {
    let seconds = sanitize(seconds);
    if seconds < 60.0 {
        format!("~{}s", seconds.round() as u64)
    } else if seconds < 3600.0 {
        format!("~{}m", (seconds / 60.0).round() as u64)
    } else {
        let hours = (seconds / 3600.0).floor() as u64;
        let mins = ((seconds % 3600.0) / 60.0).round() as u64;
        if mins > 0 {
            format!("~{}h {}m", hours, mins)
        } else {
            format!("~{}h", hours)
        }
    }
}

/// Spelled-out time for screen readers, e.g. `1 hour 5 seconds`
pub fn format_time_for_screen_reader(seconds: f64) -> String {
    let (h, m, s) = split_hms(seconds);

    let unit = |n: u64, singular: &str| {
        if n == 1 { format!("1 {}", singular) } else { format!("{} {}s", n, singular) }
    };

    let mut parts = Vec::with_capacity(3);
    if h > 0 {
        parts.push(unit(h, "hour"));
    }
    if m > 0 {
        parts.push(unit(m, "minute"));
    }
    if s > 0 || parts.is_empty() {
        parts.push(unit(s, "second"));
    }
    parts.join(" ")
}
