/*!
 * Application version resolution.
 *
 * The version baked in at build time wins, then the runtime environment,
 * then a fixed placeholder so test builds always have something to show.
 */

/// Environment variable consulted at build time and at runtime
pub const VERSION_ENV_VAR: &str = "GLUCOSE_APP_VERSION";

/// Version reported when nothing else is available
pub const FALLBACK_VERSION: &str = "0.0.0";

const BUILD_TIME_VERSION: Option<&str> = match option_env!("GLUCOSE_APP_VERSION") {
    Some(v) => Some(v),
    None => option_env!("CARGO_PKG_VERSION"),
};

/// First non-empty of the build-time and runtime values, else [`FALLBACK_VERSION`]
pub fn resolve_version(build_time: Option<&str>, runtime: Option<&str>) -> String {
    [build_time, runtime]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(FALLBACK_VERSION)
        .to_string()
}

/// Current application version, e.g. `2.3.0`
pub fn app_version() -> String {
    let runtime = std::env::var(VERSION_ENV_VAR).ok();
    resolve_version(BUILD_TIME_VERSION, runtime.as_deref())
}

/// Current application version with a `v` prefix, e.g. `v2.3.0`
pub fn formatted_version() -> String {
    format!("v{}", app_version())
}
