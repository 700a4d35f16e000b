use serde::{Deserialize, Serialize};

use super::Store;
use crate::app_config::PlayerDefaults;

// @module: Player settings and first-run setup status

/// User-adjustable player settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub subtitle_language: String,
    pub selected_audio_device: String,
    pub volume: f64,
    pub is_muted: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from(&PlayerDefaults::default())
    }
}

impl From<&PlayerDefaults> for AppSettings {
    fn from(defaults: &PlayerDefaults) -> Self {
        Self {
            subtitle_language: defaults.subtitle_language.clone(),
            selected_audio_device: defaults.audio_device.clone(),
            volume: defaults.volume,
            is_muted: defaults.muted,
        }
    }
}

// @struct: Settings store with one setter per field
#[derive(Debug, Default)]
pub struct SettingsStore {
    inner: Store<AppSettings>,
}

impl SettingsStore {
    pub fn new(initial: AppSettings) -> Self {
        Self { inner: Store::new(initial) }
    }

    pub fn get(&self) -> AppSettings {
        self.inner.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<AppSettings> {
        self.inner.subscribe()
    }

    pub fn update_subtitle_language(&self, language: &str) {
        self.inner.update(|s| AppSettings { subtitle_language: language.to_string(), ..s.clone() });
    }

    pub fn update_audio_device(&self, device_id: &str) {
        self.inner.update(|s| AppSettings { selected_audio_device: device_id.to_string(), ..s.clone() });
    }

    pub fn update_volume(&self, volume: f64) {
        self.inner.update(|s| AppSettings { volume, ..s.clone() });
    }

    pub fn update_muted(&self, is_muted: bool) {
        self.inner.update(|s| AppSettings { is_muted, ..s.clone() });
    }

    pub fn reset(&self) {
        self.inner.reset();
    }
}

/// What the first-run setup has installed so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupStatus {
    pub ffmpeg_installed: bool,
    pub models_installed: Vec<String>,
    pub setup_completed: bool,
}

/// Setup status, absent until first reported
#[derive(Debug, Default)]
pub struct SetupStore {
    inner: Store<Option<SetupStatus>>,
}

impl SetupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<SetupStatus> {
        self.inner.get()
    }

    pub fn set_status(&self, status: SetupStatus) {
        self.inner.set(Some(status));
    }

    pub fn reset(&self) {
        self.inner.reset();
    }
}
