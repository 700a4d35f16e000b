use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

use super::Store;

/// Where the user stopped watching a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchProgress {
    pub path: String,
    /// Playback position in seconds
    pub current_time: f64,
    /// Video length in seconds
    pub duration: f64,
    /// Epoch milliseconds of the last update
    pub last_watched: i64,
}

impl WatchProgress {
    /// Progress stamped with the current time
    pub fn new(path: &str, current_time: f64, duration: f64) -> Self {
        Self {
            path: path.to_string(),
            current_time,
            duration,
            last_watched: Utc::now().timestamp_millis(),
        }
    }
}

/// Watch progress keyed by video path
#[derive(Debug, Default)]
pub struct WatchProgressStore {
    inner: Store<HashMap<String, WatchProgress>>,
}

impl WatchProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the progress for one video
    pub fn set_progress(&self, video_path: &str, progress: WatchProgress) {
        self.inner.update(|map| {
            let mut next = map.clone();
            next.insert(video_path.to_string(), progress);
            next
        });
    }

    /// Replace everything with data loaded from the key-value store
    pub fn load_all_progress(&self, progress: HashMap<String, WatchProgress>) {
        debug!("Loaded watch progress for {} videos", progress.len());
        self.inner.set(progress);
    }

    /// Same as [`Self::load_all_progress`] from the JSON object the key-value store returns
    pub fn load_all_progress_json(&self, json: &str) -> Result<()> {
        let progress: HashMap<String, WatchProgress> =
            serde_json::from_str(json).context("Failed to parse watch progress JSON")?;
        self.load_all_progress(progress);
        Ok(())
    }

    pub fn get_progress(&self, video_path: &str) -> Option<WatchProgress> {
        self.inner.with(|map| map.get(video_path).cloned())
    }

    /// All entries, most recently watched first
    pub fn entries(&self) -> Vec<WatchProgress> {
        let mut entries: Vec<WatchProgress> = self.inner.with(|map| map.values().cloned().collect());
        entries.sort_by(|a, b| b.last_watched.cmp(&a.last_watched));
        entries
    }

    pub fn len(&self) -> usize {
        self.inner.with(|map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.set(HashMap::new());
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<HashMap<String, WatchProgress>> {
        self.inner.subscribe()
    }
}
