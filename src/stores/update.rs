use serde::{Deserialize, Serialize};

use super::Store;

/// Progress of an application update check and download.
///
/// Only the state is modelled here; the transport that actually fetches the
/// update reports into it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateState {
    pub checking: bool,
    pub available: bool,
    pub downloading: bool,
    /// Bytes received so far
    pub downloaded: u64,
    /// Total bytes announced by the server, 0 when unknown
    pub content_length: u64,
    pub version: Option<String>,
    pub date: Option<String>,
    /// Release notes
    pub body: Option<String>,
    pub error: Option<String>,
    pub completed: bool,
    pub up_to_date: bool,
}

impl UpdateState {
    /// Download progress in `0.0..=1.0`, `None` while the length is unknown
    pub fn progress_fraction(&self) -> Option<f64> {
        if self.content_length == 0 {
            return None;
        }
        Some((self.downloaded as f64 / self.content_length as f64).clamp(0.0, 1.0))
    }
}

#[derive(Debug, Default)]
pub struct UpdateStore {
    inner: Store<UpdateState>,
}

impl UpdateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> UpdateState {
        self.inner.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<UpdateState> {
        self.inner.subscribe()
    }

    pub fn reset(&self) {
        self.inner.reset();
    }

    /// Starting (or stopping) a check clears the previous outcome
    pub fn set_checking(&self, checking: bool) {
        self.inner.update(|s| UpdateState {
            checking,
            up_to_date: false,
            error: None,
            downloaded: 0,
            content_length: 0,
            completed: false,
            ..s.clone()
        });
    }

    pub fn set_available(
        &self,
        available: bool,
        version: Option<String>,
        date: Option<String>,
        body: Option<String>,
    ) {
        self.inner.update(|s| UpdateState {
            available,
            version,
            date,
            body,
            up_to_date: false,
            ..s.clone()
        });
    }

    pub fn set_downloading(&self, downloading: bool) {
        self.inner.update(|s| UpdateState { downloading, ..s.clone() });
    }

    pub fn set_progress(&self, downloaded: u64, content_length: u64) {
        self.inner.update(|s| UpdateState { downloaded, content_length, ..s.clone() });
    }

    pub fn set_completed(&self, completed: bool) {
        self.inner.update(|s| UpdateState { completed, ..s.clone() });
    }

    /// An error wipes everything else back to the initial state
    pub fn set_error(&self, error: &str) {
        self.inner.set(UpdateState {
            error: Some(error.to_string()),
            ..UpdateState::default()
        });
    }

    pub fn set_up_to_date(&self, up_to_date: bool) {
        self.inner.update(|s| UpdateState { up_to_date, ..s.clone() });
    }
}
