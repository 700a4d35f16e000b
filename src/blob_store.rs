/*!
 * In-memory blob registry.
 *
 * Normalized subtitle text is handed to the playback surface as an addressable
 * `blob:` URL instead of a file. A blob stays registered until its owner
 * revokes it; nothing here expires on its own.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::Mutex;
use uuid::Uuid;

const BLOB_URL_PREFIX: &str = "blob:glucose/";

/// Address of a registered blob
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobUrl(String);

impl BlobUrl {
    fn generate() -> Self {
        Self(format!("{}{}", BLOB_URL_PREFIX, Uuid::new_v4()))
    }

    /// The URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registered content and its MIME type
#[derive(Debug, Clone)]
pub struct Blob {
    pub content: Arc<str>,
    pub mime_type: String,
}

/// Thread-safe registry of live blobs
#[derive(Debug, Default)]
pub struct BlobStore {
    blobs: Mutex<HashMap<BlobUrl, Blob>>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content and return its URL
    pub fn create(&self, content: impl Into<Arc<str>>, mime_type: &str) -> BlobUrl {
        let url = BlobUrl::generate();
        let blob = Blob {
            content: content.into(),
            mime_type: mime_type.to_string(),
        };
        debug!("Created blob {} ({} bytes, {})", url, blob.content.len(), mime_type);
        self.blobs.lock().insert(url.clone(), blob);
        url
    }

    /// Look up a live blob
    pub fn get(&self, url: &BlobUrl) -> Option<Blob> {
        self.blobs.lock().get(url).cloned()
    }

    /// Release a blob. Returns false if it was already revoked or never existed.
    pub fn revoke(&self, url: &BlobUrl) -> bool {
        let removed = self.blobs.lock().remove(url).is_some();
        if removed {
            debug!("Revoked blob {}", url);
        } else {
            warn!("Attempted to revoke unknown blob {}", url);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.lock().is_empty()
    }
}
