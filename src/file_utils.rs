use anyhow::{Result, Context};
use async_trait::async_trait;
use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::Path;

// @module: File reading collaborator and output helpers

/// Capability to read a text file.
///
/// Ingestion only ever talks to the filesystem through this trait, so the
/// playback side can plug in whatever bridge it has (or a fake in tests).
/// Implementations are responsible for UTF-8 decoding.
#[async_trait]
pub trait TextReader: Send + Sync + Debug {
    /// Read the whole resource at `path` as text
    async fn read_text(&self, path: &str) -> io::Result<String>;
}

/// Reads from the local filesystem with tokio
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTextReader;

#[async_trait]
impl TextReader for FsTextReader {
    async fn read_text(&self, path: &str) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file, creating parent directories first
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
