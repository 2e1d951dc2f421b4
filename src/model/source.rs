//! Item source abstraction over the storage backend
//!
//! The disk manager only talks to this trait, so the concrete backend
//! (real filesystem in production, in-memory fixtures in tests) is swapped
//! at construction time.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Errors produced by an item source.
///
/// `Cancelled` is special: the load path recognizes it and treats it as a
/// no-op instead of surfacing it to the UI.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("operation cancelled")]
    Cancelled,
    #[error("decode failed: {0}")]
    Decode(String),
}

/// A single item in the work directory, with metadata read at listing time.
///
/// Metadata is optional on purpose: an entry whose creation date or size
/// cannot be read still lists, and the presentation layer renders "n/a".
#[derive(Clone, Debug)]
pub struct DiskEntry {
    pub path: PathBuf,
    pub created: Option<DateTime<Utc>>,
    pub size: Option<u64>,
}

impl DiskEntry {
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[async_trait]
pub trait ItemSource: Send + Sync {
    /// List items directly under `root`. Fails if the root is unreadable;
    /// per-entry metadata failures yield `None` fields, not an error.
    async fn list_directory(&self, root: &Path) -> Result<Vec<DiskEntry>, SourceError>;

    /// Read the full contents of one item.
    async fn read_item(&self, path: &Path) -> Result<Vec<u8>, SourceError>;

    /// Delete one item.
    async fn delete_item(&self, path: &Path) -> Result<(), SourceError>;
}

pub type SharedItemSource = Arc<dyn ItemSource>;

/// Production item source backed by `tokio::fs`.
pub struct FsItemSource;

impl FsItemSource {
    async fn entry_for(path: PathBuf) -> DiskEntry {
        let meta = tokio::fs::metadata(&path).await.ok();
        let created = meta
            .as_ref()
            .and_then(|m| m.created().ok())
            .map(DateTime::<Utc>::from);
        let size = meta.as_ref().map(|m| m.len());
        DiskEntry { path, created, size }
    }
}

#[async_trait]
impl ItemSource for FsItemSource {
    async fn list_directory(&self, root: &Path) -> Result<Vec<DiskEntry>, SourceError> {
        tracing::debug!(root = %root.display(), "listing directory");
        let mut dir = tokio::fs::read_dir(root).await?;
        let mut entries = Vec::new();
        while let Some(item) = dir.next_entry().await? {
            let file_type = item.file_type().await?;
            if file_type.is_dir() {
                continue;
            }
            entries.push(Self::entry_for(item.path()).await);
        }
        Ok(entries)
    }

    async fn read_item(&self, path: &Path) -> Result<Vec<u8>, SourceError> {
        tracing::debug!(path = %path.display(), "reading item");
        Ok(tokio::fs::read(path).await?)
    }

    async fn delete_item(&self, path: &Path) -> Result<(), SourceError> {
        tracing::debug!(path = %path.display(), "deleting item");
        Ok(tokio::fs::remove_file(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_files_with_metadata() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"aaa").unwrap();
        std::fs::write(dir.path().join("b.png"), b"bbbb").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let source = FsItemSource;
        let mut entries = source.list_directory(dir.path()).await.unwrap();
        entries.sort_by_key(|e| e.name());

        assert_eq!(entries.len(), 2, "directories are skipped");
        assert_eq!(entries[0].name(), "a.png");
        assert_eq!(entries[0].size, Some(3));
        assert_eq!(entries[1].size, Some(4));
    }

    #[tokio::test]
    async fn list_fails_for_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let source = FsItemSource;
        let err = source.list_directory(&missing).await.unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[tokio::test]
    async fn read_and_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("item.bin");
        std::fs::write(&file, b"payload").unwrap();

        let source = FsItemSource;
        assert_eq!(source.read_item(&file).await.unwrap(), b"payload");

        source.delete_item(&file).await.unwrap();
        assert!(!file.exists());
        assert!(matches!(
            source.read_item(&file).await.unwrap_err(),
            SourceError::Io(_)
        ));
    }
}
