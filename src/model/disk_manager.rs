//! Disk content manager: orchestrates load / delete / preview against the
//! item source and owns the disk browser state.
//!
//! The manager is the only writer of `DiskState`; the UI polls snapshots via
//! `state()`. Deletes are optimistic: targeted entries leave the observable
//! state before the backing deletes are confirmed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future;
use tokio::sync::Mutex;

use super::disk::{sort_by_created_desc, DiskState};
use super::source::{DiskEntry, SharedItemSource, SourceError};

#[derive(Clone)]
pub struct DiskManager {
    source: SharedItemSource,
    root: PathBuf,
    state: Arc<Mutex<DiskState>>,
}

impl DiskManager {
    /// The item source is injected here; the manager has no other way to
    /// reach the storage backend.
    pub fn new(source: SharedItemSource, root: PathBuf) -> Self {
        Self {
            source,
            root,
            state: Arc::new(Mutex::new(DiskState::default())),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn state(&self) -> DiskState {
        self.state.lock().await.clone()
    }

    /// List the work directory and publish the entries newest-first.
    ///
    /// A cancelled listing is not an error: the loading flag resets and the
    /// previously published entries stay up.
    pub async fn load(&self) {
        self.state.lock().await.switch_to_loading();

        match self.source.list_directory(&self.root).await {
            Ok(mut entries) => {
                sort_by_created_desc(&mut entries);
                tracing::info!(count = entries.len(), "directory listed");
                self.state.lock().await.switch_to_content(entries);
            }
            Err(SourceError::Cancelled) => {
                tracing::debug!("listing cancelled, keeping previous state");
                self.state.lock().await.is_loading = false;
            }
            Err(e) => {
                tracing::error!(root = %self.root.display(), error = %e, "listing failed");
                self.state.lock().await.switch_to_error(e);
            }
        }
    }

    /// Remove the entries at `offsets` from the observable state immediately,
    /// then run the backing deletes concurrently, one per entry. Any failure
    /// lands in the error field (last one wins); the loading flag clears once
    /// every delete has settled.
    pub async fn delete_items(&self, offsets: &[usize]) {
        let removed = {
            let mut state = self.state.lock().await;
            state.switch_to_loading();

            let mut targets: Vec<usize> = offsets
                .iter()
                .copied()
                .filter(|&i| i < state.entries.len())
                .collect();
            targets.sort_unstable();
            targets.dedup();

            let removed: Vec<DiskEntry> =
                targets.iter().map(|&i| state.entries[i].clone()).collect();
            for &i in targets.iter().rev() {
                state.entries.remove(i);
            }
            removed
        };

        let results = future::join_all(
            removed
                .iter()
                .map(|entry| self.source.delete_item(&entry.path)),
        )
        .await;

        let mut state = self.state.lock().await;
        for (entry, result) in removed.iter().zip(results) {
            match result {
                Ok(()) => tracing::info!(path = %entry.path.display(), "item deleted"),
                Err(e) => {
                    tracing::error!(path = %entry.path.display(), error = %e, "delete failed");
                    state.switch_to_error(e);
                }
            }
        }
        state.is_loading = false;
    }

    /// Read and decode one item as an image. Decode failures surface as-is.
    pub async fn load_image(&self, path: &Path) -> Result<image::DynamicImage, SourceError> {
        let bytes = self.source.read_item(path).await?;
        image::load_from_memory(&bytes).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::ItemSource;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::collections::HashSet;
    use std::io::ErrorKind;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::Semaphore;

    struct MockSource {
        entries: StdMutex<Vec<DiskEntry>>,
        next_list_error: StdMutex<Option<SourceError>>,
        failing_deletes: StdMutex<HashSet<PathBuf>>,
        deleted: StdMutex<Vec<PathBuf>>,
        delete_gate: Option<Arc<Semaphore>>,
    }

    impl MockSource {
        fn with_entries(entries: Vec<DiskEntry>) -> Self {
            Self {
                entries: StdMutex::new(entries),
                next_list_error: StdMutex::new(None),
                failing_deletes: StdMutex::new(HashSet::new()),
                deleted: StdMutex::new(Vec::new()),
                delete_gate: None,
            }
        }

        fn set_list_error(&self, error: SourceError) {
            *self.next_list_error.lock().unwrap() = Some(error);
        }

        fn fail_delete_of(&self, path: &str) {
            self.failing_deletes
                .lock()
                .unwrap()
                .insert(PathBuf::from(path));
        }
    }

    #[async_trait]
    impl ItemSource for MockSource {
        async fn list_directory(&self, _root: &Path) -> Result<Vec<DiskEntry>, SourceError> {
            if let Some(e) = self.next_list_error.lock().unwrap().take() {
                return Err(e);
            }
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn read_item(&self, path: &Path) -> Result<Vec<u8>, SourceError> {
            let _ = path;
            Ok(vec![0u8; 4])
        }

        async fn delete_item(&self, path: &Path) -> Result<(), SourceError> {
            if let Some(gate) = &self.delete_gate {
                let _permit = gate.acquire().await.unwrap();
            }
            if self.failing_deletes.lock().unwrap().contains(path) {
                return Err(SourceError::Io(std::io::Error::new(
                    ErrorKind::PermissionDenied,
                    "delete denied",
                )));
            }
            self.deleted.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    fn entry(name: &str, created_days_ago: Option<i64>) -> DiskEntry {
        DiskEntry {
            path: PathBuf::from(name),
            created: created_days_ago.map(|d| Utc::now() - Duration::days(d)),
            size: Some(1),
        }
    }

    fn manager_with(source: MockSource) -> (DiskManager, Arc<MockSource>) {
        let source = Arc::new(source);
        let manager = DiskManager::new(source.clone(), PathBuf::from("/work"));
        (manager, source)
    }

    #[tokio::test]
    async fn load_sorts_newest_first_and_clears_loading() {
        let (manager, _) = manager_with(MockSource::with_entries(vec![
            entry("two", Some(2)),
            entry("one", Some(1)),
            entry("three", Some(3)),
        ]));

        manager.load().await;

        let state = manager.state().await;
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        let names: Vec<_> = state.entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn load_failure_surfaces_error() {
        let (manager, source) = manager_with(MockSource::with_entries(vec![]));
        source.set_list_error(SourceError::Io(std::io::Error::new(
            ErrorKind::NotFound,
            "no such directory",
        )));

        manager.load().await;

        let state = manager.state().await;
        assert!(!state.is_loading);
        assert!(matches!(state.error.as_deref(), Some(SourceError::Io(_))));
        assert!(state.entries.is_empty());
    }

    #[tokio::test]
    async fn cancelled_load_keeps_previous_state() {
        let (manager, source) = manager_with(MockSource::with_entries(vec![
            entry("a", Some(1)),
            entry("b", Some(2)),
        ]));
        manager.load().await;

        source.set_list_error(SourceError::Cancelled);
        manager.load().await;

        let state = manager.state().await;
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.entries.len(), 2, "prior entries stay up");
    }

    #[tokio::test]
    async fn delete_removes_items_without_error_on_success() {
        let (manager, source) = manager_with(MockSource::with_entries(vec![
            entry("a", Some(1)),
            entry("b", Some(2)),
            entry("c", Some(3)),
        ]));
        manager.load().await;

        manager.delete_items(&[0, 2]).await;

        let state = manager.state().await;
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        let names: Vec<_> = state.entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["b"]);
        assert_eq!(source.deleted.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failed_delete_still_removes_optimistically_but_sets_error() {
        let (manager, source) = manager_with(MockSource::with_entries(vec![
            entry("a", Some(1)),
            entry("b", Some(2)),
            entry("c", Some(3)),
        ]));
        source.fail_delete_of("b");
        manager.load().await;

        manager.delete_items(&[0, 1]).await;

        let state = manager.state().await;
        assert!(!state.is_loading);
        assert!(state.error.is_some());
        let names: Vec<_> = state.entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["c"], "failed delete is still removed from the list");
    }

    #[tokio::test]
    async fn removal_is_observable_before_deletes_finish() {
        let gate = Arc::new(Semaphore::new(0));
        let mut source = MockSource::with_entries(vec![
            entry("a", Some(1)),
            entry("b", Some(2)),
            entry("c", Some(3)),
        ]);
        source.delete_gate = Some(gate.clone());
        let (manager, _) = manager_with(source);
        manager.load().await;

        let task = {
            let manager = manager.clone();
            tokio::spawn(async move { manager.delete_items(&[0]).await })
        };

        // The optimistic removal lands before the gated delete can complete.
        let mut observed = manager.state().await;
        while observed.entries.len() != 2 {
            tokio::task::yield_now().await;
            observed = manager.state().await;
        }
        assert!(observed.is_loading);
        assert!(!observed.entries.iter().any(|e| e.name() == "a"));

        gate.add_permits(1);
        task.await.unwrap();
        assert!(!manager.state().await.is_loading);
    }

    #[tokio::test]
    async fn load_image_reports_decode_failures() {
        let (manager, _) = manager_with(MockSource::with_entries(vec![]));
        // Mock read_item returns bytes that are not a valid image.
        let err = manager
            .load_image(Path::new("bogus.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }
}
