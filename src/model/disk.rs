//! Disk browser state: the loading/entries/error triple and its transitions

use std::cmp::Ordering;
use std::sync::Arc;

use super::source::{DiskEntry, SourceError};

/// State of the disk browser as observed by the UI.
///
/// Invariant: `error` being set implies `is_loading` is false. All mutation
/// goes through the transition helpers below (plus the manager's optimistic
/// removal), which maintain that.
#[derive(Clone, Debug, Default)]
pub struct DiskState {
    pub is_loading: bool,
    pub entries: Vec<DiskEntry>,
    pub error: Option<Arc<SourceError>>,
}

impl DiskState {
    pub fn switch_to_loading(&mut self) {
        self.error = None;
        self.is_loading = true;
    }

    pub fn switch_to_content(&mut self, entries: Vec<DiskEntry>) {
        self.entries = entries;
        self.error = None;
        self.is_loading = false;
    }

    pub fn switch_to_error(&mut self, error: SourceError) {
        self.error = Some(Arc::new(error));
        self.is_loading = false;
    }

    pub fn empty_text(&self) -> &'static str {
        if self.is_loading {
            "Loading..."
        } else if self.error.is_none() {
            "Nothing here yet."
        } else {
            ""
        }
    }
}

/// Sort entries by creation time, newest first. Entries without a readable
/// creation date go after all dated entries, keeping their input order
/// (stable sort, equal keys).
pub fn sort_by_created_desc(entries: &mut [DiskEntry]) {
    entries.sort_by(|a, b| match (&a.created, &b.created) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
