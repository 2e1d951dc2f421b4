//! Trending feed state

use chrono::{DateTime, Utc};

/// One repository row in the trending feed.
#[derive(Clone, Debug)]
pub struct FeedRow {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub owner: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub updated: DateTime<Utc>,
}

/// State of the trending feed as observed by the UI.
#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub is_loading: bool,
    pub rows: Vec<FeedRow>,
    pub error: Option<String>,
}

impl FeedState {
    pub fn switch_to_loading(&mut self) {
        self.error = None;
        self.is_loading = true;
    }

    pub fn switch_to_content(&mut self, rows: Vec<FeedRow>) {
        self.rows = rows;
        self.error = None;
        self.is_loading = false;
    }

    pub fn switch_to_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_loading = false;
    }
}
