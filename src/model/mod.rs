//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (sections, UI state)
//! - `disk`: Disk browser state (loading/entries/error triple)
//! - `source`: Item source abstraction over the storage backend
//! - `disk_manager`: Load/sort/delete orchestration for the disk browser
//! - `feed`: Trending feed state
//! - `github`: GitHub search API client
//! - `chat`: Chat session state
//! - `openai`: OpenAI chat completions client
//! - `app_model`: Main application model with state management methods

mod types;
mod disk;
mod source;
mod disk_manager;
mod feed;
mod github;
mod chat;
mod openai;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, PreviewInfo, UiState};

pub use disk::DiskState;
pub use source::{DiskEntry, FsItemSource, ItemSource, SharedItemSource, SourceError};
pub use disk_manager::DiskManager;

pub use feed::{FeedRow, FeedState};
pub use github::GithubClient;

pub use chat::{ChatMessage, ChatState, Role};
pub use openai::OpenAiClient;

pub use app_model::AppModel;
