//! Main application model with state management

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::ChatConfig;

use super::chat::{ChatMessage, ChatState, Role};
use super::disk_manager::DiskManager;
use super::feed::{FeedRow, FeedState};
use super::github::GithubClient;
use super::openai::OpenAiClient;
use super::types::{ActiveSection, PreviewInfo, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub disk: DiskManager,
    pub github: GithubClient,
    pub openai: OpenAiClient,
    pub chat_config: Arc<Mutex<ChatConfig>>,
    pub ui_state: Arc<Mutex<UiState>>,
    feed_state: Arc<Mutex<FeedState>>,
    chat_state: Arc<Mutex<ChatState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(disk: DiskManager, chat_config: ChatConfig) -> Self {
        let mut chat_state = ChatState::default();
        if chat_config.is_configured() {
            chat_state
                .messages
                .push(ChatMessage::new(Role::System, "chat initialized"));
        } else {
            chat_state.messages.push(ChatMessage::new(
                Role::System,
                "no API key configured - set OPENAI_API_KEY or edit .cache/chat_config.json",
            ));
        }

        Self {
            disk,
            github: GithubClient::new(),
            openai: OpenAiClient::new(),
            chat_config: Arc::new(Mutex::new(chat_config)),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            feed_state: Arc::new(Mutex::new(FeedState::default())),
            chat_state: Arc::new(Mutex::new(chat_state)),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        let selected = match state.active_section {
            ActiveSection::Disk => &mut state.disk_selected,
            ActiveSection::Feed => &mut state.feed_selected,
            ActiveSection::Chat => &mut state.chat_selected,
        };
        *selected = selected.saturating_sub(1);
    }

    pub async fn move_selection_down(&self) {
        let max = match self.ui_state.lock().await.active_section {
            ActiveSection::Disk => self.disk.state().await.entries.len(),
            ActiveSection::Feed => self.feed_state.lock().await.rows.len(),
            ActiveSection::Chat => self.chat_state.lock().await.messages.len(),
        };

        let mut state = self.ui_state.lock().await;
        let selected = match state.active_section {
            ActiveSection::Disk => &mut state.disk_selected,
            ActiveSection::Feed => &mut state.feed_selected,
            ActiveSection::Chat => &mut state.chat_selected,
        };
        if *selected < max.saturating_sub(1) {
            *selected += 1;
        }
    }

    /// Keep section selections within the current list bounds. Called after
    /// anything that can shrink a list (reload, delete).
    pub async fn clamp_selections(&self) {
        let disk_len = self.disk.state().await.entries.len();
        let feed_len = self.feed_state.lock().await.rows.len();
        let chat_len = self.chat_state.lock().await.messages.len();

        let mut state = self.ui_state.lock().await;
        state.disk_selected = state.disk_selected.min(disk_len.saturating_sub(1));
        state.feed_selected = state.feed_selected.min(feed_len.saturating_sub(1));
        state.chat_selected = state.chat_selected.min(chat_len.saturating_sub(1));
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn open_preview(&self, preview: PreviewInfo) {
        self.ui_state.lock().await.preview = Some(preview);
    }

    pub async fn close_preview(&self) {
        self.ui_state.lock().await.preview = None;
    }

    pub async fn is_preview_open(&self) -> bool {
        self.ui_state.lock().await.preview.is_some()
    }

    // ========================================================================
    // Feed state
    // ========================================================================

    pub async fn get_feed_state(&self) -> FeedState {
        self.feed_state.lock().await.clone()
    }

    pub async fn set_feed_loading(&self) {
        self.feed_state.lock().await.switch_to_loading();
    }

    pub async fn set_feed_rows(&self, rows: Vec<FeedRow>) {
        self.feed_state.lock().await.switch_to_content(rows);
    }

    pub async fn set_feed_error(&self, error: String) {
        self.feed_state.lock().await.switch_to_error(error);
    }

    pub async fn selected_feed_row(&self) -> Option<FeedRow> {
        let selected = self.ui_state.lock().await.feed_selected;
        self.feed_state.lock().await.rows.get(selected).cloned()
    }

    // ========================================================================
    // Chat state
    // ========================================================================

    pub async fn get_chat_state(&self) -> ChatState {
        self.chat_state.lock().await.clone()
    }

    pub async fn append_chat_input(&self, c: char) {
        self.chat_state.lock().await.input.push(c);
    }

    pub async fn backspace_chat_input(&self) {
        self.chat_state.lock().await.input.pop();
    }

    /// Commit the current input as a user message and flip to loading.
    /// Returns `None` when sending is disabled (blank input or in flight).
    pub async fn take_chat_input(&self) -> Option<String> {
        let mut state = self.chat_state.lock().await;
        if state.is_send_disabled() {
            return None;
        }
        let message = std::mem::take(&mut state.input);
        state.messages.push(ChatMessage::new(Role::User, &message));
        state.is_loading = true;
        Some(message)
    }

    pub async fn push_chat_message(&self, role: Role, text: String) {
        self.chat_state
            .lock()
            .await
            .messages
            .push(ChatMessage::new(role, text));
    }

    pub async fn set_chat_loading(&self, loading: bool) {
        self.chat_state.lock().await.is_loading = loading;
    }

    pub async fn delete_chat_message(&self, index: usize) {
        let mut state = self.chat_state.lock().await;
        if index < state.messages.len() {
            state.messages.remove(index);
        }
    }
}
