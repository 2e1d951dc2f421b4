//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Main layout structure (top bar, sidebar, status bar)
//! - `content`: Main content area rendering
//! - `overlays`: Modal overlays (error, preview, help)

mod content;
mod layout;
mod overlays;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ActiveSection, ChatState, DiskState, FeedState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        disk_state: &DiskState,
        feed_state: &FeedState,
        chat_state: &ChatState,
        work_dir: &str,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + work directory
                Constraint::Min(0),    // Main content (sidebar + content)
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], work_dir);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16), // Sidebar (sections)
                Constraint::Min(0),     // Main content
            ])
            .split(chunks[1]);

        layout::render_sidebar(frame, main_chunks[0], ui_state);

        content::render_main_content(
            frame,
            main_chunks[1],
            ui_state,
            disk_state,
            feed_state,
            chat_state,
        );

        let is_loading = match ui_state.active_section {
            ActiveSection::Disk => disk_state.is_loading,
            ActiveSection::Feed => feed_state.is_loading,
            ActiveSection::Chat => chat_state.is_loading,
        };
        layout::render_status_bar(frame, chunks[2], is_loading);

        // Error overlay for the active section (chat errors show inline as
        // system messages instead)
        let active_error = match ui_state.active_section {
            ActiveSection::Disk => disk_state.error.as_ref().map(|e| e.to_string()),
            ActiveSection::Feed => feed_state.error.clone(),
            ActiveSection::Chat => None,
        };
        if let Some(error_msg) = active_error {
            overlays::render_error_notification(frame, &error_msg);
        }

        // Preview overlay (if open)
        if let Some(preview) = &ui_state.preview {
            overlays::render_preview(frame, preview);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
