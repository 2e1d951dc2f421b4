//! Disk, feed and chat orchestration

use crate::model::{ActiveSection, PreviewInfo, Role};

use super::AppController;

impl AppController {
    /// Initial loads kicked off at startup.
    pub async fn load_initial_content(&self) {
        self.load_disk().await;
        let controller = self.clone();
        tokio::spawn(async move {
            controller.load_feed().await;
        });
    }

    pub async fn reload_active_section(&self) {
        match self.model.get_ui_state().await.active_section {
            ActiveSection::Disk => self.load_disk().await,
            ActiveSection::Feed => self.load_feed().await,
            ActiveSection::Chat => {}
        }
    }

    // ========================================================================
    // Disk
    // ========================================================================

    pub async fn load_disk(&self) {
        self.model.disk.load().await;
        self.model.clamp_selections().await;
    }

    /// Delete the selected entry. The entry leaves the list immediately; the
    /// backing delete runs in the background so the UI never blocks on it.
    pub async fn delete_selected_disk_item(&self) {
        let selected = self.model.get_ui_state().await.disk_selected;
        if self.model.disk.state().await.entries.is_empty() {
            return;
        }

        let controller = self.clone();
        tokio::spawn(async move {
            controller.model.disk.delete_items(&[selected]).await;
            controller.model.clamp_selections().await;
        });
    }

    /// Open the preview overlay for the selected entry. Entries that do not
    /// decode as images still preview, with unknown dimensions.
    pub async fn open_selected_preview(&self) {
        let disk_state = self.model.disk.state().await;
        let selected = self.model.get_ui_state().await.disk_selected;
        let Some(entry) = disk_state.entries.get(selected).cloned() else {
            return;
        };

        let dimensions = match self.model.disk.load_image(&entry.path).await {
            Ok(decoded) => Some((decoded.width(), decoded.height())),
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), error = %e, "preview decode failed");
                None
            }
        };

        self.model
            .open_preview(PreviewInfo {
                name: entry.name(),
                created: entry.created,
                size: entry.size,
                dimensions,
            })
            .await;
    }

    // ========================================================================
    // Feed
    // ========================================================================

    pub async fn load_feed(&self) {
        tracing::debug!("loading trending feed");
        self.model.set_feed_loading().await;

        match self.model.github.fetch_trending().await {
            Ok(rows) => {
                self.model.set_feed_rows(rows).await;
                self.model.clamp_selections().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "trending feed failed");
                self.model.set_feed_error(Self::format_error(&e)).await;
            }
        }
    }

    // ========================================================================
    // Chat
    // ========================================================================

    /// Commit the chat input and request a completion in the background.
    /// Failures come back as system messages in the transcript.
    pub async fn send_chat_message(&self) {
        let Some(message) = self.model.take_chat_input().await else {
            return;
        };

        let controller = self.clone();
        tokio::spawn(async move {
            let config = controller.model.chat_config.lock().await.clone();
            match controller.model.openai.complete(&config, &message).await {
                Ok(reply) => {
                    controller.model.push_chat_message(Role::Ai, reply).await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "chat completion failed");
                    controller
                        .model
                        .push_chat_message(Role::System, Self::format_error(&e))
                        .await;
                }
            }
            controller.model.set_chat_loading(false).await;
        });
    }

    pub async fn delete_selected_chat_message(&self) {
        let selected = self.model.get_ui_state().await.chat_selected;
        self.model.delete_chat_message(selected).await;
        self.model.clamp_selections().await;
    }
}
