//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        // Handle help popup first (blocks everything else)
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle preview overlay
        if model.is_preview_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                    model.close_preview().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        // Chat captures free-form typing
        if ui_state.active_section == ActiveSection::Chat {
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        model.cycle_section_backward().await;
                    } else {
                        model.cycle_section_forward().await;
                    }
                    return Ok(());
                }
                KeyCode::BackTab => {
                    model.cycle_section_backward().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    self.send_chat_message().await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_chat_input().await;
                    return Ok(());
                }
                KeyCode::Up => {
                    model.move_selection_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.move_selection_down().await;
                    return Ok(());
                }
                KeyCode::Delete => {
                    self.delete_selected_chat_message().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Ctrl+Q still quits while typing
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_chat_input(c).await;
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }

        // Disk-specific keys
        if ui_state.active_section == ActiveSection::Disk {
            match key.code {
                KeyCode::Enter => {
                    self.open_selected_preview().await;
                    return Ok(());
                }
                KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('D') => {
                    self.delete_selected_disk_item().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            KeyCode::Up => {
                model.move_selection_up().await;
            }
            KeyCode::Down => {
                model.move_selection_down().await;
            }
            // Reload the active section
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let controller = self.clone();
                tokio::spawn(async move {
                    controller.reload_active_section().await;
                });
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
