//! Core type definitions for the application

use chrono::{DateTime, Utc};

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Disk,
    Feed,
    Chat,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Disk => ActiveSection::Feed,
            ActiveSection::Feed => ActiveSection::Chat,
            ActiveSection::Chat => ActiveSection::Disk,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Disk => ActiveSection::Chat,
            ActiveSection::Feed => ActiveSection::Disk,
            ActiveSection::Chat => ActiveSection::Feed,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ActiveSection::Disk => "Disk",
            ActiveSection::Feed => "Feed",
            ActiveSection::Chat => "Chat",
        }
    }

    pub fn all() -> [ActiveSection; 3] {
        [ActiveSection::Disk, ActiveSection::Feed, ActiveSection::Chat]
    }
}

/// Details shown in the image preview overlay. Metadata stays optional here;
/// "n/a" substitution happens in the view.
#[derive(Clone, Debug)]
pub struct PreviewInfo {
    pub name: String,
    pub created: Option<DateTime<Utc>>,
    pub size: Option<u64>,
    pub dimensions: Option<(u32, u32)>,
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub disk_selected: usize,
    pub feed_selected: usize,
    pub chat_selected: usize,
    pub show_help_popup: bool,
    pub preview: Option<PreviewInfo>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Disk,
            disk_selected: 0,
            feed_selected: 0,
            chat_selected: 0,
            show_help_popup: false,
            preview: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_cycling_is_a_full_loop() {
        let mut section = ActiveSection::Disk;
        for _ in 0..3 {
            section = section.next();
        }
        assert_eq!(section, ActiveSection::Disk);

        assert_eq!(ActiveSection::Disk.prev(), ActiveSection::Chat);
        assert_eq!(ActiveSection::Chat.next(), ActiveSection::Disk);
    }
}
