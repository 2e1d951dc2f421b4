//! Utility functions for rendering UI components

use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// "n/a" substitution happens here, at the presentation boundary; the data
/// layer carries plain optionals.
pub fn format_opt_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| {
        d.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    })
    .unwrap_or_else(|| "n/a".to_string())
}

pub fn format_opt_size(size: Option<u64>) -> String {
    size.map(format_size).unwrap_or_else(|| "n/a".to_string())
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sizes_by_magnitude() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn missing_metadata_renders_na() {
        assert_eq!(format_opt_date(None), "n/a");
        assert_eq!(format_opt_size(None), "n/a");
        assert_eq!(format_opt_size(Some(100)), "100 B");
    }

    #[test]
    fn truncates_long_strings_with_ellipsis() {
        assert_eq!(truncate_string("short", 10), "short     ");
        let truncated = truncate_string("a very long file name.png", 10);
        assert_eq!(truncated.len(), 10);
        assert!(truncated.ends_with("..."));
    }
}
