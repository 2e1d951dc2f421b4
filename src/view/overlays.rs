//! Overlay rendering (error notification, help popup, image preview)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::PreviewInfo;

use super::utils::{format_opt_date, format_opt_size};

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

pub fn render_error_notification(frame: &mut Frame, error_msg: &str) {
    let area = frame.area();

    let popup_width = 52.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4) as usize; // account for borders

    // Calculate how many lines the error message will take when wrapped
    let error_line_count = ((error_msg.chars().count() as f32) / (inner_width as f32)).ceil() as u16;
    let popup_height = (2 + error_line_count.max(1)).min(area.height.saturating_sub(4));

    let popup_area = centered_popup(area, popup_width, popup_height);

    // Clear the area behind the popup first
    frame.render_widget(Clear, popup_area);

    let error_widget = Paragraph::new(error_msg.to_string())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error (R to reload) ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(error_widget, popup_area);
}

pub fn render_preview(frame: &mut Frame, preview: &PreviewInfo) {
    let area = frame.area();
    let popup_area = centered_popup(area, 48, 7);

    frame.render_widget(Clear, popup_area);

    let dimensions = preview
        .dimensions
        .map(|(w, h)| format!("{w} x {h} px"))
        .unwrap_or_else(|| "not an image".to_string());

    let lines = vec![
        detail_line("created", format_opt_date(preview.created)),
        detail_line("size", format_opt_size(preview.size)),
        detail_line("dimensions", dimensions),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} (Esc to close) ", preview.name))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(widget, popup_area);
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>12}  ", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    // Keybindings organized by category
    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move selection"),
        ("", ""),
        ("", "── Disk ──"),
        ("Enter", "Preview item"),
        ("D / Delete", "Delete item"),
        ("R", "Reload listing"),
        ("", ""),
        ("", "── Feed ──"),
        ("R", "Reload feed"),
        ("", ""),
        ("", "── Chat ──"),
        ("Enter", "Send message"),
        ("Delete", "Delete message"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q", "Quit (Ctrl+Q while typing)"),
    ];

    let popup_height = (keybindings.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_area = centered_popup(area, 52, popup_height);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^46}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
