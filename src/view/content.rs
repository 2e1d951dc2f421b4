//! Main content area rendering (disk browser, feed, chat)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, ChatState, DiskState, FeedState, Role, UiState};

use super::utils::{format_opt_date, format_opt_size, render_scrollable_list, truncate_string};

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    disk_state: &DiskState,
    feed_state: &FeedState,
    chat_state: &ChatState,
) {
    match ui_state.active_section {
        ActiveSection::Disk => render_disk(frame, area, ui_state, disk_state),
        ActiveSection::Feed => render_feed(frame, area, ui_state, feed_state),
        ActiveSection::Chat => render_chat(frame, area, ui_state, chat_state),
    }
}

fn section_block(title: &str, is_loading: bool) -> Block<'static> {
    let title = if is_loading {
        format!(" {title} (loading) ")
    } else {
        format!(" {title} ")
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
}

fn render_disk(frame: &mut Frame, area: Rect, ui_state: &UiState, disk_state: &DiskState) {
    let block = section_block("Disk", disk_state.is_loading);

    if disk_state.entries.is_empty() {
        let empty = Paragraph::new(disk_state.empty_text())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let name_width = (area.width as usize).saturating_sub(30).max(12);
    let items: Vec<ListItem> = disk_state
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == ui_state.disk_selected;
            let details = format!(
                "{} - {}",
                format_opt_date(entry.created),
                format_opt_size(entry.size)
            );
            let line = Line::from(vec![
                Span::raw(truncate_string(&entry.name(), name_width)),
                Span::raw("  "),
                Span::styled(details, Style::default().fg(Color::DarkGray)),
            ]);
            let style = if selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    render_scrollable_list(frame, area, items, ui_state.disk_selected, block);
}

fn render_feed(frame: &mut Frame, area: Rect, ui_state: &UiState, feed_state: &FeedState) {
    let block = section_block("Feed - trending Rust repos", feed_state.is_loading);

    if feed_state.rows.is_empty() {
        let text = if feed_state.is_loading {
            "Loading..."
        } else {
            "Nothing here yet."
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let desc_width = (area.width as usize).saturating_sub(6).max(20);
    let items: Vec<ListItem> = feed_state
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = i == ui_state.feed_selected;
            let header_style = if selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(row.name.clone(), header_style),
                Span::raw("  "),
                Span::styled(row.owner.clone(), Style::default().fg(Color::Cyan)),
                Span::raw("  "),
                Span::styled(
                    format!("★ {}  ⋔ {}", row.stars, row.forks),
                    Style::default().fg(Color::Yellow),
                ),
            ])];
            if let Some(description) = &row.description {
                lines.push(Line::from(Span::styled(
                    truncate_string(description, desc_width),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    render_scrollable_list(frame, area, items, ui_state.feed_selected, block);
}

fn render_chat(frame: &mut Frame, area: Rect, ui_state: &UiState, chat_state: &ChatState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Transcript
            Constraint::Length(3), // Input
        ])
        .split(area);

    let items: Vec<ListItem> = chat_state
        .messages
        .iter()
        .enumerate()
        .map(|(i, message)| {
            let selected = i == ui_state.chat_selected;
            let role_color = match message.role {
                Role::System => Color::Yellow,
                Role::User => Color::Cyan,
                Role::Ai => Color::Green,
            };
            let style = if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("[{}] {:>3}  ", message.time_formatted(), message.role.tag()),
                    Style::default().fg(role_color),
                ),
                Span::styled(message.text.clone(), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    render_scrollable_list(
        frame,
        chunks[0],
        items,
        ui_state.chat_selected,
        section_block("Chat", chat_state.is_loading),
    );

    let input_text = if chat_state.input.is_empty() {
        chat_state.input_placeholder().to_string()
    } else {
        chat_state.input.clone()
    };
    let input_style = if chat_state.input.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let input = Paragraph::new(input_text)
        .style(input_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Message (Enter to send) ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(input, chunks[1]);
}
