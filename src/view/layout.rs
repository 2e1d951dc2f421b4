//! Layout rendering (top bar, sidebar, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, work_dir: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // App title
            Constraint::Min(0),     // Work directory
        ])
        .split(area);

    let title = Paragraph::new("greenfield-rs")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let dir = Paragraph::new(work_dir.to_string())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Work Directory ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(dir, chunks[1]);
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let items: Vec<ListItem> = ActiveSection::all()
        .iter()
        .map(|section| {
            let style = if *section == ui_state.active_section {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(section.title()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sections ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, is_loading: bool) {
    let hint = if is_loading {
        "Loading...  |  H help  Q quit"
    } else {
        "Tab sections  ↑↓ select  Enter open  R reload  H help  Q quit"
    };

    let status = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}
