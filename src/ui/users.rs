//! User list view

use super::employees::truncate;
use super::{render_scrollable_list, status_span};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let users = &app.state.users;
    let block = Block::default()
        .title(format!(" Users ({}) ", users.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if users.is_empty() {
        let content = Paragraph::new("No users yet.\nPress n to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = users
        .iter()
        .enumerate()
        .map(|(idx, user)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("[{}] ", user.role), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:<22}", truncate(&user.name, 21)),
                    style.fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:<28}", truncate(&user.email, 27)),
                    style.fg(Color::Gray),
                ),
                status_span(user.status),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
