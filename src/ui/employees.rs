//! Employee list view

use super::render_scrollable_list;
use super::status_span;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let employees = &app.state.employees;

    let block = Block::default()
        .title(format!(" Employees ({}) ", employees.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if employees.is_empty() {
        let content = Paragraph::new("No employees yet.\nPress n to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  {:<24}{:<22}{:<18}", "Name", "Position", "Department"),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("Status", Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = employees
        .iter()
        .enumerate()
        .map(|(idx, employee)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    format!("{:<24}", truncate(&employee.name, 23)),
                    style.fg(Color::White),
                ),
                Span::styled(
                    format!("{:<22}", truncate(&employee.position, 21)),
                    style.fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:<18}", truncate(&employee.department, 17)),
                    style.fg(Color::Gray),
                ),
                status_span(employee.status),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, chunks[1], list, app.state.selected_index);
}

/// Truncate to `max` characters with an ellipsis
pub(super) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
