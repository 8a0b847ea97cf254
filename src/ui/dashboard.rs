//! Dashboard with employee and user totals

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn stat_card(frame: &mut Frame, area: Rect, label: &str, value: usize, color: Color) {
    let content = Paragraph::new(vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(content, area);
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.state.dashboard_stats();
    let greeting = app
        .auth
        .user()
        .map(|u| format!(" Welcome back, {} ", u.name))
        .unwrap_or_else(|| " Dashboard ".to_string());

    let block = Block::default()
        .title(greeting)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[1]);

    stat_card(frame, cards[0], "Employees", stats.total_employees, Color::Cyan);
    stat_card(frame, cards[1], "Active", stats.active_employees, Color::Green);
    stat_card(frame, cards[2], "Inactive", stats.inactive_employees, Color::Red);
    stat_card(frame, cards[3], "Users", stats.total_users, Color::Yellow);

    let help = Paragraph::new("Press 2 for employees, 3 for users.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[3]);
}
