//! Sign-in screen

use crate::app::App;
use crate::state::{Form, FormState};
use crate::validation::FieldSource;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LOGIN_WIDTH: u16 = 46;
const LOGIN_HEIGHT: u16 = 12;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Login(form) = &app.state.form else {
        return;
    };

    let width = LOGIN_WIDTH.min(area.width);
    let height = LOGIN_HEIGHT.min(area.height);
    let login_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "ERP Admin",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (idx, spec) in form.fields().iter().enumerate() {
        let is_active = idx == form.active_field_index;
        let value = form.data.field_value(spec.name).unwrap_or_default();
        let label_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if is_active { "▌" } else { "" };
        lines.push(Line::from(Span::styled(spec.label, label_style)));
        lines.push(Line::from(vec![
            Span::raw(spec.display_value(value)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(""));
    }

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab:next  Enter:sign in",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .title(" Sign In ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, login_area);
}
