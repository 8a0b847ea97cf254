//! Field rendering utilities for forms

use crate::state::FieldSpec;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the inline error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a labelled input box with its validation error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };

    let border_color = match (is_active, error.is_some()) {
        (_, true) => Color::Red,
        (true, false) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let display_value = spec.display_value(value);
    let display_str = if value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };
    let cursor = if is_active && spec.is_editable_text() {
        "▌"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    let block = Block::default()
        .title(format!(" {} ", spec.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(content.block(block), input_area);

    if let Some(message) = error {
        if area.height > 3 {
            let error_area = Rect {
                x: area.x + 1,
                y: area.y + 3,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(message, Style::default().fg(Color::Red))),
                error_area,
            );
        }
    }
}

/// Draw a single dim help line
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
