//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered sidebar button showing its hotkey and label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    hotkey: &str,
    label: &str,
    is_selected: bool,
) {
    let (border_style, label_style) = if is_selected {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    let content = Line::from(vec![
        Span::raw(" "),
        Span::styled(hotkey, Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(label, label_style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
