//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Inner horizontal padding plus borders
const CHROME_WIDTH: u16 = 6;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Plain message, word-wrapped to the dialog width
    pub message: &'a str,
    /// Extra styled lines under the message (options, details)
    pub extra: Vec<Line<'a>>,
    /// Key hint on the last line
    pub hint: Vec<Span<'a>>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            accent: Color::White,
            message: "",
            extra: Vec::new(),
            hint: Vec::new(),
            max_width: 60,
        }
    }
}

/// Hint span for a key name
pub fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let max_line_width = config.max_width.saturating_sub(CHROME_WIDTH).max(1) as usize;
    let wrapped = wrap_text(config.message, max_line_width);

    let widest = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain(config.extra.iter().map(Line::width))
        .chain(std::iter::once(config.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let width = (widest + CHROME_WIDTH).min(config.max_width).min(area.width);

    // title + blank + message + extra + blank + hint, plus borders
    let hint_rows = if config.hint.is_empty() { 0 } else { 2 };
    let height = (2 + wrapped.len() + config.extra.len() + hint_rows + 2) as u16;
    let height = height.min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    content.extend(config.extra);
    if !config.hint.is_empty() {
        content.push(Line::from(""));
        content.push(Line::from(config.hint));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(dialog, dialog_area);
}

/// Word-wrap `text` to `max_width` characters, keeping explicit newlines
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}
