//! Reusable UI widget helpers

use crate::state::Status;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that keeps the selected row visible
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Colored status badge
pub fn status_span(status: Status) -> Span<'static> {
    let color = if status.is_active() {
        Color::Green
    } else {
        Color::Red
    };
    Span::styled(status.label(), Style::default().fg(color))
}
