//! Confirmation dialog for deletes

use super::base::{key_span, render_dialog, DialogConfig};
use crate::state::{DeleteTarget, PendingDeleteAction};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingDeleteAction) {
    let noun = match action.target {
        DeleteTarget::Employee => "employee",
        DeleteTarget::User => "user",
    };
    let message = format!("Delete {noun} \"{}\"? This cannot be undone.", action.display);

    let extra = [(false, "Cancel", Color::White), (true, "Delete", Color::Red)]
        .into_iter()
        .map(|(is_delete, label, color)| {
            let is_selected = action.selected_option == is_delete;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{prefix}{label}"), style))
        })
        .collect();

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Delete",
            accent: Color::Red,
            message: &message,
            extra,
            hint: vec![
                key_span("↑↓"),
                Span::raw(" select  "),
                key_span("Enter"),
                Span::raw(" confirm  "),
                key_span("Esc"),
                Span::raw(" cancel"),
            ],
            max_width: 56,
        },
    );
}
