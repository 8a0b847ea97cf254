//! User create/edit page

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::state::{Form, FormState};
use crate::validation::FieldSource;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::User(form) = &app.state.form else {
        return;
    };

    let title = if form.is_edit() {
        " Edit User "
    } else {
        " Add User "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, spec) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            spec,
            form.data.field_value(spec.name).unwrap_or_default(),
            idx == form.active_field_index,
            form.errors.get(spec.name),
        );
    }

    draw_help_text(
        frame,
        chunks[chunks.len() - 1],
        &format!("Tab:field  ←/→:choose  Enter:next  {SAVE_SHORTCUT}:save  Esc:cancel"),
    );
}
