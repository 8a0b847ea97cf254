//! Employee form page: step indicator, step fields, review and tooltip

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{
    NEXT_STEP_SHORTCUT, ORIENTATION_SHORTCUT, PREV_STEP_SHORTCUT, SAVE_SHORTCUT,
    TOOLTIP_SHORTCUT,
};
use crate::state::{
    employee_step, EmployeeForm, Form, FormState, StepperOrientation, EMPLOYEE_FORM_STEPS,
    EMPLOYEE_STEP_FIELDS,
};
use crate::ui::layout::create_layout;
use crate::validation::FieldSource;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the step column in the left orientation
const LEFT_STEPPER_WIDTH: u16 = 26;
/// Rows per step in the left orientation
const LEFT_STEP_HEIGHT: u16 = 2;
/// Height of the step row in the top orientation
const TOP_STEPPER_HEIGHT: u16 = 3;
const TOOLTIP_MAX_WIDTH: u16 = 40;

fn page_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Split the form page into the step indicator and the body
pub fn split_form_area(area: Rect, orientation: StepperOrientation) -> (Rect, Rect) {
    let (direction, stepper) = match orientation {
        StepperOrientation::Top => (Direction::Vertical, TOP_STEPPER_HEIGHT),
        StepperOrientation::Left => (Direction::Horizontal, LEFT_STEPPER_WIDTH),
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Length(stepper), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// One cell per step inside the step indicator area
pub fn step_indicator_areas(
    area: Rect,
    orientation: StepperOrientation,
    total: usize,
) -> Vec<Rect> {
    if total == 0 {
        return Vec::new();
    }
    match orientation {
        StepperOrientation::Top => Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..total).map(|_| Constraint::Ratio(1, total as u32)))
            .split(area)
            .to_vec(),
        StepperOrientation::Left => (0..total)
            .map(|idx| Rect {
                x: area.x,
                y: area.y + idx as u16 * LEFT_STEP_HEIGHT,
                width: area.width,
                height: LEFT_STEP_HEIGHT,
            })
            .filter(|cell| cell.bottom() <= area.bottom())
            .collect(),
    }
}

/// Step indicator cells as laid out on a screen of size `screen`
pub fn step_areas_on_screen(
    screen: Rect,
    orientation: StepperOrientation,
    total: usize,
) -> Vec<Rect> {
    let (_, main_area) = create_layout(screen);
    let inner = page_block(String::new()).inner(main_area);
    let (stepper_area, _) = split_form_area(inner, orientation);
    step_indicator_areas(stepper_area, orientation, total)
}

/// 1-based step whose cell contains the given cell position
pub fn step_at(areas: &[Rect], column: u16, row: u16) -> Option<(usize, Rect)> {
    areas
        .iter()
        .position(|cell| {
            column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
        })
        .map(|idx| (idx + 1, areas[idx]))
}

/// Draw the employee create/edit page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Employee(form) = &app.state.form else {
        return;
    };

    let title = format!(
        " {} · Step {} of {} ",
        if form.is_edit() {
            "Edit Employee"
        } else {
            "Add Employee"
        },
        form.current_step(),
        form.stepper.total_steps()
    );
    let block = page_block(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let orientation = form.stepper.orientation();
    let (stepper_area, body_area) = split_form_area(inner, orientation);
    let cells = step_indicator_areas(stepper_area, orientation, form.stepper.total_steps());
    draw_step_indicator(frame, &cells, form);
    draw_body(frame, body_area, form);
    draw_tooltip(frame, form);
}

fn step_style(step: usize, current: usize, has_errors: bool) -> (Style, &'static str) {
    if step == current {
        let color = if has_errors { Color::Red } else { Color::Cyan };
        (
            Style::default().fg(color).add_modifier(Modifier::BOLD),
            "●",
        )
    } else if step < current {
        (Style::default().fg(Color::Green), "✓")
    } else {
        (Style::default().fg(Color::DarkGray), "○")
    }
}

fn draw_step_indicator(frame: &mut Frame, cells: &[Rect], form: &EmployeeForm) {
    let current = form.current_step();
    let orientation = form.stepper.orientation();

    for (idx, cell) in cells.iter().enumerate() {
        let step = idx + 1;
        let Some(definition) = employee_step(step) else {
            continue;
        };
        let (style, marker) = step_style(step, current, !form.errors.is_empty());
        let hovered = form.stepper.hovered_step() == Some(step);
        let style = if hovered {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };

        match orientation {
            StepperOrientation::Top => {
                let label = if cell.width as usize >= definition.title.len() + 4 {
                    format!("{marker} {}", definition.title)
                } else {
                    format!("{marker} {step}")
                };
                let widget = Paragraph::new(Span::styled(label, style))
                    .alignment(Alignment::Center)
                    .block(
                        Block::default()
                            .borders(Borders::BOTTOM)
                            .border_style(style.remove_modifier(Modifier::UNDERLINED)),
                    );
                frame.render_widget(widget, *cell);
            }
            StepperOrientation::Left => {
                let mut lines = vec![Line::from(Span::styled(
                    format!(" {marker} {step}. {}", definition.title),
                    style,
                ))];
                if step < cells.len() {
                    lines.push(Line::from(Span::styled(
                        "   │",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                frame.render_widget(Paragraph::new(lines), *cell);
            }
        }
    }
}

fn draw_body(frame: &mut Frame, area: Rect, form: &EmployeeForm) {
    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step heading
            Constraint::Min(0),    // Fields or review
            Constraint::Length(1), // Help
        ])
        .split(area);

    if let Some(definition) = form.step_definition() {
        let heading = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                definition.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                definition.description,
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(heading, chunks[0]);
    }

    if form.stepper.is_last_step() {
        draw_review(frame, chunks[1], form);
    } else {
        draw_fields(frame, chunks[1], form);
    }

    draw_help_text(frame, chunks[2], &help_text(form));
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &EmployeeForm) {
    let fields = form.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, spec) in fields.iter().enumerate() {
        let value = form.data.field_value(spec.name).unwrap_or_default();
        draw_field(
            frame,
            chunks[idx],
            spec,
            value,
            idx == form.active_field_index,
            form.errors.get(spec.name),
        );
    }
}

/// Summary of every entered value, grouped by step
fn review_lines(form: &EmployeeForm) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (definition, fields) in EMPLOYEE_FORM_STEPS
        .iter()
        .zip(EMPLOYEE_STEP_FIELDS.iter())
    {
        if fields.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            format!("{}. {}", definition.number, definition.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for spec in fields.iter() {
            let value = form.data.field_value(spec.name).unwrap_or_default();
            let shown = if value.is_empty() { "-" } else { value };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", spec.label),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(shown.to_string()),
            ]));
        }
    }
    lines
}

fn draw_review(frame: &mut Frame, area: Rect, form: &EmployeeForm) {
    let review = Paragraph::new(review_lines(form)).wrap(Wrap { trim: false });
    frame.render_widget(review, area);
}

fn help_text(form: &EmployeeForm) -> String {
    let date_hint = if form.is_date_field_active() {
        "↑/↓:date  "
    } else {
        ""
    };
    let back_hint = if form.stepper.is_first_step() {
        String::new()
    } else {
        format!("{PREV_STEP_SHORTCUT}:back  ")
    };
    format!(
        "Tab:field  {date_hint}{NEXT_STEP_SHORTCUT}:next  {back_hint}F1-F9:jump  \
         {SAVE_SHORTCUT}:save  {ORIENTATION_SHORTCUT}:layout  {TOOLTIP_SHORTCUT}:help  Esc:cancel"
    )
}

/// Draw the hovered step's tooltip next to its indicator
fn draw_tooltip(frame: &mut Frame, form: &EmployeeForm) {
    let (Some(step), Some(anchor)) = (form.stepper.hovered_step(), form.stepper.hovered_anchor())
    else {
        return;
    };
    let Some(definition) = employee_step(step) else {
        return;
    };

    let screen = frame.area();
    let width = (definition.tooltip.chars().count() as u16 + 4)
        .min(TOOLTIP_MAX_WIDTH)
        .min(screen.width);
    let text_width = width.saturating_sub(4).max(1) as usize;
    let rows = definition.tooltip.chars().count().div_ceil(text_width) as u16;
    let height = (rows + 3).min(screen.height);

    let (x, y) = match form.stepper.orientation() {
        StepperOrientation::Top => (anchor.x, anchor.bottom()),
        StepperOrientation::Left => (anchor.right(), anchor.y),
    };
    let x = x.min(screen.right().saturating_sub(width));
    let y = y.min(screen.bottom().saturating_sub(height));
    let area = Rect {
        x,
        y,
        width,
        height,
    };

    frame.render_widget(Clear, area);
    let tooltip = Paragraph::new(definition.tooltip)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .block(
            Block::default()
                .title(format!(" {} ", definition.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(tooltip, area);
}
