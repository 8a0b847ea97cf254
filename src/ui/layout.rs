//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the navigation sidebar
pub const SIDEBAR_WIDTH: u16 = 20;

/// Sidebar entry: hotkey, label and the view it opens (`None` logs out)
pub struct SidebarItem {
    pub hotkey: &'static str,
    pub label: &'static str,
    pub view: Option<View>,
}

pub const SIDEBAR_ITEMS: &[SidebarItem] = &[
    SidebarItem {
        hotkey: "1",
        label: "Dashboard",
        view: Some(View::Dashboard),
    },
    SidebarItem {
        hotkey: "2",
        label: "Employees",
        view: Some(View::Employees),
    },
    SidebarItem {
        hotkey: "3",
        label: "Users",
        view: Some(View::Users),
    },
    SidebarItem {
        hotkey: "L",
        label: "Logout",
        view: None,
    },
];

/// Split the screen into sidebar and main content, leaving the last row
/// for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Content area without sidebar (sign-in screen)
pub fn create_layout_no_sidebar(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area)[0]
}

/// Whether a sidebar item belongs to the current view's section
fn is_item_selected(item: &SidebarItem, view: View) -> bool {
    match item.view {
        Some(View::Employees) => matches!(
            view,
            View::Employees | View::EmployeeCreate | View::EmployeeEdit
        ),
        Some(View::Users) => matches!(view, View::Users | View::UserCreate | View::UserEdit),
        Some(target) => target == view,
        None => false,
    }
}

/// Button areas for the sidebar items, centered vertically in `area`
pub fn sidebar_item_areas(area: Rect) -> Vec<Rect> {
    let content_height = SIDEBAR_ITEMS.len() as u16 * BUTTON_HEIGHT;
    let top = area.y + area.height.saturating_sub(content_height) / 2;
    (0..SIDEBAR_ITEMS.len() as u16)
        .map(|idx| Rect {
            x: area.x,
            y: top + idx * BUTTON_HEIGHT,
            width: area.width,
            height: BUTTON_HEIGHT,
        })
        .filter(|button| button.bottom() <= area.bottom())
        .collect()
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    for (item, button_area) in SIDEBAR_ITEMS.iter().zip(sidebar_item_areas(area)) {
        render_sidebar_button(
            frame,
            button_area,
            item.hotkey,
            item.label,
            is_item_selected(item, app.state.current_view),
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.title()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(toast) = &app.state.toast {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            toast.message.as_str(),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Signed-in user on the right
    if let Some(user) = app.auth.user() {
        let label = format!(" {} ({}) ^C:quit ", user.name, user.role);
        let width = label.chars().count() as u16;
        let user_area = Rect {
            x: area.width.saturating_sub(width),
            y: area.height.saturating_sub(1),
            width: width.min(area.width),
            height: 1,
        };
        let widget =
            Paragraph::new(label).style(Style::default().bg(Color::DarkGray).fg(Color::White));
        frame.render_widget(widget, user_area);
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Login => "Tab:next  Enter:sign in".to_string(),
        View::Dashboard => "1/2/3:navigate  L:logout".to_string(),
        View::Employees | View::Users => {
            "j/k:nav  n:new  e/Enter:edit  d:delete  Esc:back".to_string()
        }
        View::EmployeeCreate | View::EmployeeEdit => {
            "PgDn:next step  PgUp:prev step  F1-F9:jump".to_string()
        }
        View::UserCreate | View::UserEdit => {
            format!("Tab:next  {}:save  Esc:cancel", crate::platform::SAVE_SHORTCUT)
        }
    }
}
