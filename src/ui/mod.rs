//! UI module for rendering the TUI

mod components;
mod dashboard;
mod employees;
pub mod forms;
pub mod layout;
mod login;
mod users;
mod widgets;

pub use widgets::{render_scrollable_list, status_span};

use crate::app::App;
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.state.current_view == View::Login {
        let main_area = layout::create_layout_no_sidebar(area);
        login::draw(frame, main_area, app);
    } else {
        let (sidebar_area, main_area) = layout::create_layout(area);
        layout::draw_sidebar(frame, sidebar_area, app);

        match app.state.current_view {
            View::Login => {}
            View::Dashboard => dashboard::draw(frame, main_area, app),
            View::Employees => employees::draw_list(frame, main_area, app),
            View::EmployeeCreate | View::EmployeeEdit => {
                forms::draw_employee_form(frame, main_area, app)
            }
            View::Users => users::draw_list(frame, main_area, app),
            View::UserCreate | View::UserEdit => forms::draw_user_form(frame, main_area, app),
        }
    }

    layout::draw_status_bar(frame, app);

    // Modal overlays, topmost last
    if let Some(action) = &app.state.pending_delete {
        render_confirm_dialog(frame, action);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
