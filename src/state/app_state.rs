//! Application state definitions

use super::entities::{Employee, Status, User};
use super::forms::FormState;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard,
    Employees,
    EmployeeCreate,
    EmployeeEdit,
    Users,
    UserCreate,
    UserEdit,
}

impl View {
    /// Create/edit views, which are skipped when going back
    pub fn is_form_view(&self) -> bool {
        matches!(
            self,
            View::EmployeeCreate | View::EmployeeEdit | View::UserCreate | View::UserEdit
        )
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, View::Login)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Sign In",
            View::Dashboard => "Dashboard",
            View::Employees => "Employees",
            View::EmployeeCreate => "Add Employee",
            View::EmployeeEdit => "Edit Employee",
            View::Users => "Users",
            View::UserCreate => "Add User",
            View::UserEdit => "Edit User",
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub employee_id: Option<String>,
    pub user_id: Option<String>,
}

impl ViewParams {
    pub fn employee(id: impl Into<String>) -> Self {
        Self {
            employee_id: Some(id.into()),
            user_id: None,
        }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self {
            employee_id: None,
            user_id: Some(id.into()),
        }
    }
}

/// Record kind targeted by a delete confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Employee,
    User,
}

/// Delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeleteAction {
    pub target: DeleteTarget,
    pub id: String,
    /// Name shown in the dialog
    pub display: String,
    /// `true` when "Delete" is highlighted
    pub selected_option: bool,
}

/// Short-lived success message shown in the status bar
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.duration
    }
}

/// Employee totals shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub inactive_employees: usize,
    pub total_users: usize,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Data
    pub employees: Vec<Employee>,
    pub users: Vec<User>,

    // Selection
    pub selected_index: usize,

    // Form state
    pub form: FormState,

    // Overlays
    errors: VecDeque<String>,
    pub pending_delete: Option<PendingDeleteAction>,
    pub toast: Option<Toast>,
}

impl AppState {
    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "Showing error");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn show_toast(&mut self, message: impl Into<String>, duration: Duration) {
        self.toast = Some(Toast::new(message, duration));
    }

    /// Drop the toast once it has expired
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Keep the selection inside a list of `len` rows
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Number of rows in the list shown by the current view
    pub fn list_len(&self) -> usize {
        match self.current_view {
            View::Employees => self.employees.len(),
            View::Users => self.users.len(),
            _ => 0,
        }
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.get(self.selected_index)
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_index)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let active = self
            .employees
            .iter()
            .filter(|e| e.status == Status::Active)
            .count();
        DashboardStats {
            total_employees: self.employees.len(),
            active_employees: active,
            inactive_employees: self.employees.len() - active,
            total_users: self.users.len(),
        }
    }
}
