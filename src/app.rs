//! Application state and core logic

use crate::auth::AuthStore;
use crate::config::TuiConfig;
use crate::platform::is_shortcut;
use crate::repository::{
    EmployeeRepository, EntityKind, InMemoryEmployeeRepository, InMemoryUserRepository,
    Operation, RepositoryError, UserRepository,
};
use crate::state::{
    AppState, DeleteTarget, EmployeeForm, Form, FormState, LoginForm, PendingDeleteAction,
    UserForm, View, ViewParams,
};
use crate::ui::forms::employee_form::{step_areas_on_screen, step_at};
use crate::ui::layout::{create_layout, sidebar_item_areas, SIDEBAR_ITEMS, SIDEBAR_WIDTH};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    employees: Box<dyn EmployeeRepository>,
    users: Box<dyn UserRepository>,
    pub auth: AuthStore,
    pub config: TuiConfig,
    /// Whether config changes are written back to disk
    save_config: bool,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create the app with seeded repositories and the stored session
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load_or_default();
        let session_path = config
            .session_path
            .clone()
            .or_else(AuthStore::default_path);
        let auth = AuthStore::load(session_path);

        let mut app = Self::with_parts(
            Box::new(InMemoryEmployeeRepository::seeded()),
            Box::new(InMemoryUserRepository::seeded()),
            auth,
            config,
        );
        app.save_config = true;
        app.start().await;
        Ok(app)
    }

    /// Assemble an app from its parts without touching the filesystem
    pub fn with_parts(
        employees: Box<dyn EmployeeRepository>,
        users: Box<dyn UserRepository>,
        auth: AuthStore,
        config: TuiConfig,
    ) -> Self {
        Self {
            state: AppState::default(),
            employees,
            users,
            auth,
            config,
            save_config: false,
            quit: false,
            terminal_size: None,
        }
    }

    /// Show the first screen: the dashboard when a session exists
    pub async fn start(&mut self) {
        if self.auth.is_authenticated() {
            self.state.current_view = View::Dashboard;
        } else {
            self.state.current_view = View::Login;
        }
        self.enter_view().await;
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn screen_rect(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Sidebar item under `mouse_row`, matching the centered button layout
    fn calculate_sidebar_item_from_click(&self, mouse_row: u16) -> Option<usize> {
        let (sidebar_area, _) = create_layout(self.screen_rect());
        sidebar_item_areas(sidebar_area)
            .iter()
            .position(|button| mouse_row >= button.y && mouse_row < button.bottom())
    }

    /// Navigate to a new view; views behind the login redirect to it
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        let (view, params) = if view.requires_auth() && !self.auth.is_authenticated() {
            tracing::debug!(?view, "Not signed in, redirecting to login");
            (View::Login, ViewParams::default())
        } else {
            (view, params)
        };

        if view != self.state.current_view {
            self.state.reset_selection();
        }
        self.state.view_history.push((
            self.state.current_view,
            self.state.view_params.clone(),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            self.state.view_params = params;
            return;
        }
    }

    /// Navigate and prepare the new view's data
    pub async fn open(&mut self, view: View, params: ViewParams) {
        self.navigate(view, params);
        self.enter_view().await;
    }

    /// Load lists or set up the form for the current view
    async fn enter_view(&mut self) {
        match self.state.current_view {
            View::Login => {
                self.state.view_history.clear();
                self.state.form = FormState::Login(LoginForm::new());
            }
            View::Dashboard | View::Employees | View::Users => {
                self.state.form = FormState::None;
                self.refresh_lists().await;
            }
            View::EmployeeCreate => {
                self.state.form = FormState::Employee(EmployeeForm::new(self.config.orientation()));
            }
            View::EmployeeEdit => {
                let id = self.state.view_params.employee_id.clone().unwrap_or_default();
                let orientation = self.config.orientation();
                match EmployeeForm::load(self.employees.as_ref(), &id, orientation).await {
                    Some(form) => self.state.form = FormState::Employee(form),
                    None => {
                        self.push_error(RepositoryError::NotFound(EntityKind::Employee).to_string());
                        self.open_list(View::Employees).await;
                    }
                }
            }
            View::UserCreate => {
                self.state.form = FormState::User(UserForm::new());
            }
            View::UserEdit => {
                let id = self.state.view_params.user_id.clone().unwrap_or_default();
                match self.users.get_by_id(&id).await {
                    Some(user) => self.state.form = FormState::User(UserForm::from_user(&user)),
                    None => {
                        self.push_error(RepositoryError::NotFound(EntityKind::User).to_string());
                        self.open_list(View::Users).await;
                    }
                }
            }
        }
    }

    /// Replace the current view with `list` without growing the history
    async fn open_list(&mut self, list: View) {
        self.state.current_view = list;
        self.state.view_params = ViewParams::default();
        self.state.form = FormState::None;
        self.refresh_lists().await;
    }

    async fn refresh_lists(&mut self) {
        self.state.employees = self.employees.list().await;
        self.state.users = self.users.list().await;
        let len = self.state.list_len();
        self.state.clamp_selection(len);
    }

    /// Close a form and return to the view it was opened from, or `list`
    async fn leave_form(&mut self, list: View) {
        self.state.form = FormState::None;
        self.go_back();
        if self.state.current_view.is_form_view() {
            self.state.current_view = list;
            self.state.view_params = ViewParams::default();
        }
        self.enter_view().await;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation (modal)
        if self.state.pending_delete.is_some() {
            self.handle_confirm_dialog_key(key).await;
            return Ok(());
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key).await,
            View::Dashboard => {
                self.handle_navigation_key(key).await;
            }
            View::Employees | View::Users => self.handle_list_key(key).await,
            View::EmployeeCreate | View::EmployeeEdit => self.handle_employee_form_key(key).await,
            View::UserCreate | View::UserEdit => self.handle_user_form_key(key).await,
        }

        Ok(())
    }

    /// Section hotkeys shared by the non-form views; returns true if handled
    async fn handle_navigation_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('1') => self.open(View::Dashboard, ViewParams::default()).await,
            KeyCode::Char('2') => self.open(View::Employees, ViewParams::default()).await,
            KeyCode::Char('3') => self.open(View::Users, ViewParams::default()).await,
            KeyCode::Char('L') => self.logout().await,
            KeyCode::Char('q') => self.quit = true,
            _ => return false,
        }
        true
    }

    async fn activate_sidebar_item(&mut self, idx: usize) {
        let Some(item) = SIDEBAR_ITEMS.get(idx) else {
            return;
        };
        match item.view {
            Some(view) => self.open(view, ViewParams::default()).await,
            None => self.logout().await,
        }
    }

    async fn logout(&mut self) {
        self.auth.logout();
        self.open(View::Login, ViewParams::default()).await;
    }

    async fn handle_login_key(&mut self, key: KeyEvent) {
        let FormState::Login(form) = &mut self.state.form else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter if !form.is_last_field() => form.next_field(),
            KeyCode::Enter => self.attempt_login().await,
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            _ => {}
        }
    }

    async fn attempt_login(&mut self) {
        let FormState::Login(form) = &self.state.form else {
            return;
        };
        let (email, password) = (form.data.email.clone(), form.data.password.clone());

        let outcome = self.auth.login(&email, &password).map(|_| ());
        match outcome {
            Ok(()) => {
                self.state.view_history.clear();
                self.state.current_view = View::Dashboard;
                self.state.view_params = ViewParams::default();
                self.enter_view().await;
            }
            Err(e) => {
                if let FormState::Login(form) = &mut self.state.form {
                    form.fail(e.to_string());
                }
            }
        }
    }

    /// Handle keys in the employee and user lists
    async fn handle_list_key(&mut self, key: KeyEvent) {
        if self.handle_navigation_key(key).await {
            return;
        }

        let is_employees = self.state.current_view == View::Employees;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.state.list_len();
                self.state.move_selection_down(len);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => {
                let view = if is_employees {
                    View::EmployeeCreate
                } else {
                    View::UserCreate
                };
                self.open(view, ViewParams::default()).await;
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                let target = if is_employees {
                    self.state
                        .selected_employee()
                        .map(|e| (View::EmployeeEdit, ViewParams::employee(&e.id)))
                } else {
                    self.state
                        .selected_user()
                        .map(|u| (View::UserEdit, ViewParams::user(&u.id)))
                };
                if let Some((view, params)) = target {
                    self.open(view, params).await;
                }
            }
            KeyCode::Char('d') => {
                self.state.pending_delete = if is_employees {
                    self.state.selected_employee().map(|e| PendingDeleteAction {
                        target: DeleteTarget::Employee,
                        id: e.id.clone(),
                        display: e.name.clone(),
                        selected_option: false,
                    })
                } else {
                    self.state.selected_user().map(|u| PendingDeleteAction {
                        target: DeleteTarget::User,
                        id: u.id.clone(),
                        display: u.name.clone(),
                        selected_option: false,
                    })
                };
            }
            KeyCode::Esc => {
                self.go_back();
                self.enter_view().await;
            }
            _ => {}
        }
    }

    async fn handle_confirm_dialog_key(&mut self, key: KeyEvent) {
        let Some(action) = self.state.pending_delete.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => {
                action.selected_option = !action.selected_option;
            }
            KeyCode::Enter => {
                if let Some(action) = self.state.pending_delete.take() {
                    if action.selected_option {
                        self.delete(action).await;
                    }
                }
            }
            KeyCode::Char('y') => {
                if let Some(action) = self.state.pending_delete.take() {
                    self.delete(action).await;
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                self.state.pending_delete = None;
            }
            _ => {}
        }
    }

    async fn delete(&mut self, action: PendingDeleteAction) {
        let (kind, result) = match action.target {
            DeleteTarget::Employee => (
                EntityKind::Employee,
                self.employees.delete(&action.id).await,
            ),
            DeleteTarget::User => (EntityKind::User, self.users.delete(&action.id).await),
        };
        match result {
            Ok(()) => {
                self.state
                    .show_toast(kind.success_message(Operation::Delete), self.config.toast_duration());
                self.refresh_lists().await;
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }

    /// Handle keys in the employee create/edit form
    async fn handle_employee_form_key(&mut self, key: KeyEvent) {
        if is_shortcut(&key, 's') {
            self.submit_employee_form().await;
            return;
        }
        if is_shortcut(&key, 'o') {
            self.toggle_stepper_orientation();
            return;
        }
        if is_shortcut(&key, 't') {
            self.toggle_step_tooltip();
            return;
        }
        if key.code == KeyCode::Esc {
            self.leave_form(View::Employees).await;
            return;
        }

        let today = chrono::Local::now().date_naive();
        let FormState::Employee(form) = &mut self.state.form else {
            return;
        };
        let on_review = form.stepper.is_last_step();
        let on_last_field = form.active_field() + 1 >= form.field_count();

        match key.code {
            _ if is_shortcut(&key, 'n') => {
                form.next_step();
            }
            _ if is_shortcut(&key, 'p') => form.prev_step(),
            KeyCode::PageDown => {
                form.next_step();
            }
            KeyCode::PageUp => form.prev_step(),
            KeyCode::F(n) => form.go_to_step(n as usize),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Up if form.is_date_field_active() => form.shift_join_date(1, today),
            KeyCode::Down if form.is_date_field_active() => form.shift_join_date(-1, today),
            KeyCode::Up => form.prev_field(),
            KeyCode::Down => form.next_field(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Enter if on_review => self.submit_employee_form().await,
            KeyCode::Enter if on_last_field => {
                form.next_step();
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            _ => {}
        }
    }

    /// Save the employee form, walking to the review step first
    async fn submit_employee_form(&mut self) {
        let FormState::Employee(form) = &mut self.state.form else {
            return;
        };
        if !form.stepper.is_last_step() {
            form.go_to_step(form.stepper.total_steps());
            if !form.stepper.is_last_step() {
                return;
            }
        }
        if !form.validate_current_step() {
            return;
        }

        let result = match form.editing_id.clone() {
            Some(id) => {
                let patch = form.to_patch();
                self.employees
                    .update(&id, patch)
                    .await
                    .map(|_| Operation::Update)
            }
            None => {
                let employee = form.to_new_employee();
                self.employees.add(employee).await.map(|_| Operation::Add)
            }
        };

        match result {
            Ok(operation) => {
                self.state.show_toast(
                    EntityKind::Employee.success_message(operation),
                    self.config.toast_duration(),
                );
                self.leave_form(View::Employees).await;
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }

    fn toggle_stepper_orientation(&mut self) {
        let FormState::Employee(form) = &mut self.state.form else {
            return;
        };
        form.stepper.toggle_orientation();
        form.stepper.hide_tooltip();
        self.config.stepper_orientation = Some(form.stepper.orientation());
        if self.save_config {
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save config: {e}");
            }
        }
    }

    /// Show or hide the current step's tooltip from the keyboard
    fn toggle_step_tooltip(&mut self) {
        let screen = self.screen_rect();
        let FormState::Employee(form) = &mut self.state.form else {
            return;
        };
        let step = form.current_step();
        if form.stepper.hovered_step() == Some(step) {
            form.stepper.hide_tooltip();
            return;
        }
        let cells = step_areas_on_screen(
            screen,
            form.stepper.orientation(),
            form.stepper.total_steps(),
        );
        let anchor = cells.get(step - 1).copied().unwrap_or_default();
        form.stepper.show_tooltip(step, anchor);
    }

    /// Handle keys in the user create/edit form
    async fn handle_user_form_key(&mut self, key: KeyEvent) {
        if is_shortcut(&key, 's') {
            self.submit_user_form().await;
            return;
        }
        if key.code == KeyCode::Esc {
            self.leave_form(View::Users).await;
            return;
        }

        let FormState::User(form) = &mut self.state.form else {
            return;
        };
        let on_last_field = form.active_field() + 1 >= form.field_count();
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Enter if on_last_field => self.submit_user_form().await,
            KeyCode::Enter => form.next_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            _ => {}
        }
    }

    async fn submit_user_form(&mut self) {
        let FormState::User(form) = &mut self.state.form else {
            return;
        };
        if !form.validate() {
            return;
        }

        let result = match form.editing_id.clone() {
            Some(id) => {
                let patch = form.to_patch();
                self.users.update(&id, patch).await.map(|_| Operation::Update)
            }
            None => {
                let user = form.to_new_user();
                self.users.add(user).await.map(|_| Operation::Add)
            }
        };

        match result {
            Ok(operation) => {
                self.state.show_toast(
                    EntityKind::User.success_message(operation),
                    self.config.toast_duration(),
                );
                self.leave_form(View::Users).await;
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors()
            || self.state.pending_delete.is_some()
            || self.state.current_view == View::Login
        {
            return Ok(());
        }

        if mouse.column < SIDEBAR_WIDTH {
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(idx) = self.calculate_sidebar_item_from_click(mouse.row) {
                        self.activate_sidebar_item(idx).await;
                    }
                }
                MouseEventKind::Moved => {
                    if let FormState::Employee(form) = &mut self.state.form {
                        form.stepper.hide_tooltip();
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        match self.state.current_view {
            View::EmployeeCreate | View::EmployeeEdit => self.handle_employee_form_mouse(mouse),
            View::Employees | View::Users => self.handle_list_mouse(mouse),
            _ => {}
        }
        Ok(())
    }

    /// Hover shows a step's tooltip; clicking a step jumps to it
    fn handle_employee_form_mouse(&mut self, mouse: MouseEvent) {
        let screen = self.screen_rect();
        let FormState::Employee(form) = &mut self.state.form else {
            return;
        };
        let cells = step_areas_on_screen(
            screen,
            form.stepper.orientation(),
            form.stepper.total_steps(),
        );
        let hit = step_at(&cells, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => match hit {
                Some((step, cell)) => form.stepper.show_tooltip(step, cell),
                None => form.stepper.hide_tooltip(),
            },
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((step, _)) = hit {
                    form.go_to_step(step);
                }
            }
            _ => {}
        }
    }

    fn handle_list_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.move_selection_up(),
            MouseEventKind::ScrollDown => {
                let len = self.state.list_len();
                self.state.move_selection_down(len);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(idx) = self.calculate_list_row_from_click(mouse.row) {
                    self.state.selected_index = idx;
                }
            }
            _ => {}
        }
    }

    /// List row under `mouse_row` while the whole list fits on screen
    fn calculate_list_row_from_click(&self, mouse_row: u16) -> Option<usize> {
        let (_, main_area) = create_layout(self.screen_rect());
        // Border, plus the column header row in the employee list
        let first_row = match self.state.current_view {
            View::Employees => main_area.y + 3,
            _ => main_area.y + 1,
        };
        let visible_rows = main_area.bottom().saturating_sub(first_row + 1) as usize;
        let len = self.state.list_len();
        if len > visible_rows || mouse_row < first_row {
            return None;
        }
        let idx = (mouse_row - first_row) as usize;
        (idx < len).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockEmployeeRepository, MockUserRepository};
    use crate::state::{
        Employee, EmployeeProfile, FormData, Status, StepperOrientation, User, UserPatch,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn app_with(employees: Box<dyn EmployeeRepository>) -> App {
        let mut auth = AuthStore::in_memory();
        auth.login("admin@erp.com", "password").unwrap();
        let mut app = App::with_parts(
            employees,
            Box::new(InMemoryUserRepository::seeded()),
            auth,
            TuiConfig::default(),
        );
        app.terminal_size = Some((40, 120));
        app
    }

    async fn signed_in_app() -> App {
        let mut app = app_with(Box::new(InMemoryEmployeeRepository::seeded()));
        app.start().await;
        app
    }

    fn employee_form(app: &mut App) -> &mut EmployeeForm {
        match &mut app.state.form {
            FormState::Employee(form) => form,
            other => panic!("expected employee form, got {other:?}"),
        }
    }

    fn fill_valid_employee(form: &mut EmployeeForm) {
        let values = [
            ("name", "Dewi Lestari"),
            ("email", "dewi.lestari@company.com"),
            ("phone", "081234567899"),
            ("address", "Jl. Asia Afrika 8"),
            ("city", "Bandung"),
            ("postalCode", "40111"),
            ("position", "Accountant"),
            ("department", "Finance"),
            ("joinDate", "2024-02-01"),
            ("emergencyContact", "Budi"),
            ("emergencyPhone", "081311112222"),
            ("bankName", "BNI"),
            ("bankAccount", "0987654321"),
            ("taxNumber", "998877665544332"),
            ("education", "S1"),
            ("university", "Universitas Padjadjaran"),
            ("graduationYear", "2020"),
        ];
        for (field, value) in values {
            form.data.set_field(field, value.to_string());
        }
        form.field_edited("joinDate");
    }

    mod auth {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_starts_on_login_without_session() {
            let mut app = App::with_parts(
                Box::new(InMemoryEmployeeRepository::seeded()),
                Box::new(InMemoryUserRepository::seeded()),
                AuthStore::in_memory(),
                TuiConfig::default(),
            );
            app.start().await;
            assert_eq!(app.state.current_view, View::Login);
            assert!(matches!(app.state.form, FormState::Login(_)));
        }

        #[tokio::test]
        async fn test_login_with_keys() {
            let mut app = App::with_parts(
                Box::new(InMemoryEmployeeRepository::seeded()),
                Box::new(InMemoryUserRepository::seeded()),
                AuthStore::in_memory(),
                TuiConfig::default(),
            );
            app.start().await;
            type_text(&mut app, "admin@erp.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_text(&mut app, "password").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Dashboard);
            assert_eq!(app.state.employees.len(), 3);
            assert_eq!(app.state.users.len(), 3);
        }

        #[tokio::test]
        async fn test_wrong_password_stays_on_login() {
            let mut app = App::with_parts(
                Box::new(InMemoryEmployeeRepository::seeded()),
                Box::new(InMemoryUserRepository::seeded()),
                AuthStore::in_memory(),
                TuiConfig::default(),
            );
            app.start().await;
            type_text(&mut app, "admin@erp.com").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "nope").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Login);
            let FormState::Login(form) = &app.state.form else {
                panic!("expected login form");
            };
            assert_eq!(form.error.as_deref(), Some("Invalid email or password"));
        }

        #[tokio::test]
        async fn test_guard_redirects_to_login() {
            let mut app = App::with_parts(
                Box::new(InMemoryEmployeeRepository::seeded()),
                Box::new(InMemoryUserRepository::seeded()),
                AuthStore::in_memory(),
                TuiConfig::default(),
            );
            app.open(View::Employees, ViewParams::default()).await;
            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_logout_returns_to_login() {
            let mut app = signed_in_app().await;
            app.handle_key(key(KeyCode::Char('L'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Login);
            assert!(!app.auth.is_authenticated());
            assert!(app.state.view_history.is_empty());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_navigate_saves_history() {
            let mut app = signed_in_app().await;
            app.navigate(View::Employees, ViewParams::default());
            assert_eq!(app.state.view_history.len(), 1);
            assert_eq!(app.state.view_history[0].0, View::Dashboard);
        }

        #[tokio::test]
        async fn test_go_back_skips_form_views() {
            let mut app = signed_in_app().await;
            app.navigate(View::Employees, ViewParams::default());
            app.navigate(View::EmployeeCreate, ViewParams::default());
            app.navigate(View::Users, ViewParams::default());
            app.go_back();
            assert_eq!(app.state.current_view, View::Employees);
        }

        #[tokio::test]
        async fn test_go_back_with_empty_history_stays() {
            let mut app = signed_in_app().await;
            app.go_back();
            assert_eq!(app.state.current_view, View::Dashboard);
        }

        #[tokio::test]
        async fn test_hotkeys_switch_sections() {
            let mut app = signed_in_app().await;
            app.handle_key(key(KeyCode::Char('3'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Users);
            app.handle_key(key(KeyCode::Char('2'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Employees);
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Users);
        }

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = signed_in_app().await;
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_sidebar_click_maps_centered_buttons() {
            let mut app = signed_in_app().await;
            app.terminal_size = Some((30, 100));
            // Sidebar is 29 rows; four 3-row buttons start at row 8
            assert_eq!(app.calculate_sidebar_item_from_click(7), None);
            assert_eq!(app.calculate_sidebar_item_from_click(8), Some(0));
            assert_eq!(app.calculate_sidebar_item_from_click(12), Some(1));
            assert_eq!(app.calculate_sidebar_item_from_click(19), Some(3));
            assert_eq!(app.calculate_sidebar_item_from_click(20), None);

            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 15))
                .await
                .unwrap();
            assert_eq!(app.state.current_view, View::Users);
        }
    }

    mod lists {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_edit_opens_selected_employee() {
            let mut app = signed_in_app().await;
            app.open(View::Employees, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('e'))).await.unwrap();

            assert_eq!(app.state.current_view, View::EmployeeEdit);
            assert_eq!(app.state.view_params.employee_id.as_deref(), Some("2"));
            assert_eq!(employee_form(&mut app).data.name, "Siti Nurhaliza");
        }

        #[tokio::test]
        async fn test_unknown_employee_redirects_with_error() {
            let mut app = signed_in_app().await;
            app.open(View::EmployeeEdit, ViewParams::employee("99")).await;
            assert_eq!(app.state.current_view, View::Employees);
            assert_eq!(app.state.current_error(), Some("Employee not found"));
        }

        #[tokio::test]
        async fn test_delete_requires_confirmation() {
            let mut app = signed_in_app().await;
            app.open(View::Employees, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            assert!(app.state.pending_delete.is_some());

            // Enter on the default "Cancel" option keeps the record
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.pending_delete.is_none());
            assert_eq!(app.state.employees.len(), 3);

            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.employees.len(), 2);
            assert_eq!(
                app.state.toast.as_ref().map(|t| t.message.as_str()),
                Some("Employee deleted successfully")
            );
        }

        #[tokio::test]
        async fn test_delete_user() {
            let mut app = signed_in_app().await;
            app.open(View::Users, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
            assert_eq!(app.state.users.len(), 2);
        }

        #[tokio::test]
        async fn test_click_selects_row() {
            let mut app = signed_in_app().await;
            app.open(View::Users, ViewParams::default()).await;
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 3))
                .await
                .unwrap();
            assert_eq!(app.state.selected_index, 2);
        }
    }

    mod employee_form {
        use super::*;
        use pretty_assertions::assert_eq;

        async fn create_form_app() -> App {
            let mut app = signed_in_app().await;
            app.open(View::Employees, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            app
        }

        #[tokio::test]
        async fn test_page_down_blocked_by_errors() {
            let mut app = create_form_app().await;
            app.handle_key(key(KeyCode::PageDown)).await.unwrap();
            let form = employee_form(&mut app);
            assert_eq!(form.current_step(), 1);
            assert_eq!(form.errors.get("name"), Some("Name is required"));
        }

        #[tokio::test]
        async fn test_typing_fills_active_field() {
            let mut app = create_form_app().await;
            type_text(&mut app, "Dewi").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "dewi@company.com").await;
            let form = employee_form(&mut app);
            assert_eq!(form.data.name, "Dewi");
            assert_eq!(form.data.email, "dewi@company.com");
        }

        #[tokio::test]
        async fn test_function_key_jump_stops_at_invalid_step() {
            let mut app = create_form_app().await;
            fill_valid_employee(employee_form(&mut app));
            employee_form(&mut app).data.city.clear();
            app.handle_key(key(KeyCode::F(5))).await.unwrap();
            let form = employee_form(&mut app);
            assert_eq!(form.current_step(), 2);
            assert_eq!(form.errors.get("city"), Some("City is required"));
        }

        #[tokio::test]
        async fn test_date_field_arrow_keys() {
            let mut app = create_form_app().await;
            fill_valid_employee(employee_form(&mut app));
            app.handle_key(key(KeyCode::F(3))).await.unwrap();
            employee_form(&mut app).active_field_index = 2;
            app.handle_key(key(KeyCode::Up)).await.unwrap();
            assert_eq!(employee_form(&mut app).data.join_date, "2024-02-02");
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            assert_eq!(employee_form(&mut app).data.join_date, "2024-01-31");
        }

        #[tokio::test]
        async fn test_ctrl_s_saves_and_returns_to_list() {
            let mut app = create_form_app().await;
            fill_valid_employee(employee_form(&mut app));
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Employees);
            assert_eq!(app.state.employees.len(), 4);
            assert_eq!(app.state.employees[0].name, "Dewi Lestari");
            assert_eq!(app.state.employees[0].profile.city, "Bandung");
            assert_eq!(
                app.state.toast.as_ref().map(|t| t.message.as_str()),
                Some("Employee added successfully")
            );
        }

        #[tokio::test]
        async fn test_ctrl_s_with_invalid_step_stays() {
            let mut app = create_form_app().await;
            fill_valid_employee(employee_form(&mut app));
            employee_form(&mut app).data.tax_number = "123".to_string();
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::EmployeeCreate);
            let form = employee_form(&mut app);
            assert_eq!(form.current_step(), 6);
            assert!(form.errors.contains("taxNumber"));
        }

        #[tokio::test]
        async fn test_enter_on_review_submits() {
            let mut app = create_form_app().await;
            fill_valid_employee(employee_form(&mut app));
            app.handle_key(key(KeyCode::F(9))).await.unwrap();
            assert!(employee_form(&mut app).stepper.is_last_step());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Employees);
        }

        #[tokio::test]
        async fn test_escape_cancels() {
            let mut app = create_form_app().await;
            type_text(&mut app, "Dewi").await;
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Employees);
            assert!(matches!(app.state.form, FormState::None));
            assert_eq!(app.state.employees.len(), 3);
        }

        #[tokio::test]
        async fn test_edit_updates_record() {
            let mut app = signed_in_app().await;
            app.open(View::Employees, ViewParams::default()).await;
            app.open(View::EmployeeEdit, ViewParams::employee("1")).await;
            fill_valid_employee(employee_form(&mut app));
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Employees);
            let updated = app.state.employees.iter().find(|e| e.id == "1").unwrap();
            assert_eq!(updated.name, "Dewi Lestari");
            assert_eq!(
                app.state.toast.as_ref().map(|t| t.message.as_str()),
                Some("Employee updated successfully")
            );
        }

        #[tokio::test]
        async fn test_orientation_toggle_updates_config() {
            let mut app = create_form_app().await;
            app.handle_key(ctrl('o')).await.unwrap();
            assert_eq!(
                employee_form(&mut app).stepper.orientation(),
                StepperOrientation::Left
            );
            assert_eq!(
                app.config.stepper_orientation,
                Some(StepperOrientation::Left)
            );

            // New forms open with the saved orientation
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            assert_eq!(
                employee_form(&mut app).stepper.orientation(),
                StepperOrientation::Left
            );
        }

        #[tokio::test]
        async fn test_tooltip_shortcut_toggles() {
            let mut app = create_form_app().await;
            app.handle_key(ctrl('t')).await.unwrap();
            assert_eq!(employee_form(&mut app).stepper.hovered_step(), Some(1));
            app.handle_key(ctrl('t')).await.unwrap();
            assert!(employee_form(&mut app).stepper.hovered_step().is_none());
        }

        #[tokio::test]
        async fn test_hover_and_click_step_indicator() {
            let mut app = create_form_app().await;
            let cells = step_areas_on_screen(Rect::new(0, 0, 120, 40), StepperOrientation::Top, 9);

            let third = cells[2];
            app.handle_mouse(mouse(MouseEventKind::Moved, third.x + 1, third.y))
                .await
                .unwrap();
            assert_eq!(employee_form(&mut app).stepper.hovered_step(), Some(3));
            assert_eq!(employee_form(&mut app).stepper.hovered_anchor(), Some(third));

            app.handle_mouse(mouse(MouseEventKind::Moved, third.x, 30))
                .await
                .unwrap();
            assert!(employee_form(&mut app).stepper.hovered_step().is_none());

            // Clicking ahead validates step 1, which is blank
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), third.x + 1, third.y))
                .await
                .unwrap();
            assert_eq!(employee_form(&mut app).current_step(), 1);

            fill_valid_employee(employee_form(&mut app));
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), third.x + 1, third.y))
                .await
                .unwrap();
            assert_eq!(employee_form(&mut app).current_step(), 3);
        }
    }

    mod repository_failures {
        use super::*;
        use pretty_assertions::assert_eq;

        fn stored_employee() -> Employee {
            Employee {
                id: "7".to_string(),
                name: "Rina Kartika".to_string(),
                email: "rina@company.com".to_string(),
                position: "Designer".to_string(),
                department: "Product".to_string(),
                phone: "081200000007".to_string(),
                join_date: "2021-05-10".to_string(),
                status: Status::Active,
                created_at: "2021-05-10".to_string(),
                profile: EmployeeProfile::default(),
            }
        }

        #[tokio::test]
        async fn test_add_failure_shows_repository_message() {
            let mut repo = MockEmployeeRepository::new();
            repo.expect_list().returning(Vec::new);
            repo.expect_add()
                .times(1)
                .returning(|_| Err(RepositoryError::EmailRegistered));

            let mut app = app_with(Box::new(repo));
            app.start().await;
            app.open(View::EmployeeCreate, ViewParams::default()).await;
            fill_valid_employee(employee_form(&mut app));
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::EmployeeCreate);
            assert_eq!(app.state.current_error(), Some("Email is already registered"));

            // The dialog swallows keys until dismissed
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(employee_form(&mut app).data.graduation_year, "2020");
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_update_sends_patch_for_loaded_employee() {
            let mut repo = MockEmployeeRepository::new();
            repo.expect_list().returning(Vec::new);
            repo.expect_get_by_id()
                .withf(|id: &str| id == "7")
                .returning(|_| Some(stored_employee()));
            repo.expect_update()
                .withf(|id: &str, patch: &crate::state::EmployeePatch| {
                    id == "7" && patch.email.as_deref() == Some("rina@company.com")
                })
                .times(1)
                .returning(|_, _| Err(RepositoryError::PhoneTaken(EntityKind::Employee)));

            let mut app = app_with(Box::new(repo));
            app.start().await;
            app.open(View::EmployeeEdit, ViewParams::employee("7")).await;
            {
                let form = employee_form(&mut app);
                fill_valid_employee(form);
                form.data.email = "rina@company.com".to_string();
            }
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(
                app.state.current_error(),
                Some("Phone number is already used by another employee")
            );
        }
    }

    mod user_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_create_user() {
            let mut app = signed_in_app().await;
            app.open(View::Users, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            type_text(&mut app, "Maya Sari").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "maya@example.com").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Users);
            assert_eq!(app.state.users[0].name, "Maya Sari");
            assert_eq!(app.state.users[0].role, "Admin");
        }

        #[tokio::test]
        async fn test_invalid_user_shows_inline_errors() {
            let mut app = signed_in_app().await;
            app.open(View::UserCreate, ViewParams::default()).await;
            type_text(&mut app, "Al").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::UserCreate);
            let FormState::User(form) = &app.state.form else {
                panic!("expected user form");
            };
            assert_eq!(
                form.errors.get("name"),
                Some("Name must be at least 3 characters")
            );
        }

        #[tokio::test]
        async fn test_duplicate_user_email() {
            let mut app = signed_in_app().await;
            app.open(View::UserCreate, ViewParams::default()).await;
            type_text(&mut app, "Johnny").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "john@example.com").await;
            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.current_error(), Some("Email is already registered"));
        }

        #[tokio::test]
        async fn test_update_failure_keeps_form_open() {
            let mut users = MockUserRepository::new();
            users.expect_list().returning(Vec::new);
            users
                .expect_get_by_id()
                .withf(|id: &str| id == "5")
                .returning(|_| {
                    Some(User {
                        id: "5".to_string(),
                        name: "Maya Sari".to_string(),
                        email: "maya@example.com".to_string(),
                        role: "Manager".to_string(),
                        status: Status::Active,
                        created_at: "2024-04-01".to_string(),
                    })
                });
            users
                .expect_update()
                .withf(|id: &str, patch: &UserPatch| {
                    id == "5" && patch.email.as_deref() == Some("jane@example.com")
                })
                .times(1)
                .returning(|_, _| Err(RepositoryError::EmailTaken(EntityKind::User)));

            let mut auth = AuthStore::in_memory();
            auth.login("admin@erp.com", "password").unwrap();
            let mut app = App::with_parts(
                Box::new(InMemoryEmployeeRepository::seeded()),
                Box::new(users),
                auth,
                TuiConfig::default(),
            );
            app.start().await;
            app.open(View::UserEdit, ViewParams::user("5")).await;
            if let FormState::User(form) = &mut app.state.form {
                form.data.email = "jane@example.com".to_string();
            }
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::UserEdit);
            assert_eq!(
                app.state.current_error(),
                Some("Email is already used by another user")
            );
        }
    }
}
