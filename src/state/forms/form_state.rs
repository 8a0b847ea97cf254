//! Form state management and the shared form editing trait

use super::employee_form::EmployeeForm;
use super::field::FieldSpec;
use super::login_form::LoginForm;
use super::user_form::UserForm;
use crate::validation::FieldSource;

/// Form values that can be read and written by field name
pub trait FormData: FieldSource {
    /// Store `value` into `field`; returns false when the field is unknown
    /// or the value is not acceptable for it
    fn set_field(&mut self, field: &str, value: String) -> bool;
}

/// Trait for common form operations
pub trait Form {
    type Data: FormData;

    /// Fields currently shown, in focus order
    fn fields(&self) -> &'static [FieldSpec];
    fn data(&self) -> &Self::Data;
    fn data_mut(&mut self) -> &mut Self::Data;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    /// Hook run after input changed `field`
    fn field_edited(&mut self, _field: &'static str) {}

    fn field_count(&self) -> usize {
        self.fields().len()
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    fn active_spec(&self) -> Option<FieldSpec> {
        self.fields().get(self.active_field()).copied()
    }

    fn input_char(&mut self, c: char) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if !spec.accepts_char(c) {
            return;
        }
        let mut value = self
            .data()
            .field_value(spec.name)
            .unwrap_or_default()
            .to_string();
        value.push(c);
        if self.data_mut().set_field(spec.name, value) {
            self.field_edited(spec.name);
        }
    }

    fn backspace(&mut self) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if !spec.is_editable_text() {
            return;
        }
        let mut value = self
            .data()
            .field_value(spec.name)
            .unwrap_or_default()
            .to_string();
        if value.pop().is_none() {
            return;
        }
        if self.data_mut().set_field(spec.name, value) {
            self.field_edited(spec.name);
        }
    }

    fn cycle_choice(&mut self, forward: bool) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        let current = self.data().field_value(spec.name).unwrap_or_default();
        let Some(next) = spec.cycle(current, forward) else {
            return;
        };
        if self.data_mut().set_field(spec.name, next.to_string()) {
            self.field_edited(spec.name);
        }
    }
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Login(LoginForm),
    Employee(EmployeeForm),
    User(UserForm),
}
