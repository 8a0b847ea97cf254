use super::field::FieldSpec;
use super::form_state::{Form, FormData};
use crate::validation::FieldSource;

const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("email", "Email"),
    FieldSpec::secret("password", "Password"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

impl FieldSource for LoginFormData {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => None,
        }
    }
}

impl FormData for LoginFormData {
    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "email" => self.email = value,
            "password" => self.password = value,
            _ => return false,
        }
        true
    }
}

/// Sign-in form
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub data: LoginFormData,
    pub active_field_index: usize,
    /// Message from the last failed attempt
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_last_field(&self) -> bool {
        self.active_field_index + 1 >= self.field_count()
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.data.password.clear();
        self.active_field_index = 1;
    }
}

impl Form for LoginForm {
    type Data = LoginFormData;

    fn fields(&self) -> &'static [FieldSpec] {
        LOGIN_FIELDS
    }

    fn data(&self) -> &LoginFormData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut LoginFormData {
        &mut self.data
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index;
    }

    fn field_edited(&mut self, _field: &'static str) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_moves_through_fields() {
        let mut form = LoginForm::new();
        "a@b".chars().for_each(|c| form.input_char(c));
        form.next_field();
        "pw".chars().for_each(|c| form.input_char(c));
        assert_eq!(form.data.email, "a@b");
        assert_eq!(form.data.password, "pw");
        assert!(form.is_last_field());
    }

    #[test]
    fn test_fail_clears_password_and_focuses_it() {
        let mut form = LoginForm::new();
        form.data.password = "wrong".to_string();
        form.fail("Invalid email or password");
        assert!(form.data.password.is_empty());
        assert_eq!(form.active_field_index, 1);
        assert_eq!(form.error.as_deref(), Some("Invalid email or password"));
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = LoginForm::new();
        form.fail("Invalid email or password");
        form.input_char('x');
        assert!(form.error.is_none());
    }
}
