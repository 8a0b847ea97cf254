//! Single-page user create/edit form

use super::field::FieldSpec;
use super::form_state::{Form, FormData};
use crate::state::entities::{NewUser, Status, User, UserPatch};
use crate::validation::{ErrorMap, FieldSource, ValidationEngine, ROLE_OPTIONS, STATUS_OPTIONS};

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name"),
    FieldSpec::text("email", "Email"),
    FieldSpec::choice("role", "Role", ROLE_OPTIONS),
    FieldSpec::choice("status", "Status", STATUS_OPTIONS),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFormData {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: Status,
}

impl Default for UserFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: "Employee".to_string(),
            status: Status::Active,
        }
    }
}

impl FieldSource for UserFormData {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "role" => Some(&self.role),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl FormData for UserFormData {
    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "role" => self.role = value,
            "status" => match value.parse() {
                Ok(status) => self.status = status,
                Err(_) => return false,
            },
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct UserForm {
    pub data: UserFormData,
    pub errors: ErrorMap,
    pub editing_id: Option<String>,
    pub active_field_index: usize,
    engine: ValidationEngine,
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            data: UserFormData::default(),
            errors: ErrorMap::new(),
            editing_id: None,
            active_field_index: 0,
            engine: ValidationEngine::user(),
        }
    }

    pub fn from_user(user: &User) -> Self {
        let mut form = Self::new();
        form.data = UserFormData {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status,
        };
        form.editing_id = Some(user.id.clone());
        form
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn validate(&mut self) -> bool {
        self.engine.validate_step(&self.data, 1, &mut self.errors)
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.data.name.trim().to_string(),
            email: self.data.email.trim().to_string(),
            role: self.data.role.clone(),
            status: self.data.status,
        }
    }

    pub fn to_patch(&self) -> UserPatch {
        let new = self.to_new_user();
        UserPatch {
            name: Some(new.name),
            email: Some(new.email),
            role: Some(new.role),
            status: Some(new.status),
        }
    }
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for UserForm {
    type Data = UserFormData;

    fn fields(&self) -> &'static [FieldSpec] {
        USER_FIELDS
    }

    fn data(&self) -> &UserFormData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut UserFormData {
        &mut self.data
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index;
    }

    fn field_edited(&mut self, field: &'static str) {
        if self.errors.contains(field) {
            self.engine
                .validate_field(&self.data, field, 1, &mut self.errors);
        }
    }
}
