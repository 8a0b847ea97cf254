//! Form domain layer
//!
//! Typed form state for the login, employee and user views.

mod employee_form;
mod field;
mod form_state;
mod login_form;
mod user_form;

pub use employee_form::{EmployeeForm, EMPLOYEE_STEP_FIELDS};
pub use field::FieldSpec;
pub use form_state::{Form, FormData, FormState};
pub use login_form::LoginForm;
pub use user_form::UserForm;
