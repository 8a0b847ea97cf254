//! Rule-table validation for the multi-step forms

mod engine;
mod rules;
mod schema;

pub use engine::{ErrorMap, FieldSource, ValidationEngine};
pub use schema::{ROLE_OPTIONS, STATUS_OPTIONS};
