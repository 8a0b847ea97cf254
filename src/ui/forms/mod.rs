//! Form rendering module
//!
//! - `field_renderer`: labelled input with inline error
//! - `employee_form`: multi-step employee form with its step indicator
//! - `user_form`: single-page user form

pub mod employee_form;
mod field_renderer;
mod user_form;

pub use employee_form::draw as draw_employee_form;
pub use user_form::draw as draw_user_form;
