//! Application state module

mod app_state;
mod entities;
mod forms;
mod stepper;
mod steps;

pub use app_state::*;
pub use entities::*;
pub use forms::*;
pub use stepper::StepperOrientation;
pub use steps::{employee_step, EMPLOYEE_FORM_STEPS};
