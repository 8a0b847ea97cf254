//! Employee and user storage
//!
//! Records live in memory for the lifetime of the process; the traits
//! are the seam for swapping in another backend.

mod employees;
mod error;
mod traits;
mod users;

pub use employees::InMemoryEmployeeRepository;
pub use error::{EntityKind, Operation, RepositoryError};
pub use traits::{EmployeeRepository, UserRepository};
pub use users::InMemoryUserRepository;

#[cfg(test)]
pub use traits::{MockEmployeeRepository, MockUserRepository};

/// Today's local date as `YYYY-MM-DD`
fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
