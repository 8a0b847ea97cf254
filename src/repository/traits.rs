//! Repository traits, mockable in tests

use super::error::RepositoryError;
use crate::state::{Employee, EmployeePatch, NewEmployee, NewUser, User, UserPatch};
use async_trait::async_trait;

/// Employee record storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees, newest first
    async fn list(&self) -> Vec<Employee>;

    async fn get_by_id(&self, id: &str) -> Option<Employee>;

    /// Insert a new employee; email and phone must be unused
    async fn add(&mut self, employee: NewEmployee) -> Result<Employee, RepositoryError>;

    /// Merge `patch` into employee `id`
    async fn update(&mut self, id: &str, patch: EmployeePatch)
        -> Result<Employee, RepositoryError>;

    async fn delete(&mut self, id: &str) -> Result<(), RepositoryError>;
}

/// Application user storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Vec<User>;

    async fn get_by_id(&self, id: &str) -> Option<User>;

    /// Insert a new user; email must be unused
    async fn add(&mut self, user: NewUser) -> Result<User, RepositoryError>;

    async fn update(&mut self, id: &str, patch: UserPatch) -> Result<User, RepositoryError>;

    async fn delete(&mut self, id: &str) -> Result<(), RepositoryError>;
}
