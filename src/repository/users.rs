//! In-memory user repository

use super::error::{EntityKind, RepositoryError};
use super::today;
use super::traits::UserRepository;
use crate::state::{NewUser, Status, User, UserPatch};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Repository holding the three demo users
    pub fn seeded() -> Self {
        let seed = |id: &str, name: &str, email: &str, role: &str, status, created: &str| User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
            created_at: created.to_string(),
        };
        Self {
            users: vec![
                seed("1", "John Doe", "john@example.com", "Admin", Status::Active, "2024-01-15"),
                seed("2", "Jane Smith", "jane@example.com", "Manager", Status::Active, "2024-02-20"),
                seed("3", "Bob Johnson", "bob@example.com", "Employee", Status::Inactive, "2024-03-10"),
            ],
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    async fn get_by_id(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    async fn add(&mut self, user: NewUser) -> Result<User, RepositoryError> {
        if self.users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::EmailRegistered);
        }
        let record = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status,
            created_at: today(),
        };
        tracing::info!(id = %record.id, "Added user");
        self.users.insert(0, record.clone());
        Ok(record)
    }

    async fn update(&mut self, id: &str, patch: UserPatch) -> Result<User, RepositoryError> {
        let index = self
            .position(id)
            .ok_or(RepositoryError::NotFound(EntityKind::User))?;
        if let Some(email) = patch.email.as_deref().filter(|v| !v.is_empty()) {
            if self.users.iter().any(|u| u.id != id && u.email == email) {
                return Err(RepositoryError::EmailTaken(EntityKind::User));
            }
        }
        let record = &mut self.users[index];
        patch.apply_to(record);
        tracing::info!(id, "Updated user");
        Ok(record.clone())
    }

    async fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        let index = self
            .position(id)
            .ok_or(RepositoryError::NotFound(EntityKind::User))?;
        self.users.remove(index);
        tracing::info!(id, "Deleted user");
        Ok(())
    }
}
