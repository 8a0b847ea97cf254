//! Repository failures and success messages

use thiserror::Error;

/// Kind of record a repository manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    User,
}

impl EntityKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::User => "User",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::User => "user",
        }
    }

    pub fn success_message(&self, operation: Operation) -> String {
        format!("{} {} successfully", self.title(), operation.past_tense())
    }
}

/// Mutating repository operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Delete,
}

impl Operation {
    fn past_tense(&self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

/// Rejected repository mutation; the message is shown to the user as-is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{} not found", .0.title())]
    NotFound(EntityKind),

    #[error("Email is already registered")]
    EmailRegistered,

    #[error("Phone number is already registered")]
    PhoneRegistered,

    #[error("Email is already used by another {}", .0.noun())]
    EmailTaken(EntityKind),

    #[error("Phone number is already used by another {}", .0.noun())]
    PhoneTaken(EntityKind),
}
