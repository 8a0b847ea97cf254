//! Sign-in and the persisted session

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ADMIN_EMAIL: &str = "admin@erp.com";
const ADMIN_PASSWORD: &str = "password";

/// Signed-in user as shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub role: String,
}

impl SessionUser {
    fn admin() -> Self {
        Self {
            name: "Riko".to_string(),
            role: "Admin".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Session {
    user: SessionUser,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("failed to write session: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Authentication state backed by an optional session file
#[derive(Debug, Default)]
pub struct AuthStore {
    path: Option<PathBuf>,
    user: Option<SessionUser>,
}

impl AuthStore {
    /// Session file under the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "erp", "erp-admin")
            .map(|dirs| dirs.data_dir().join("session.json"))
    }

    /// Restore the session stored at `path`, if any
    pub fn load(path: Option<PathBuf>) -> Self {
        let user = path.as_deref().and_then(read_session);
        Self { path, user }
    }

    /// Store that never touches the filesystem
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&SessionUser, AuthError> {
        if email.trim() != ADMIN_EMAIL || password != ADMIN_PASSWORD {
            tracing::warn!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let user = SessionUser::admin();
        tracing::info!(user = %user.name, "Logged in");
        if let Some(path) = &self.path {
            // The session stays valid in memory when it cannot be stored
            if let Err(e) = write_session(path, &user) {
                tracing::warn!("Failed to save session: {e}");
            }
        }
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) {
        self.user = None;
        if let Some(path) = &self.path {
            if let Err(e) = fs::remove_file(path) {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!("Failed to remove session file: {e}");
                }
            }
        }
        tracing::info!("Logged out");
    }
}

fn write_session(path: &Path, user: &SessionUser) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let session = Session { user: user.clone() };
    fs::write(path, serde_json::to_string_pretty(&session)?)?;
    Ok(())
}

fn read_session(path: &Path) -> Option<SessionUser> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Session>(&content) {
        Ok(session) => Some(session.user),
        Err(e) => {
            tracing::warn!("Ignoring unreadable session file: {e}");
            None
        }
    }
}
