//! Session persistence
//!
//! The session file records which user is signed in. It is the only
//! cross-session state besides the account store itself: transactions and
//! goals never outlive the session that created them.

use std::path::PathBuf;

use crate::error::SatangError;
use crate::models::User;

use super::file_io::write_json_atomic;

/// Stores the currently signed-in user in session.json
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Result<Option<User>, SatangError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SatangError::Storage(format!("Failed to read session file: {}", e)))?;

        let user: User = serde_json::from_str(&contents)
            .map_err(|e| SatangError::Storage(format!("Failed to parse session file: {}", e)))?;

        Ok(Some(user))
    }

    /// Record a user as signed in
    pub fn set_current_user(&self, user: &User) -> Result<(), SatangError> {
        write_json_atomic(&self.path, user)
    }

    /// Clear the session; returns whether a session existed
    pub fn clear(&self) -> Result<bool, SatangError> {
        if !self.path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&self.path)
            .map_err(|e| SatangError::Storage(format!("Failed to remove session file: {}", e)))?;

        Ok(true)
    }
}
