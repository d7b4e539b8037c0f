//! Storage layer for satang
//!
//! JSON file storage with atomic writes for the two pieces of persistent
//! state: the account store and the session file. The session ledger itself
//! is deliberately never persisted here.

pub mod file_io;
pub mod session;
pub mod users;

pub use file_io::{read_json, write_json_atomic};
pub use session::SessionStore;
pub use users::UserRepository;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::SatangPaths;
use crate::error::SatangError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SatangPaths,
    pub users: UserRepository,
    pub session: SessionStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SatangPaths) -> Result<Self, SatangError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            session: SessionStore::new(paths.session_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SatangPaths {
        &self.paths
    }

    /// Load all persistent data from disk
    pub fn load_all(&mut self) -> Result<(), SatangError> {
        self.users.load()?;
        Ok(())
    }

    /// Save all persistent data to disk
    pub fn save_all(&self) -> Result<(), SatangError> {
        self.users.save()?;
        Ok(())
    }

    /// Append an audit entry
    pub fn log_event(
        &self,
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        detail: Option<String>,
    ) -> Result<(), SatangError> {
        self.audit
            .log(&AuditEntry::new(operation, entity_type, entity_id, detail))
    }

    /// Read back the audit trail
    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SatangPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("exports").exists());
        assert_eq!(storage.users.count().unwrap(), 0);
    }

    #[test]
    fn test_log_event_appends() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SatangPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_event(Operation::Login, EntityType::User, "usr-1", None)
            .unwrap();

        let entries = storage.audit_log().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Login);
    }
}
