//! User repository for JSON storage
//!
//! Manages loading and saving account records to users.json. Emails are the
//! lookup key and must be unique within the store; comparisons are
//! case-insensitive.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SatangError;
use crate::models::{UserId, UserRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user store structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<UserRecord>,
}

/// Repository for user account persistence
pub struct UserRepository {
    path: PathBuf,
    /// Keyed by lowercased email
    data: RwLock<HashMap<String, UserRecord>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load user records from disk
    pub fn load(&self) -> Result<(), SatangError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SatangError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.users {
            data.insert(record.email.to_lowercase(), record);
        }

        Ok(())
    }

    /// Save user records to disk
    pub fn save(&self) -> Result<(), SatangError> {
        let data = self
            .data
            .read()
            .map_err(|e| SatangError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<UserRecord> = data.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = UserData { users };
        write_json_atomic(&self.path, &file_data)
    }

    /// Find a user record by email (case-insensitive)
    pub fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, SatangError> {
        let data = self
            .data
            .read()
            .map_err(|e| SatangError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&email.trim().to_lowercase()).cloned())
    }

    /// Find a user record by id
    pub fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, SatangError> {
        let data = self
            .data
            .read()
            .map_err(|e| SatangError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|r| r.id == id).cloned())
    }

    /// Insert a new user record; fails if the email is already taken
    pub fn insert(&self, record: UserRecord) -> Result<(), SatangError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SatangError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let key = record.email.to_lowercase();
        if data.contains_key(&key) {
            return Err(SatangError::user_exists(record.email));
        }

        data.insert(key, record);
        Ok(())
    }

    /// Count stored user records
    pub fn count(&self) -> Result<usize, SatangError> {
        let data = self
            .data
            .read()
            .map_err(|e| SatangError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, UserRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let repo = UserRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_find() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = UserRecord::new("Mali", "mali@example.com", "$argon2id$stub");
        let id = record.id;
        repo.insert(record).unwrap();

        let found = repo.find_by_email("mali@example.com").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Mali");

        let by_id = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(by_id.email, "mali@example.com");
    }

    #[test]
    fn test_email_lookup_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(UserRecord::new("Mali", "Mali@Example.com", "h"))
            .unwrap();

        assert!(repo.find_by_email("mali@example.com").unwrap().is_some());
        assert!(repo.find_by_email("  MALI@EXAMPLE.COM ").unwrap().is_some());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(UserRecord::new("Mali", "mali@example.com", "h"))
            .unwrap();

        let err = repo
            .insert(UserRecord::new("Other", "MALI@example.com", "h"))
            .unwrap_err();
        assert!(matches!(err, SatangError::Duplicate { .. }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = UserRecord::new("Mali", "mali@example.com", "$argon2id$stub");
        let id = record.id;
        repo.insert(record).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("users.json");
        let repo2 = UserRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let found = repo2.find_by_email("mali@example.com").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.password_hash, "$argon2id$stub");
    }

    #[test]
    fn test_missing_user() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert!(repo.find_by_email("nobody@example.com").unwrap().is_none());
    }
}
