//! Authentication service
//!
//! Signup, login, logout, and session lookup against the user store.
//! Passwords are hashed with Argon2id before they ever touch disk, and the
//! plaintext buffer is zeroized once the hash exists. Login failures do not
//! reveal whether the email or the password was wrong.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use zeroize::Zeroize;

use crate::audit::{EntityType, Operation};
use crate::error::{SatangError, SatangResult};
use crate::models::{User, UserRecord};
use crate::storage::Storage;

/// Service for account management and sessions
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account and sign it in
    ///
    /// The password string is wiped after hashing.
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        mut password: String,
    ) -> SatangResult<User> {
        if password.is_empty() {
            return Err(SatangError::Validation("Password cannot be empty".into()));
        }

        if self.storage.users.find_by_email(email)?.is_some() {
            password.zeroize();
            return Err(SatangError::user_exists(email.trim()));
        }

        let hash = hash_password(&password)?;
        password.zeroize();

        let record = UserRecord::new(name.trim(), email.trim(), hash);
        record
            .validate()
            .map_err(|e| SatangError::Validation(e.to_string()))?;

        let user = record.user();
        self.storage.users.insert(record)?;
        self.storage.users.save()?;
        self.storage.session.set_current_user(&user)?;

        self.storage.log_event(
            Operation::Create,
            EntityType::User,
            user.id.to_string(),
            Some(user.email.clone()),
        )?;
        self.storage.log_event(
            Operation::Login,
            EntityType::Session,
            user.id.to_string(),
            None,
        )?;

        Ok(user)
    }

    /// Sign in with email and password
    pub fn login(&self, email: &str, mut password: String) -> SatangResult<User> {
        let record = self.storage.users.find_by_email(email)?;
        let verified = match &record {
            Some(record) => verify_password(&password, &record.password_hash)?,
            // Unknown email takes the same rejection path as a bad password
            None => false,
        };
        password.zeroize();

        let record = match (record, verified) {
            (Some(record), true) => record,
            _ => return Err(SatangError::Auth("invalid email or password".into())),
        };

        let user = record.user();
        self.storage.session.set_current_user(&user)?;

        self.storage.log_event(
            Operation::Login,
            EntityType::Session,
            user.id.to_string(),
            Some(user.email.clone()),
        )?;

        Ok(user)
    }

    /// Sign out; returns whether a session existed
    pub fn logout(&self) -> SatangResult<bool> {
        let current = self.storage.session.current_user()?;
        let cleared = self.storage.session.clear()?;

        if let Some(user) = current {
            self.storage.log_event(
                Operation::Logout,
                EntityType::Session,
                user.id.to_string(),
                None,
            )?;
        }

        Ok(cleared)
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> SatangResult<Option<User>> {
        self.storage.session.current_user()
    }
}

/// Hash a password with Argon2id and a fresh random salt
fn hash_password(password: &str) -> SatangResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SatangError::Auth(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash
fn verify_password(password: &str, stored_hash: &str) -> SatangResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| SatangError::Auth(format!("Stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SatangPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SatangPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_signup_signs_in() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        let user = service
            .signup("Mali", "mali@example.com", "hunter2hunter2".to_string())
            .unwrap();

        assert_eq!(user.name, "Mali");
        assert_eq!(service.current_user().unwrap(), Some(user));
    }

    #[test]
    fn test_signup_stores_hash_not_password() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service
            .signup("Mali", "mali@example.com", "hunter2hunter2".to_string())
            .unwrap();

        let record = storage
            .users
            .find_by_email("mali@example.com")
            .unwrap()
            .unwrap();
        assert!(record.password_hash.starts_with("$argon2"));
        assert!(!record.password_hash.contains("hunter2"));
    }

    #[test]
    fn test_duplicate_signup_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service
            .signup("Mali", "mali@example.com", "hunter2hunter2".to_string())
            .unwrap();

        let err = service
            .signup("Imposter", "mali@example.com", "password123".to_string())
            .unwrap_err();
        assert!(matches!(err, SatangError::Duplicate { .. }));
    }

    #[test]
    fn test_login_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        let user = service
            .signup("Mali", "mali@example.com", "hunter2hunter2".to_string())
            .unwrap();
        assert!(service.logout().unwrap());
        assert!(service.current_user().unwrap().is_none());

        let logged_in = service
            .login("mali@example.com", "hunter2hunter2".to_string())
            .unwrap();
        assert_eq!(logged_in, user);
        assert!(service.current_user().unwrap().is_some());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service
            .signup("Mali", "mali@example.com", "hunter2hunter2".to_string())
            .unwrap();
        service.logout().unwrap();

        let err = service
            .login("mali@example.com", "wrong-password".to_string())
            .unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn test_unknown_user_same_error_as_wrong_password() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        let err = service
            .login("nobody@example.com", "whatever".to_string())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Authentication error: invalid email or password"
        );
    }

    #[test]
    fn test_logout_without_session() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);
        assert!(!service.logout().unwrap());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        let err = service
            .signup("Mali", "not-an-email", "hunter2hunter2".to_string())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_audit_trail_written() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service
            .signup("Mali", "mali@example.com", "hunter2hunter2".to_string())
            .unwrap();
        service.logout().unwrap();

        let entries = storage.audit_log().read_all().unwrap();
        let ops: Vec<Operation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Login, Operation::Logout]);
    }
}
